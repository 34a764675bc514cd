// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Step configuration
//!
//! Everything a step needs from the outside world travels in an explicit
//! [`StepConfig`] value; the physics core holds no global state.

use crate::error::ConfigError;
use crate::math::Vec2;

/// Default window width in pixels
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Default downward acceleration, in units per tick
pub const DEFAULT_GRAVITY: f64 = 0.5;

/// Default multiplicative damping applied to the implicit velocity
pub const DEFAULT_DAMPING: f64 = 0.99;

/// Axis-aligned rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Create bounds with the given extents
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Centre of the rectangle, halved with integer division
    ///
    /// Hosts place the first ragdoll here.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Check if a point lies inside the rectangle, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Check if both extents are positive and finite
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.width.is_finite() && self.height > 0.0 && self.height.is_finite()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Parameters passed into every physics step
///
/// # Builder Pattern
///
/// ```
/// use ragdoll_physics::{Bounds, StepConfig};
///
/// let config = StepConfig::new()
///     .with_bounds(Bounds::new(1024.0, 768.0))
///     .with_gravity(0.25)
///     .with_damping(0.98);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.gravity(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    bounds: Bounds,
    gravity: f64,
    damping: f64,
}

impl StepConfig {
    /// Create a config with the default 800x600 bounds, gravity and damping
    pub fn new() -> Self {
        StepConfig {
            bounds: Bounds::default(),
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
        }
    }

    /// Set the bounds
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the gravity
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Bounds particles are clamped to
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Vertical acceleration added each tick
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Factor applied to the implicit velocity each tick
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Validate the configuration
    ///
    /// Steps run unchecked, so hosts should call this once before handing
    /// the config to the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StepConfig::default();
        assert_eq!(config.bounds().width(), 800.0);
        assert_eq!(config.bounds().height(), 600.0);
        assert_eq!(config.gravity(), 0.5);
        assert_eq!(config.damping(), 0.99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bounds_center_uses_integer_halving() {
        assert_eq!(Bounds::new(800.0, 600.0).center(), Vec2::new(400.0, 300.0));
        assert_eq!(Bounds::new(801.0, 599.0).center(), Vec2::new(400.0, 299.0));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(10.0, 20.0);
        assert!(bounds.contains(Vec2::new(0.0, 0.0)));
        assert!(bounds.contains(Vec2::new(10.0, 20.0)));
        assert!(!bounds.contains(Vec2::new(-0.1, 5.0)));
        assert!(!bounds.contains(Vec2::new(5.0, 20.1)));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let config = StepConfig::new().with_bounds(Bounds::new(0.0, 600.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBounds { width: 0.0, height: 600.0 })
        );

        let config = StepConfig::new().with_bounds(Bounds::new(800.0, f64::INFINITY));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBounds { .. })));
    }

    #[test]
    fn test_invalid_gravity_rejected() {
        let config = StepConfig::new().with_gravity(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGravity(_))));
    }

    #[test]
    fn test_damping_range() {
        assert!(StepConfig::new().with_damping(1.0).validate().is_ok());
        assert_eq!(
            StepConfig::new().with_damping(0.0).validate(),
            Err(ConfigError::InvalidDamping(0.0))
        );
        assert_eq!(
            StepConfig::new().with_damping(1.5).validate(),
            Err(ConfigError::InvalidDamping(1.5))
        );
        assert!(StepConfig::new().with_damping(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidDamping(2.0);
        assert!(err.to_string().contains("(0, 1]"));
    }
}
