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
//! Verlet point masses
//!
//! A particle stores its current and previous position; velocity is never
//! stored and is derived as the difference of the two. Radius and color are
//! carried for the host's renderer and never change after construction.

use crate::math::Vec2;

/// RGB color tag used only for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure white, the host's clear color
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Pure black, used for constraint segments
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure red
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Pure blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Get the channels as a tuple
    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// A point mass advanced by position Verlet integration
///
/// # Examples
///
/// ```
/// use ragdoll_physics::{Color, Particle, Vec2};
///
/// let p = Particle::new(Vec2::new(10.0, 20.0), 5.0, Color::RED);
/// assert_eq!(p.position(), p.previous_position());
/// assert_eq!(p.velocity(), Vec2::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub(crate) position: Vec2,
    pub(crate) previous_position: Vec2,
    radius: f64,
    color: Color,
}

impl Particle {
    /// Create a particle at rest
    pub fn new(position: Vec2, radius: f64, color: Color) -> Self {
        Particle {
            position,
            previous_position: position,
            radius,
            color,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position one tick ago
    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Implicit velocity, in units per tick
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Rendering radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rendering color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Move the current position only
    ///
    /// The previous position is kept, so the displacement becomes velocity
    /// on the next step.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Overwrite the previous position only
    pub fn set_previous_position(&mut self, previous_position: Vec2) {
        self.previous_position = previous_position;
    }

    /// Teleport the particle and leave it at rest
    pub fn reset_position(&mut self, position: Vec2) {
        self.position = position;
        self.previous_position = position;
    }

    /// Check if both stored positions are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.previous_position.is_valid()
    }
}
