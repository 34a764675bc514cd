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
//! Distance constraints
//!
//! A constraint joins two particles and only ever pulls them together: when
//! they are farther apart than [`REST_LENGTH`], each particle moves half of
//! the excess toward the other. Pairs closer than the rest length are left
//! alone.
//!
//! # Relaxation
//!
//! [`relax`] makes exactly one pass over the constraint list per tick, in
//! list order, without iterating to convergence. Moving the torso for one
//! limb disturbs the constraints already visited, so a chain such as
//! head→torso→limb only settles over successive ticks.
//!
//! # Degenerate Pairs
//!
//! Two coincident particles have distance zero, which never exceeds the rest
//! length, so they receive no correction. The direction is only normalized
//! when the distance is positive.

use crate::particle::Particle;

/// Rest length shared by every constraint in the ragdoll
pub const REST_LENGTH: f64 = 50.0;

/// Fraction of the excess distance each endpoint moves
const CORRECTION_SHARE: f64 = 0.5;

/// Maximum-distance constraint between two particles
///
/// # Examples
///
/// ```
/// use ragdoll_physics::{Color, DistanceConstraint, Particle, Vec2};
///
/// let mut particles = [
///     Particle::new(Vec2::new(0.0, 0.0), 1.0, Color::RED),
///     Particle::new(Vec2::new(100.0, 0.0), 1.0, Color::BLUE),
/// ];
///
/// let constraint = DistanceConstraint::new(0, 1);
/// assert!(constraint.solve(&mut particles));
/// assert_eq!(particles[0].position(), Vec2::new(25.0, 0.0));
/// assert_eq!(particles[1].position(), Vec2::new(75.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceConstraint {
    a: usize,
    b: usize,
}

impl DistanceConstraint {
    /// Create a constraint between particles `a` and `b`
    ///
    /// # Panics
    ///
    /// Panics if `a == b`
    pub const fn new(a: usize, b: usize) -> Self {
        assert!(a != b, "Constraint endpoints must be distinct");
        DistanceConstraint { a, b }
    }

    /// First endpoint; receives the positive correction
    pub fn a(&self) -> usize {
        self.a
    }

    /// Second endpoint; receives the negative correction
    pub fn b(&self) -> usize {
        self.b
    }

    /// Get the endpoints as an index pair
    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Rest length of this constraint
    pub fn rest_length(&self) -> f64 {
        REST_LENGTH
    }

    /// Current distance between the endpoints
    pub fn current_length(&self, particles: &[Particle]) -> f64 {
        particles[self.a].position.distance(particles[self.b].position)
    }

    /// Check if the endpoints are farther apart than the rest length
    pub fn is_violated(&self, particles: &[Particle]) -> bool {
        self.current_length(particles) > REST_LENGTH
    }

    /// Apply one symmetric positional correction
    ///
    /// Only current positions move; previous positions are untouched, so the
    /// correction feeds into the next tick's implicit velocity. Returns
    /// `true` if a correction was applied.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range for `particles`
    pub fn solve(&self, particles: &mut [Particle]) -> bool {
        let mut delta = particles[self.b].position - particles[self.a].position;
        let distance = delta.length();
        if distance <= REST_LENGTH {
            return false;
        }

        if distance > 0.0 {
            delta = delta.scale(1.0 / distance);
        }
        let correction = (distance - REST_LENGTH) * CORRECTION_SHARE;

        particles[self.a].position += delta * correction;
        particles[self.b].position -= delta * correction;
        true
    }
}

/// Run one relaxation pass over `constraints` in order
///
/// Returns the number of constraints that applied a correction.
pub fn relax(constraints: &[DistanceConstraint], particles: &mut [Particle]) -> usize {
    constraints
        .iter()
        .filter(|constraint| constraint.solve(particles))
        .count()
}
