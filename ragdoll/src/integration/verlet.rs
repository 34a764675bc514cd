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
//! Position Verlet integrator implementation
//!
//! Störmer–Verlet stores no velocity. Each tick, the velocity is recovered
//! from the last two positions and carried forward:
//!
//! ```text
//! v        = x(t) - x(t - 1)
//! x(t - 1) = x(t)
//! x(t + 1) = x(t) + g + v * damping
//! ```
//!
//! Gravity is added to y before the damped velocity, so each tick a
//! particle's y receives gravity once and its inertia once.
//!
//! # Walls
//!
//! After integration each axis is clamped to `[0, extent]` independently.
//! A clamped axis also has its previous position overwritten with the
//! clamped value, which zeroes the velocity on that axis for the next tick:
//! the particle stops against the wall instead of bouncing.
//!
//! # References
//!
//! - Verlet, L. (1967). Computer "Experiments" on Classical Fluids. I. Thermodynamical
//!   Properties of Lennard-Jones Molecules. Physical Review, 159(1), 98-103.
//! - Jakobsen, T. (2001). Advanced Character Physics. Game Developers Conference.

use crate::config::{Bounds, StepConfig};
use crate::particle::Particle;
use super::Integrator;

/// Position Verlet integrator with inelastic boundary walls
///
/// # Example
///
/// ```
/// use ragdoll_physics::integration::{Integrator, PositionVerletIntegrator};
/// use ragdoll_physics::{Color, Particle, StepConfig, Vec2};
///
/// let mut integrator = PositionVerletIntegrator::new();
/// let mut particles = [Particle::new(Vec2::new(100.0, 100.0), 10.0, Color::RED)];
///
/// integrator.integrate(&mut particles, &StepConfig::default());
/// assert_eq!(particles[0].position(), Vec2::new(100.0, 100.5));
/// assert_eq!(particles[0].previous_position(), Vec2::new(100.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionVerletIntegrator;

impl PositionVerletIntegrator {
    /// Create a new position Verlet integrator
    pub fn new() -> Self {
        PositionVerletIntegrator
    }

    /// Advance a single particle by one tick
    ///
    /// Returns `true` if the particle was clamped on either axis.
    pub fn integrate_particle(&self, particle: &mut Particle, config: &StepConfig) -> bool {
        let velocity = particle.position - particle.previous_position;
        particle.previous_position = particle.position;

        particle.position.y += config.gravity();
        particle.position += velocity * config.damping();

        clamp_to_bounds(particle, config.bounds())
    }
}

impl Integrator for PositionVerletIntegrator {
    fn name(&self) -> &str {
        "Position Verlet"
    }

    fn integrate(&mut self, particles: &mut [Particle], config: &StepConfig) -> usize {
        let mut clamped = 0;
        for particle in particles.iter_mut() {
            if self.integrate_particle(particle, config) {
                clamped += 1;
            }
        }
        clamped
    }
}

/// Clamp a particle into the bounds, killing velocity on each clamped axis
fn clamp_to_bounds(particle: &mut Particle, bounds: Bounds) -> bool {
    let mut clamped = false;

    if particle.position.x < 0.0 || particle.position.x > bounds.width() {
        particle.position.x = particle.position.x.clamp(0.0, bounds.width());
        particle.previous_position.x = particle.position.x;
        clamped = true;
    }
    if particle.position.y < 0.0 || particle.position.y > bounds.height() {
        particle.position.y = particle.position.y.clamp(0.0, bounds.height());
        particle.previous_position.y = particle.position.y;
        clamped = true;
    }

    clamped
}
