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
//! Numerical integration methods for the ragdoll
//!
//! An integrator advances every particle by one tick: it derives the
//! implicit velocity, snapshots the previous position, applies gravity and
//! damped inertia, and keeps the particle inside the bounds. Constraint
//! solving happens afterwards and is not the integrator's concern.
//!
//! # Integrators
//!
//! - **Position Verlet**: Störmer–Verlet with a fixed tick and inelastic
//!   walls; the only scheme the ragdoll uses
//!
//! # Timestep
//!
//! The tick is fixed and implicit: gravity and damping are expressed per
//! tick, and one call to [`Integrator::integrate`] corresponds to one
//! rendered frame (nominally 1/60 s).

use crate::config::StepConfig;
use crate::particle::Particle;

mod verlet;

pub use verlet::PositionVerletIntegrator;

/// Calculate the kinetic energy of one unit-mass particle
///
/// KE = 0.5 * v², with v measured in units per tick
pub fn calculate_kinetic_energy(particle: &Particle) -> f64 {
    0.5 * particle.velocity().length_squared()
}

/// Calculate the total kinetic energy of a set of unit-mass particles
pub fn calculate_total_kinetic_energy<'a, I>(particles: I) -> f64
where
    I: IntoIterator<Item = &'a Particle>,
{
    particles.into_iter().map(calculate_kinetic_energy).sum()
}

/// Trait for per-tick integration schemes
///
/// Implementations must update each particle's previous position in the
/// same pass as its position, so no stale state leaks across ticks.
pub trait Integrator {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance every particle by one tick
    ///
    /// Particles are processed independently and in slice order.
    ///
    /// # Returns
    ///
    /// Number of particles that were clamped against the bounds on at
    /// least one axis
    fn integrate(&mut self, particles: &mut [Particle], config: &StepConfig) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::particle::Color;

    #[test]
    fn test_kinetic_energy_of_resting_particle_is_zero() {
        let p = Particle::new(Vec2::new(10.0, 10.0), 1.0, Color::RED);
        assert_eq!(calculate_kinetic_energy(&p), 0.0);
    }

    #[test]
    fn test_total_kinetic_energy() {
        let mut a = Particle::new(Vec2::zero(), 1.0, Color::RED);
        a.set_position(Vec2::new(3.0, 4.0));
        let mut b = Particle::new(Vec2::zero(), 1.0, Color::BLUE);
        b.set_position(Vec2::new(0.0, 2.0));

        // 0.5 * 25 + 0.5 * 4
        assert_eq!(calculate_total_kinetic_energy(&[a, b]), 14.5);
    }
}
