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
//! The ragdoll particle system
//!
//! Six particles and five distance constraints arranged as a tree rooted at
//! the torso:
//!
//! ```text
//!            head
//!             |
//!           torso
//!         /  | |  \
//!   l.arm r.arm l.leg r.leg
//! ```
//!
//! The structure is fixed at construction. Only positions change afterwards;
//! a reset replaces the whole [`Ragdoll`] value.

use log::{trace, warn};

use crate::config::StepConfig;
use crate::constraint::{relax, DistanceConstraint};
use crate::integration::{calculate_total_kinetic_energy, Integrator, PositionVerletIntegrator};
use crate::math::Vec2;
use crate::particle::{Color, Particle};

/// Number of particles in a ragdoll
pub const PARTICLE_COUNT: usize = 6;

/// Number of constraints in a ragdoll
pub const CONSTRAINT_COUNT: usize = 5;

/// Named particle slots, in particle index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    /// Index 0
    Head,
    /// Index 1, the root every limb hangs from
    Torso,
    /// Index 2
    LeftArm,
    /// Index 3
    RightArm,
    /// Index 4
    LeftLeg,
    /// Index 5
    RightLeg,
}

impl BodyPart {
    /// Every part, in particle index order
    pub const ALL: [BodyPart; PARTICLE_COUNT] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    /// Particle index of this part
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up the part stored at a particle index
    pub fn from_index(index: usize) -> Option<BodyPart> {
        BodyPart::ALL.get(index).copied()
    }

    /// Offset from the ragdoll origin at construction
    pub fn offset(self) -> Vec2 {
        match self {
            BodyPart::Head => Vec2::new(0.0, 0.0),
            BodyPart::Torso => Vec2::new(0.0, 40.0),
            BodyPart::LeftArm => Vec2::new(-30.0, 80.0),
            BodyPart::RightArm => Vec2::new(30.0, 80.0),
            BodyPart::LeftLeg => Vec2::new(-20.0, 130.0),
            BodyPart::RightLeg => Vec2::new(20.0, 130.0),
        }
    }

    /// Rendering radius
    pub fn radius(self) -> f64 {
        match self {
            BodyPart::Head => 20.0,
            BodyPart::Torso => 30.0,
            _ => 25.0,
        }
    }

    /// Rendering color
    pub fn color(self) -> Color {
        match self {
            BodyPart::Head => Color::RED,
            _ => Color::BLUE,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Torso => "torso",
            BodyPart::LeftArm => "left arm",
            BodyPart::RightArm => "right arm",
            BodyPart::LeftLeg => "left leg",
            BodyPart::RightLeg => "right leg",
        }
    }
}

/// Joints in solve order
const JOINTS: [DistanceConstraint; CONSTRAINT_COUNT] = [
    DistanceConstraint::new(BodyPart::Head as usize, BodyPart::Torso as usize),
    DistanceConstraint::new(BodyPart::Torso as usize, BodyPart::LeftArm as usize),
    DistanceConstraint::new(BodyPart::Torso as usize, BodyPart::RightArm as usize),
    DistanceConstraint::new(BodyPart::Torso as usize, BodyPart::LeftLeg as usize),
    DistanceConstraint::new(BodyPart::Torso as usize, BodyPart::RightLeg as usize),
];

/// Read-only view of one particle for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartView {
    /// Particle index
    pub index: usize,
    /// Which part this particle is
    pub part: BodyPart,
    /// Current position
    pub position: Vec2,
    /// Rendering radius
    pub radius: f64,
    /// Rendering color
    pub color: Color,
}

/// Ragdoll particle system
///
/// # Examples
///
/// ```
/// use ragdoll_physics::{BodyPart, Ragdoll, StepConfig, Vec2};
///
/// let mut ragdoll = Ragdoll::new(400.0, 300.0);
/// assert_eq!(ragdoll.part(BodyPart::Torso).position(), Vec2::new(400.0, 340.0));
///
/// ragdoll.step(&StepConfig::default());
/// assert_eq!(ragdoll.part(BodyPart::Head).position(), Vec2::new(400.0, 300.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ragdoll {
    particles: [Particle; PARTICLE_COUNT],
    constraints: [DistanceConstraint; CONSTRAINT_COUNT],
}

impl Ragdoll {
    /// Build a ragdoll at rest with its head at `(origin_x, origin_y)`
    ///
    /// The origin is not checked against any bounds; an off-screen ragdoll
    /// is pulled back in by the walls on its first step.
    pub fn new(origin_x: f64, origin_y: f64) -> Self {
        let origin = Vec2::new(origin_x, origin_y);
        Ragdoll {
            particles: BodyPart::ALL
                .map(|part| Particle::new(origin + part.offset(), part.radius(), part.color())),
            constraints: JOINTS,
        }
    }

    /// Build a ragdoll with its head at `origin`
    pub fn at(origin: Vec2) -> Self {
        Ragdoll::new(origin.x, origin.y)
    }

    /// Advance the ragdoll by one tick with position Verlet integration
    pub fn step(&mut self, config: &StepConfig) {
        self.step_with(&mut PositionVerletIntegrator::new(), config);
    }

    /// Advance the ragdoll by one tick with the given integrator
    ///
    /// Integrates every particle, then runs a single relaxation pass over
    /// the constraints in order.
    pub fn step_with<I: Integrator>(&mut self, integrator: &mut I, config: &StepConfig) {
        let clamped = integrator.integrate(&mut self.particles, config);
        let corrected = relax(&self.constraints, &mut self.particles);

        trace!(
            "{} step: {} particles clamped, {} constraints corrected",
            integrator.name(),
            clamped,
            corrected
        );

        for (index, particle) in self.particles.iter().enumerate() {
            if !particle.is_valid() {
                warn!(
                    "Particle {} ({}) has non-finite state after step: {:?}",
                    index,
                    BodyPart::ALL[index].name(),
                    particle
                );
            }
        }
    }

    /// All particles, in index order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particle at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= PARTICLE_COUNT`
    pub fn particle(&self, index: usize) -> &Particle {
        &self.particles[index]
    }

    /// Mutable particle at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= PARTICLE_COUNT`
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }

    /// Particle for a named part
    pub fn part(&self, part: BodyPart) -> &Particle {
        &self.particles[part.index()]
    }

    /// Mutable particle for a named part
    pub fn part_mut(&mut self, part: BodyPart) -> &mut Particle {
        &mut self.particles[part.index()]
    }

    /// All constraints, in solve order
    pub fn constraints(&self) -> &[DistanceConstraint] {
        &self.constraints
    }

    /// Number of particles
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of constraints
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Drawable view of each particle, in index order
    pub fn parts(&self) -> impl Iterator<Item = PartView> + '_ {
        self.particles
            .iter()
            .zip(BodyPart::ALL)
            .enumerate()
            .map(|(index, (particle, part))| PartView {
                index,
                part,
                position: particle.position(),
                radius: particle.radius(),
                color: particle.color(),
            })
    }

    /// Endpoints of each constraint, in solve order
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.constraints.iter().map(|constraint| {
            (
                self.particles[constraint.a()].position(),
                self.particles[constraint.b()].position(),
            )
        })
    }

    /// Mean position of all particles
    pub fn centroid(&self) -> Vec2 {
        let sum = self
            .particles
            .iter()
            .fold(Vec2::zero(), |acc, p| acc + p.position());
        sum.scale(1.0 / PARTICLE_COUNT as f64)
    }

    /// Total kinetic energy, treating every particle as unit mass
    pub fn kinetic_energy(&self) -> f64 {
        calculate_total_kinetic_energy(&self.particles)
    }

    /// Check if every particle moved at most `tolerance` during the last tick
    pub fn is_at_rest(&self, tolerance: f64) -> bool {
        self.particles
            .iter()
            .all(|p| p.velocity().length() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_part_indices_round_trip() {
        for (index, part) in BodyPart::ALL.iter().enumerate() {
            assert_eq!(part.index(), index);
            assert_eq!(BodyPart::from_index(index), Some(*part));
        }
        assert_eq!(BodyPart::from_index(PARTICLE_COUNT), None);
    }

    #[test]
    fn test_joints_form_tree_rooted_at_torso() {
        let ragdoll = Ragdoll::new(0.0, 0.0);
        let pairs: Vec<_> = ragdoll.constraints().iter().map(|c| c.indices()).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (1, 3), (1, 4), (1, 5)]);
    }

    #[test]
    fn test_parts_carry_render_data() {
        let ragdoll = Ragdoll::new(100.0, 100.0);
        let parts: Vec<_> = ragdoll.parts().collect();

        assert_eq!(parts.len(), PARTICLE_COUNT);
        assert_eq!(parts[0].part, BodyPart::Head);
        assert_eq!(parts[0].radius, 20.0);
        assert_eq!(parts[0].color, Color::RED);
        assert_eq!(parts[1].radius, 30.0);
        assert!(parts[2..].iter().all(|p| p.radius == 25.0 && p.color == Color::BLUE));
        assert_eq!(parts[5].position, Vec2::new(120.0, 230.0));
    }

    #[test]
    fn test_segments_follow_constraints() {
        let ragdoll = Ragdoll::new(100.0, 100.0);
        let segments: Vec<_> = ragdoll.segments().collect();

        assert_eq!(segments.len(), CONSTRAINT_COUNT);
        assert_eq!(segments[0], (Vec2::new(100.0, 100.0), Vec2::new(100.0, 140.0)));
        assert_eq!(segments[4], (Vec2::new(100.0, 140.0), Vec2::new(120.0, 230.0)));
    }

    #[test]
    fn test_centroid() {
        let ragdoll = Ragdoll::new(0.0, 0.0);
        // x offsets cancel; y offsets sum to 460
        let centroid = ragdoll.centroid();
        assert_eq!(centroid.x, 0.0);
        assert!((centroid.y - 460.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_fresh_ragdoll_is_at_rest() {
        let ragdoll = Ragdoll::new(400.0, 300.0);
        assert!(ragdoll.is_at_rest(0.0));
        assert_eq!(ragdoll.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_step_uses_position_verlet() {
        let mut a = Ragdoll::new(400.0, 300.0);
        let mut b = a.clone();
        let config = StepConfig::default();

        a.step(&config);
        b.step_with(&mut PositionVerletIntegrator::new(), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_with_custom_integrator() {
        struct Frozen;

        impl Integrator for Frozen {
            fn name(&self) -> &str {
                "Frozen"
            }

            fn integrate(&mut self, _particles: &mut [Particle], _config: &StepConfig) -> usize {
                0
            }
        }

        // Without integration only the stretched leg joints move
        let mut ragdoll = Ragdoll::new(400.0, 300.0);
        ragdoll.step_with(&mut Frozen, &StepConfig::default());

        assert_eq!(ragdoll.part(BodyPart::Head).position(), Vec2::new(400.0, 300.0));
        assert_eq!(ragdoll.part(BodyPart::LeftArm).position(), Vec2::new(370.0, 380.0));
        assert_ne!(ragdoll.part(BodyPart::LeftLeg).position(), Vec2::new(380.0, 430.0));
    }
}
