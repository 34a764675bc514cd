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
//! Behavioral tests for the ragdoll step
//!
//! Covers motion from rest, wall clamping, multi-tick constraint
//! relaxation, degenerate joints and the dormant fixed point.

use ragdoll_physics::{Bounds, BodyPart, Ragdoll, StepConfig, Vec2, REST_LENGTH};

fn head_torso_distance(ragdoll: &Ragdoll) -> f64 {
    ragdoll
        .part(BodyPart::Head)
        .position()
        .distance(ragdoll.part(BodyPart::Torso).position())
}

#[test]
fn test_single_step_moves_particles() {
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    let before: Vec<Vec2> = ragdoll.particles().iter().map(|p| p.position()).collect();

    ragdoll.step(&StepConfig::default());

    let after: Vec<Vec2> = ragdoll.particles().iter().map(|p| p.position()).collect();
    assert_ne!(before, after);
    assert!(before.iter().zip(&after).any(|(b, a)| b != a));
}

#[test]
fn test_single_step_snapshots_previous_positions() {
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    let before: Vec<Vec2> = ragdoll.particles().iter().map(|p| p.position()).collect();

    ragdoll.step(&StepConfig::default());

    // Nothing touches a wall, so every previous position is the pre-step position
    for (particle, expected) in ragdoll.particles().iter().zip(&before) {
        assert_eq!(particle.previous_position(), *expected);
    }
}

#[test]
fn test_gravity_only_acts_downward() {
    // A compact ragdoll with no stretched joints falls straight down
    let mut ragdoll = Ragdoll::new(400.0, 100.0);
    ragdoll.part_mut(BodyPart::LeftLeg).reset_position(Vec2::new(380.0, 170.0));
    ragdoll.part_mut(BodyPart::RightLeg).reset_position(Vec2::new(420.0, 170.0));
    let before = ragdoll.clone();

    ragdoll.step(&StepConfig::new().with_gravity(1.0));

    for (moved, original) in ragdoll.particles().iter().zip(before.particles()) {
        assert_eq!(moved.position().x, original.position().x);
        assert_eq!(moved.position().y, original.position().y + 1.0);
    }
}

#[test]
fn test_left_wall_clamp_kills_horizontal_velocity() {
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    ragdoll.part_mut(BodyPart::Head).reset_position(Vec2::new(-10.0, 300.0));
    let config = StepConfig::default();

    ragdoll.step(&config);

    let head = ragdoll.part(BodyPart::Head);
    assert!(head.position().x >= 0.0 && head.position().x <= config.bounds().width());
    assert_eq!(head.previous_position().x, 0.0);
}

#[test]
fn test_floor_is_inelastic() {
    // Drop from just above the floor; no particle may bounce back up
    let config = StepConfig::default();
    let mut ragdoll = Ragdoll::new(400.0, 460.0);

    let mut landed = false;
    for _ in 0..200 {
        ragdoll.step(&config);
        for particle in ragdoll.particles() {
            if particle.position().y == config.bounds().height() {
                landed = true;
                assert_eq!(particle.previous_position().y, config.bounds().height());
            }
        }
    }
    assert!(landed, "ragdoll never reached the floor");
}

#[test]
fn test_particles_stay_inside_bounds() {
    let config = StepConfig::new().with_bounds(Bounds::new(320.0, 240.0));
    let mut ragdoll = Ragdoll::new(-500.0, -500.0);

    for tick in 0..300 {
        ragdoll.step(&config);
        for part in ragdoll.parts() {
            assert!(
                config.bounds().contains(part.position),
                "{} left the bounds at tick {}: {:?}",
                part.part.name(),
                tick,
                part.position
            );
        }
    }
}

#[test]
fn test_constraint_converges_over_ticks() {
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    ragdoll.part_mut(BodyPart::Head).set_position(Vec2::new(100.0, 100.0));

    let initial = head_torso_distance(&ragdoll);
    assert!(initial > 100.0, "initial distance {}", initial);

    for _ in 0..10 {
        ragdoll.step(&StepConfig::default());
    }

    let distance = head_torso_distance(&ragdoll);
    assert!(distance < 60.0, "head-torso distance {} after 10 ticks", distance);
}

#[test]
fn test_constraint_does_not_converge_in_one_tick() {
    // Torso corrections for the limbs come after the head joint, so a
    // single tick leaves the head joint stretched
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    ragdoll.part_mut(BodyPart::Head).reset_position(Vec2::new(400.0, 100.0));
    ragdoll.part_mut(BodyPart::LeftArm).reset_position(Vec2::new(400.0, 600.0));

    ragdoll.step(&StepConfig::default());

    assert!(head_torso_distance(&ragdoll) > REST_LENGTH + 1.0);
}

#[test]
fn test_coincident_particles_are_not_corrected() {
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    for index in 0..ragdoll.particle_count() {
        ragdoll.particle_mut(index).reset_position(Vec2::new(300.0, 200.0));
    }

    ragdoll.step(&StepConfig::default());

    for particle in ragdoll.particles() {
        assert!(particle.is_valid());
        assert_eq!(particle.position(), Vec2::new(300.0, 200.5));
        assert_eq!(particle.previous_position(), Vec2::new(300.0, 200.0));
    }
}

#[test]
fn test_dormant_state_is_fixed_point() {
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    ragdoll.part_mut(BodyPart::LeftLeg).reset_position(Vec2::new(380.0, 380.0));
    ragdoll.part_mut(BodyPart::RightLeg).reset_position(Vec2::new(420.0, 380.0));
    assert!(ragdoll.constraints().iter().all(|c| !c.is_violated(ragdoll.particles())));

    let dormant = ragdoll.clone();
    let config = StepConfig::new().with_gravity(0.0).with_damping(1.0);

    ragdoll.step(&config);
    assert_eq!(ragdoll, dormant);

    for _ in 0..100 {
        ragdoll.step(&config);
    }
    assert_eq!(ragdoll, dormant);
}

#[test]
fn test_damping_drains_energy() {
    let config = StepConfig::new().with_gravity(0.0).with_damping(0.9);
    let mut ragdoll = Ragdoll::new(400.0, 300.0);
    ragdoll.part_mut(BodyPart::LeftLeg).reset_position(Vec2::new(380.0, 380.0));
    ragdoll.part_mut(BodyPart::RightLeg).reset_position(Vec2::new(420.0, 380.0));
    for index in 0..ragdoll.particle_count() {
        let p = ragdoll.particle(index).position();
        ragdoll.particle_mut(index).set_position(p + Vec2::new(3.0, 0.0));
    }

    ragdoll.step(&config);
    let early = ragdoll.kinetic_energy();
    for _ in 0..50 {
        ragdoll.step(&config);
    }

    assert!(ragdoll.kinetic_energy() < early);
    assert!(ragdoll.is_at_rest(0.1));
}

#[test]
fn test_steps_are_deterministic() {
    let config = StepConfig::default();
    let mut a = Ragdoll::new(250.0, 75.0);
    let mut b = Ragdoll::new(250.0, 75.0);

    for _ in 0..120 {
        a.step(&config);
        b.step(&config);
    }
    assert_eq!(a, b);
}
