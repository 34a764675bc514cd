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
//! # Ragdoll Physics
//!
//! A small real-time 2D ragdoll: six point masses (head, torso and four
//! limbs) joined by distance constraints, advanced once per frame with
//! position Verlet integration followed by a single constraint relaxation
//! pass.
//!
//! ## Features
//!
//! - **Position Verlet**: Velocity is implicit in `position - previous_position`
//! - **Inelastic walls**: Particles are clamped to the bounds and lose velocity on the clamped axis
//! - **Single-pass relaxation**: Chained constraints settle over several ticks
//! - **Host seams**: Rendering goes through a host-provided [`render::Canvas`]
//!   and the host loop drives a [`simulation::Simulation`]
//!
//! ## Example
//!
//! ```rust
//! use ragdoll_physics::{Ragdoll, StepConfig};
//!
//! let config = StepConfig::default();
//! let mut ragdoll = Ragdoll::new(400.0, 300.0);
//!
//! for _ in 0..60 {
//!     ragdoll.step(&config);
//! }
//!
//! for part in ragdoll.parts() {
//!     assert!(config.bounds().contains(part.position));
//! }
//! ```

#![warn(missing_docs)]

/// 2D vector math
pub mod math;

/// Point masses
pub mod particle;

/// Distance constraints and relaxation
pub mod constraint;

/// Numerical integration methods
pub mod integration;

/// Per-step configuration
pub mod config;

/// Error types
pub mod error;

/// The ragdoll particle system
pub mod ragdoll;

/// Host-facing rendering seam
pub mod render;

/// Scoped timing utilities
pub mod timing;

/// Host loop driver
pub mod simulation;

pub use config::{Bounds, StepConfig};
pub use constraint::{DistanceConstraint, REST_LENGTH};
pub use error::ConfigError;
pub use math::Vec2;
pub use particle::{Color, Particle};
pub use ragdoll::{BodyPart, PartView, Ragdoll};
pub use simulation::{HostEvent, Simulation};
