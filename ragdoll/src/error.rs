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
//! Error types

use thiserror::Error;

/// Rejected step configuration
///
/// The physics step itself never fails; this error is raised at the host
/// boundary when a [`StepConfig`](crate::StepConfig) is validated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Width and height must both be positive and finite
    #[error("invalid bounds {width}x{height}: both extents must be positive and finite")]
    InvalidBounds {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },
    /// Gravity must be finite
    #[error("invalid gravity {0}: must be finite")]
    InvalidGravity(f64),
    /// Damping must lie in (0, 1]
    #[error("invalid damping {0}: must be in (0, 1]")]
    InvalidDamping(f64),
}
