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
//! Host loop driver
//!
//! [`Simulation`] is what a windowing host holds between frames. The host
//! translates its own events into [`HostEvent`]s, calls
//! [`Simulation::handle`] once per event, draws the current ragdoll, and
//! paces frames at [`DEFAULT_FPS`] itself.
//!
//! A reset replaces the ragdoll wholesale; nothing is carried over from the
//! previous instance.

use std::time::Duration;

use log::debug;

use crate::config::StepConfig;
use crate::error::ConfigError;
use crate::math::Vec2;
use crate::ragdoll::Ragdoll;
use crate::render::{draw_ragdoll, Canvas};
use crate::timing::{StepTimer, TimingStats};

/// Nominal tick rate of the host loop
pub const DEFAULT_FPS: u32 = 60;

/// Signal delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Advance the simulation by one tick
    Tick,
    /// Replace the ragdoll with a fresh one whose head is at `(x, y)`
    Reset {
        /// Horizontal origin, usually the pointer position
        x: f64,
        /// Vertical origin, usually the pointer position
        y: f64,
    },
    /// Stop the simulation
    Quit,
}

/// Frame duration for a tick rate
///
/// # Panics
///
/// Panics if `fps` is zero
pub fn frame_interval(fps: u32) -> Duration {
    assert!(fps > 0, "Frame rate must be positive");
    Duration::from_secs(1) / fps
}

/// Owner of the active ragdoll and its configuration
///
/// # Examples
///
/// ```
/// use ragdoll_physics::{HostEvent, Simulation, StepConfig};
///
/// let mut sim = Simulation::new(StepConfig::default()).unwrap();
/// assert!(sim.handle(HostEvent::Tick));
/// assert!(sim.handle(HostEvent::Reset { x: 100.0, y: 50.0 }));
/// assert!(!sim.handle(HostEvent::Quit));
/// assert_eq!(sim.frame_count(), 1);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: StepConfig,
    ragdoll: Ragdoll,
    frames: u64,
    resets: u64,
    running: bool,
    timing: TimingStats,
}

impl Simulation {
    /// Validate `config` and place a ragdoll at the centre of its bounds
    pub fn new(config: StepConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Simulation {
            ragdoll: Ragdoll::at(config.bounds().center()),
            config,
            frames: 0,
            resets: 0,
            running: true,
            timing: TimingStats::new(),
        })
    }

    /// Dispatch one host event
    ///
    /// Returns `false` once the simulation has been asked to quit; later
    /// events are ignored.
    pub fn handle(&mut self, event: HostEvent) -> bool {
        if !self.running {
            return false;
        }
        match event {
            HostEvent::Tick => self.tick(),
            HostEvent::Reset { x, y } => self.reset(Vec2::new(x, y)),
            HostEvent::Quit => {
                debug!("Quit after {} frames", self.frames);
                self.running = false;
            }
        }
        self.running
    }

    /// Advance one tick, timing the step
    pub fn tick(&mut self) {
        let timer = StepTimer::start("step");
        self.ragdoll.step(&self.config);
        self.timing.record(timer.finish());
        self.frames += 1;
    }

    /// Replace the ragdoll with a new one at `origin`
    pub fn reset(&mut self, origin: Vec2) {
        debug!("Resetting ragdoll at ({:.1}, {:.1})", origin.x, origin.y);
        self.ragdoll = Ragdoll::at(origin);
        self.resets += 1;
    }

    /// Draw the current ragdoll onto a host canvas
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        draw_ragdoll(&self.ragdoll, canvas);
    }

    /// The active ragdoll
    pub fn ragdoll(&self) -> &Ragdoll {
        &self.ragdoll
    }

    /// Configuration passed to every step
    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Number of ticks run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Number of resets handled so far
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    /// Check if the simulation still accepts events
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Step timing statistics
    pub fn timing(&self) -> &TimingStats {
        &self.timing
    }
}
