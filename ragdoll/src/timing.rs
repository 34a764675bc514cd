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
//! Scoped timing for the host loop
//!
//! [`StepTimer`] measures one scope and logs the elapsed time at `debug`
//! level. Hosts wrap their step call in a timer and fold the results into
//! [`TimingStats`]; the physics core itself is never instrumented.

use std::time::{Duration, Instant};

use log::debug;

/// Timer covering a single scope
///
/// Call [`StepTimer::finish`] to get the elapsed time. A timer dropped
/// without finishing still logs its duration.
///
/// # Examples
///
/// ```
/// use ragdoll_physics::timing::StepTimer;
///
/// let timer = StepTimer::start("update");
/// let elapsed = timer.finish();
/// assert!(elapsed.as_secs() < 1);
/// ```
#[derive(Debug)]
pub struct StepTimer {
    label: &'static str,
    started: Instant,
    finished: bool,
}

impl StepTimer {
    /// Start timing a scope
    pub fn start(label: &'static str) -> Self {
        StepTimer {
            label,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Label reported in log lines
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Time since the timer started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the timer, log and return the elapsed time
    pub fn finish(mut self) -> Duration {
        self.finished = true;
        let elapsed = self.elapsed();
        log_elapsed(self.label, elapsed);
        elapsed
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        if !self.finished {
            log_elapsed(self.label, self.elapsed());
        }
    }
}

fn log_elapsed(label: &str, elapsed: Duration) {
    debug!("{} executed in {:.6} seconds", label, elapsed.as_secs_f64());
}

/// Aggregate statistics over timed samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingStats {
    /// Number of samples recorded
    pub samples: u64,
    /// Sum of all samples
    pub total: Duration,
    /// Shortest sample, if any
    pub min: Option<Duration>,
    /// Longest sample, if any
    pub max: Option<Duration>,
}

impl TimingStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample
    pub fn record(&mut self, elapsed: Duration) {
        self.samples += 1;
        self.total += elapsed;
        self.min = Some(self.min.map_or(elapsed, |min| min.min(elapsed)));
        self.max = Some(self.max.map_or(elapsed, |max| max.max(elapsed)));
    }

    /// Mean sample duration, or zero when nothing was recorded
    pub fn mean(&self) -> Duration {
        if self.samples == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos((self.total.as_nanos() / u128::from(self.samples)) as u64)
        }
    }

    /// Discard all samples
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
