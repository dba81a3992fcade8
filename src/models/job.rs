//! Job model.
//!
//! A job is the unit of work served by the simulated processor. It carries
//! only two counters: the service time still owed and the number of steps
//! it has spent waiting in the queue.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ticks;

/// A job resident in the queue or occupying the processor.
///
/// Jobs have no identity beyond their counters; two jobs with the same
/// `duration` and `wait_time` are interchangeable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Remaining service time (time units). Reaches zero on completion.
    pub duration: Ticks,
    /// Steps spent enqueued but not running.
    pub wait_time: Ticks,
}

impl Job {
    /// Creates a freshly arrived job with zero accrued wait.
    pub fn new(duration: Ticks) -> Self {
        Self {
            duration,
            wait_time: 0,
        }
    }

    /// Sets the accrued wait time.
    pub fn with_wait_time(mut self, wait_time: Ticks) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Consumes one time unit of service.
    ///
    /// Returns `true` when the job has completed.
    pub fn run_for_tick(&mut self) -> bool {
        self.duration = self.duration.saturating_sub(1);
        self.is_complete()
    }

    /// Whether no service time remains.
    pub fn is_complete(&self) -> bool {
        self.duration == 0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dur={}  wait={}", self.duration, self.wait_time)
    }
}
