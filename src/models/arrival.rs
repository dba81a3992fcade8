//! Arrival record: when a job shows up and how much service it needs.

use serde::{Deserialize, Serialize};

use super::{Job, Ticks};

/// One line of workload input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    /// Timestep at which the job arrives.
    pub time: Ticks,
    /// Total service time requested. Zero means "no arrival".
    pub duration: Ticks,
}

impl Arrival {
    /// Creates an arrival record.
    pub fn new(time: Ticks, duration: Ticks) -> Self {
        Self { time, duration }
    }

    /// Builds the job this arrival introduces, or `None` for the
    /// zero-duration sentinel.
    pub fn to_job(&self) -> Option<Job> {
        (self.duration > 0).then(|| Job::new(self.duration))
    }
}
