//! Scheduling disciplines.
//!
//! A discipline decides two things and nothing else: which queued job to
//! dispatch when the processor falls idle, and whether a queued job should
//! displace the running one. Decrementing service, detecting completion and
//! accruing wait are shared by every discipline and live in the
//! [`Simulation`](crate::scheduler::Simulation).
//!
//! # Usage
//!
//! ```
//! use sched_sim::dispatching::{rules, Discipline};
//! use sched_sim::models::Job;
//! use sched_sim::queue::JobQueue;
//!
//! let mut queue = JobQueue::new();
//! queue.add(Job::new(5)).unwrap();
//! queue.add(Job::new(2)).unwrap();
//!
//! let next = rules::Sjf.select(&mut queue).unwrap();
//! assert_eq!(next.duration, 2);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Smith (1956), SPT optimality for mean flow time

mod kind;
pub mod rules;

pub use kind::{DisciplineKind, ParseDisciplineError};

use std::fmt::Debug;

use crate::models::Job;
use crate::queue::{JobQueue, QueueError};

/// Outcome of the per-step preemption check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The running job keeps the processor.
    Continue(Job),
    /// The returned job takes the processor. The displaced job has
    /// already been put back on the queue.
    Preempt { incoming: Job, displaced: Job },
}

impl Decision {
    /// The job that occupies the processor after the check.
    pub fn running(&self) -> Job {
        match *self {
            Decision::Continue(job) => job,
            Decision::Preempt { incoming, .. } => incoming,
        }
    }
}

/// A scheduling discipline.
///
/// Implementations must only be asked to `select` from a non-empty queue.
pub trait Discipline: Send + Sync + Debug {
    /// Short name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Removes the next job to run from `queue`.
    fn select(&self, queue: &mut JobQueue) -> Result<Job, QueueError>;

    /// Decides whether a queued job displaces `running`.
    ///
    /// Called once per step while a job occupies the processor, before the
    /// step's unit of service is consumed, and only when `is_preemptive`
    /// returns true. Non-preemptive disciplines keep the default.
    fn preempt(&self, running: Job, _queue: &mut JobQueue) -> Result<Decision, QueueError> {
        Ok(Decision::Continue(running))
    }

    /// Whether the simulation consults `preempt` each step.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Long-form description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
