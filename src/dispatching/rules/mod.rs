//! Built-in disciplines.
//!
//! | Discipline | Dispatch | Preemption |
//! |------------|----------|------------|
//! | FCFS | head of queue (arrival order) | never |
//! | SJF | shortest duration, earliest arrival on ties | never |
//! | SJFP | shortest duration, earliest arrival on ties | every step, strict `<` |

use super::{Decision, Discipline};
use crate::models::Job;
use crate::queue::{JobQueue, QueueError};

/// First-Come-First-Served.
///
/// Runs jobs in arrival order; a running job is never displaced.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn select(&self, queue: &mut JobQueue) -> Result<Job, QueueError> {
        queue.remove_first()
    }

    fn description(&self) -> &'static str {
        "first come first serve"
    }
}

/// Shortest-Job-First, non-preemptive.
///
/// Minimizes mean waiting time among non-preemptive policies when all jobs
/// are known up front.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl Discipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn select(&self, queue: &mut JobQueue) -> Result<Job, QueueError> {
        queue.remove_shortest()
    }

    fn description(&self) -> &'static str {
        "shortest job first"
    }
}

/// Shortest-Job-First with preemption (shortest remaining time).
///
/// Every step the queue's shortest job is taken out and compared against
/// the running job's remaining duration. A strictly shorter candidate takes
/// the processor and the running job goes back to the tail of the queue;
/// otherwise the candidate itself goes back to the tail. Either way the
/// job returned to the queue keeps accruing wait.
#[derive(Debug, Clone, Copy)]
pub struct Sjfp;

impl Discipline for Sjfp {
    fn name(&self) -> &'static str {
        "SJFP"
    }

    fn select(&self, queue: &mut JobQueue) -> Result<Job, QueueError> {
        queue.remove_shortest()
    }

    fn preempt(&self, running: Job, queue: &mut JobQueue) -> Result<Decision, QueueError> {
        if queue.is_empty() {
            return Ok(Decision::Continue(running));
        }

        let candidate = queue.remove_shortest()?;
        if candidate.duration < running.duration {
            queue.add(running)?;
            Ok(Decision::Preempt {
                incoming: candidate,
                displaced: running,
            })
        } else {
            queue.add(candidate)?;
            Ok(Decision::Continue(running))
        }
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "shortest job first with preemption"
    }
}
