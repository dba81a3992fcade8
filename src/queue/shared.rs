//! Mutex-guarded job queue for callers that share one queue across threads.
//!
//! The simulation itself never needs this: it owns its [`JobQueue`] outright.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{JobQueue, QueueError};
use crate::models::Job;

/// A cloneable handle to a [`JobQueue`] where every operation takes the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedJobQueue {
    inner: Arc<Mutex<JobQueue>>,
}

impl SharedJobQueue {
    pub fn new(queue: JobQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    pub fn add(&self, job: Job) -> Result<(), QueueError> {
        self.lock().add(job)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn remove_first(&self) -> Result<Job, QueueError> {
        self.lock().remove_first()
    }

    pub fn remove_shortest(&self) -> Result<Job, QueueError> {
        self.lock().remove_shortest()
    }

    pub fn increment_wait_times(&self) {
        self.lock().increment_wait_times()
    }

    /// Runs `f` with the lock held, for compound operations that must not
    /// interleave with other callers.
    pub fn with_queue<R>(&self, f: impl FnOnce(&mut JobQueue) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copies out the resident jobs in head-to-tail order.
    pub fn snapshot(&self) -> Vec<Job> {
        self.lock().iter().copied().collect()
    }

    // Each queue operation is a single VecDeque call, so a poisoned lock
    // still guards a consistent queue.
    fn lock(&self) -> MutexGuard<'_, JobQueue> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
