//! Bounded job queue.
//!
//! A FIFO of [`Job`]s backed by a ring buffer. At most
//! [`DEFAULT_QUEUE_CAPACITY`] slots are reserved up front; larger bounds grow
//! on demand. Besides the usual head/tail operations it supports removing
//! the shortest resident job and advancing every resident job's wait counter
//! in one pass.
//!
//! # Capacity
//!
//! A bounded queue (the default, 256 slots) rejects `add` once full with
//! [`QueueError::Full`]. [`JobQueue::unbounded`] grows on demand instead, in
//! which case `add` never fails.
//!
//! # Tie-breaking
//!
//! `remove_shortest` scans head to tail and keeps the first job with the
//! strictly smallest duration, so among equal durations the earliest
//! inserted job wins. Removing it compacts the buffer without disturbing
//! the relative order of the remaining jobs.

mod shared;

pub use shared::SharedJobQueue;

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

use crate::models::Job;

/// Capacity used by [`JobQueue::new`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Queue contract violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("Job queue is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Removing job from an empty queue")]
    Empty,
}

/// FIFO job queue over ring-buffer storage.
#[derive(Debug, Clone)]
pub struct JobQueue {
    jobs: VecDeque<Job>,
    capacity: Option<usize>,
}

impl Default for JobQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl JobQueue {
    /// Creates a queue bounded at [`DEFAULT_QUEUE_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Creates a queue that holds at most `capacity` jobs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jobs: VecDeque::with_capacity(capacity.min(DEFAULT_QUEUE_CAPACITY)),
            capacity: Some(capacity),
        }
    }

    /// Creates a queue without a capacity bound.
    pub fn unbounded() -> Self {
        Self {
            jobs: VecDeque::new(),
            capacity: None,
        }
    }

    /// Maximum number of resident jobs, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Appends `job` at the tail.
    pub fn add(&mut self, job: Job) -> Result<(), QueueError> {
        if let Some(capacity) = self.capacity {
            if self.jobs.len() >= capacity {
                return Err(QueueError::Full { capacity });
            }
        }
        self.jobs.push_back(job);
        Ok(())
    }

    /// Number of resident jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Whether the next `add` would fail.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|c| self.jobs.len() >= c)
    }

    /// Removes and returns the oldest resident job.
    pub fn remove_first(&mut self) -> Result<Job, QueueError> {
        self.jobs.pop_front().ok_or(QueueError::Empty)
    }

    /// Removes and returns the job with the smallest remaining duration.
    ///
    /// Ties go to the job closest to the head.
    pub fn remove_shortest(&mut self) -> Result<Job, QueueError> {
        let index = self.shortest_index().ok_or(QueueError::Empty)?;
        self.jobs.remove(index).ok_or(QueueError::Empty)
    }

    /// Adds one time unit of wait to every resident job.
    pub fn increment_wait_times(&mut self) {
        for job in self.jobs.iter_mut() {
            job.wait_time += 1;
        }
    }

    /// Resident jobs in head-to-tail order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> + '_ {
        self.jobs.iter()
    }

    // min_by_key keeps the first of several equal minima.
    fn shortest_index(&self) -> Option<usize> {
        self.jobs
            .iter()
            .enumerate()
            .min_by_key(|(_, job)| job.duration)
            .map(|(index, _)| index)
    }
}

impl fmt::Display for JobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue length {}", self.jobs.len())?;
        for job in &self.jobs {
            write!(f, "\n{job}")?;
        }
        Ok(())
    }
}
