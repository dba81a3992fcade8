use serde::{Deserialize, Serialize};

use crate::dispatching::DisciplineKind;
use crate::queue::{JobQueue, DEFAULT_QUEUE_CAPACITY};

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling discipline.
    pub discipline: DisciplineKind,
    /// Queue capacity. `None` lets the queue grow without bound.
    pub queue_capacity: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            discipline: DisciplineKind::default(),
            queue_capacity: Some(DEFAULT_QUEUE_CAPACITY),
        }
    }
}

impl SimulationConfig {
    /// Default settings with the given discipline.
    pub fn new(discipline: DisciplineKind) -> Self {
        Self {
            discipline,
            ..Default::default()
        }
    }

    pub fn with_discipline(mut self, discipline: DisciplineKind) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Removes the queue capacity bound.
    pub fn unbounded(mut self) -> Self {
        self.queue_capacity = None;
        self
    }

    /// Builds an empty queue with the configured capacity.
    pub fn build_queue(&self) -> JobQueue {
        match self.queue_capacity {
            Some(capacity) => JobQueue::with_capacity(capacity),
            None => JobQueue::unbounded(),
        }
    }
}
