use serde::Serialize;

use crate::models::Ticks;

/// Something that happened during one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimEvent {
    /// A job arrived and was queued.
    Arrived { duration: Ticks },
    /// The idle processor took a job from the queue.
    Dispatched { duration: Ticks, wait_time: Ticks },
    /// A zero-duration job came off the queue and was dropped unrun.
    Discarded { wait_time: Ticks },
    /// A shorter queued job displaced the running one.
    Preempted { incoming: Ticks, displaced: Ticks },
    /// The running job finished.
    Completed { wait_time: Ticks },
}
