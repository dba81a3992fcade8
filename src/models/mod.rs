//! Simulation domain models.
//!
//! Time is discrete. Every quantity below is a whole number of time units
//! counted from the start of the simulation (t=0).
//!
//! | Type | Role |
//! |------|------|
//! | `Arrival` | Input record: arrival timestep and requested service |
//! | `Job` | Work item: remaining service and accrued wait |

mod arrival;
mod job;

pub use arrival::Arrival;
pub use job::Job;

/// Discrete simulation time unit.
pub type Ticks = u64;
