//! Time-stepped simulation and summary statistics.
//!
//! # Algorithm
//!
//! `Simulation` advances a logical clock one unit per step, pulling arrivals,
//! dispatching and (for preemptive disciplines) swapping jobs, then
//! consuming one unit of service and accruing wait on queued jobs.
//!
//! # Summary
//!
//! `SimulationSummary` reports total time, jobs, longest queue, busy time,
//! total wait and average wait.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Kleinrock (1976), "Queueing Systems, Vol. 2", Ch. 3

mod event;
mod simulation;
mod summary;

pub use event::SimEvent;
pub use simulation::Simulation;
pub use summary::SimulationSummary;
