//! Discrete-time single-processor scheduling simulator.
//!
//! Simulates one CPU serving jobs that arrive at prescribed timesteps under
//! First-Come-First-Served, Shortest-Job-First or preemptive
//! Shortest-Job-First scheduling, and reports waiting-time statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Arrival`, `Ticks`
//! - **`queue`**: Bounded ring-buffer `JobQueue` with shortest-job removal
//! - **`dispatching`**: `Discipline` trait and the `Fcfs`, `Sjf`, `Sjfp` rules
//! - **`scheduler`**: The time-stepped `Simulation` and its `SimulationSummary`
//! - **`arrival`**: `ArrivalSource` trait, `ArrivalFeed`, arrival file format
//! - **`validation`**: Arrival list checks (ordering, zero durations)
//! - **`workload`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use sched_sim::arrival::ArrivalFeed;
//! use sched_sim::dispatching::DisciplineKind;
//! use sched_sim::models::Arrival;
//! use sched_sim::scheduler::Simulation;
//! use sched_sim::SimulationConfig;
//!
//! let arrivals = vec![Arrival::new(0, 5), Arrival::new(1, 2)];
//! let config = SimulationConfig::new(DisciplineKind::Sjfp);
//! let summary = Simulation::new(&config, ArrivalFeed::from(arrivals))
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(summary.total_time, 7);
//! assert_eq!(summary.total_wait_time, 2);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod arrival;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{Result, SimError};
