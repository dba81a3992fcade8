//! Simulation summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total time | Steps simulated until the termination condition held |
//! | Total jobs | Arrivals accepted into the queue |
//! | Max queue length | Largest queue length observed at the end of a step |
//! | Total run time | Steps in which the processor was busy |
//! | Total wait time | Sum of each completed job's accrued wait |
//! | Average wait time | total wait / total jobs |
//! | Utilization | total run time / total time |

use std::fmt;

use serde::Serialize;

use crate::models::Ticks;

/// Counters accumulated while the simulation runs.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunCounters {
    pub total_jobs: u64,
    pub completed_jobs: u64,
    pub max_queue_length: usize,
    pub total_run_time: Ticks,
    pub total_wait_time: Ticks,
}

/// Final report of a simulation run.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Discipline name (e.g., "SJFP").
    pub discipline: &'static str,
    /// Time units simulated.
    pub total_time: Ticks,
    /// Jobs that arrived.
    pub total_jobs: u64,
    /// Jobs that ran to completion.
    pub completed_jobs: u64,
    /// Longest queue observed.
    pub max_queue_length: usize,
    /// Time units the processor was busy.
    pub total_run_time: Ticks,
    /// Sum of completed jobs' wait times.
    pub total_wait_time: Ticks,
    /// `total_wait_time / total_jobs`, or 0.0 when no job arrived.
    pub average_wait_time: f64,
    /// Fraction of simulated time the processor was busy (0.0..1.0).
    pub utilization: f64,
}

impl SimulationSummary {
    pub(crate) fn from_counters(
        discipline: &'static str,
        total_time: Ticks,
        counters: &RunCounters,
    ) -> Self {
        let average_wait_time = if counters.total_jobs == 0 {
            0.0
        } else {
            counters.total_wait_time as f64 / counters.total_jobs as f64
        };
        let utilization = if total_time == 0 {
            0.0
        } else {
            counters.total_run_time as f64 / total_time as f64
        };

        Self {
            discipline,
            total_time,
            total_jobs: counters.total_jobs,
            completed_jobs: counters.completed_jobs,
            max_queue_length: counters.max_queue_length,
            total_run_time: counters.total_run_time,
            total_wait_time: counters.total_wait_time,
            average_wait_time,
            utilization,
        }
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ran for {} time units. Ran {} jobs. Longest queue length was {}",
            self.total_time, self.total_jobs, self.max_queue_length
        )?;
        writeln!(
            f,
            "Total runtime: {}. Total wait time: {}",
            self.total_run_time, self.total_wait_time
        )?;
        write!(f, "Average wait time: {:.6}", self.average_wait_time)
    }
}
