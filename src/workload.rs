//! Random workload generation.
//!
//! Bernoulli arrivals: at each timestep a job arrives with probability
//! `arrival_probability`. An arriving job is short with probability
//! `short_probability` and long otherwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Arrival, Ticks};

/// Parameters for a random arrival list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of timesteps during which jobs may arrive.
    pub ticks: Ticks,
    /// Per-step arrival probability (0.0..1.0).
    pub arrival_probability: f64,
    /// Probability an arriving job is short (0.0..1.0).
    pub short_probability: f64,
    /// Duration of a short job. Clamped to at least 1.
    pub short_duration: Ticks,
    /// Duration of a long job. Clamped to at least 1.
    pub long_duration: Ticks,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            ticks: 100,
            arrival_probability: 0.3,
            short_probability: 0.3,
            short_duration: 2,
            long_duration: 6,
        }
    }
}

impl WorkloadGenerator {
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    pub fn with_short_probability(mut self, p: f64) -> Self {
        self.short_probability = p;
        self
    }

    /// Sets the short and long job durations.
    pub fn with_durations(mut self, short: Ticks, long: Ticks) -> Self {
        self.short_duration = short;
        self.long_duration = long;
        self
    }

    /// Generates arrivals in timestep order, at most one per step.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Arrival> {
        let mut arrivals = Vec::new();

        for t in 0..self.ticks {
            if rng.random::<f64>() < self.arrival_probability {
                let duration = if rng.random::<f64>() < self.short_probability {
                    self.short_duration
                } else {
                    self.long_duration
                };
                arrivals.push(Arrival::new(t, duration.max(1)));
            }
        }

        arrivals
    }

    /// Generates arrivals from a seeded `StdRng`; equal seeds give equal lists.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Arrival> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}
