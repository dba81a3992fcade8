//! Arrival sources.
//!
//! The simulation pulls at most one arrival per timestep through
//! [`ArrivalSource`]. [`ArrivalFeed`] adapts any ordered iterator of
//! [`Arrival`]s, so in-memory lists, parsed files and generated workloads
//! all drive the simulation the same way.
//!
//! # Exhaustion
//!
//! Exhaustion is discovered lazily: the feed holds one arrival of lookahead
//! and only reports exhausted after a pull finds nothing left. An empty feed
//! therefore still lets the simulation run a single step.

mod parse;

pub use parse::{format_arrivals, load_arrivals, parse_arrivals};

use crate::models::{Arrival, Ticks};

/// Pull interface the simulation reads arrivals through.
pub trait ArrivalSource {
    /// Returns the duration of the job arriving at `timestep`, if any.
    ///
    /// Called at most once per timestep, with strictly increasing
    /// timesteps. A zero-duration arrival is reported as `None`.
    fn job_arriving_at(&mut self, timestep: Ticks) -> Option<Ticks>;

    /// Whether every arrival has been delivered.
    fn is_exhausted(&self) -> bool;
}

/// Lookahead adapter turning an ordered iterator of arrivals into an
/// [`ArrivalSource`].
///
/// A held arrival is delivered on the first pull at or after its timestep.
/// Arrivals sharing a timestep are therefore delivered on consecutive steps
/// rather than being lost.
#[derive(Debug, Clone)]
pub struct ArrivalFeed<I> {
    arrivals: I,
    pending: Option<Arrival>,
    exhausted: bool,
}

impl<I: Iterator<Item = Arrival>> ArrivalFeed<I> {
    pub fn new(arrivals: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            arrivals: arrivals.into_iter(),
            pending: None,
            exhausted: false,
        }
    }
}

impl<I: Iterator<Item = Arrival>> ArrivalSource for ArrivalFeed<I> {
    fn job_arriving_at(&mut self, timestep: Ticks) -> Option<Ticks> {
        if self.exhausted {
            return None;
        }

        if self.pending.is_none() {
            self.pending = self.arrivals.next();
            if self.pending.is_none() {
                self.exhausted = true;
                return None;
            }
        }

        match self.pending {
            Some(arrival) if arrival.time <= timestep => {
                self.pending = None;
                arrival.to_job().map(|job| job.duration)
            }
            _ => None,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl From<Vec<Arrival>> for ArrivalFeed<std::vec::IntoIter<Arrival>> {
    fn from(arrivals: Vec<Arrival>) -> Self {
        Self::new(arrivals)
    }
}
