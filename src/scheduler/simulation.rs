//! Time-stepped single-processor simulation.
//!
//! # Algorithm
//!
//! Each step, in order:
//! 1. Pull the arrival for the current timestep (if arrivals remain) and
//!    queue it.
//! 2. If the processor is idle, dispatch a job chosen by the discipline.
//! 3. If a job is running, let the discipline preempt it, then consume one
//!    unit of service. A job reaching zero completes and frees the processor.
//! 4. Record the queue length, then add one unit of wait to every queued job.
//! 5. Advance the clock.
//!
//! The run ends once the arrival source is exhausted, the queue is empty and
//! the processor is idle.
//!
//! # Complexity
//! O(q) per step where q is the queue length (wait accrual, plus the
//! shortest-job scan for SJF and SJFP).

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::event::SimEvent;
use super::summary::{RunCounters, SimulationSummary};
use crate::arrival::ArrivalSource;
use crate::config::SimulationConfig;
use crate::dispatching::{Decision, Discipline};
use crate::error::Result;
use crate::models::{Job, Ticks};
use crate::queue::JobQueue;

/// A single-processor scheduling simulation.
///
/// # Example
///
/// ```
/// use sched_sim::arrival::ArrivalFeed;
/// use sched_sim::dispatching::DisciplineKind;
/// use sched_sim::models::Arrival;
/// use sched_sim::scheduler::Simulation;
/// use sched_sim::SimulationConfig;
///
/// let arrivals = vec![Arrival::new(0, 5), Arrival::new(2, 1)];
/// let config = SimulationConfig::new(DisciplineKind::Fcfs);
/// let mut sim = Simulation::new(&config, ArrivalFeed::from(arrivals));
///
/// let summary = sim.run().unwrap();
/// assert_eq!(summary.total_run_time, 6);
/// assert_eq!(summary.total_wait_time, 3);
/// ```
#[derive(Debug)]
pub struct Simulation<A> {
    discipline: Arc<dyn Discipline>,
    queue: JobQueue,
    arrivals: A,
    running: Option<Job>,
    now: Ticks,
    counters: RunCounters,
}

impl<A: ArrivalSource> Simulation<A> {
    /// Creates a simulation from a config.
    pub fn new(config: &SimulationConfig, arrivals: A) -> Self {
        Self::with_discipline(config.discipline.rule(), config.build_queue(), arrivals)
    }

    /// Creates a simulation with an explicit discipline and queue.
    pub fn with_discipline(discipline: Arc<dyn Discipline>, queue: JobQueue, arrivals: A) -> Self {
        Self {
            discipline,
            queue,
            arrivals,
            running: None,
            now: 0,
            counters: RunCounters::default(),
        }
    }

    /// Advances the simulation by one time unit.
    ///
    /// Returns what happened during the step, in order.
    pub fn step(&mut self) -> Result<Vec<SimEvent>> {
        let now = self.now;
        let mut events = Vec::new();

        if !self.arrivals.is_exhausted() {
            if let Some(duration) = self.arrivals.job_arriving_at(now) {
                self.queue.add(Job::new(duration))?;
                self.counters.total_jobs += 1;
                debug!(time = now, duration, "Job arrived");
                events.push(SimEvent::Arrived { duration });
            }
        }

        if self.running.is_none() && !self.queue.is_empty() {
            let job = self.discipline.select(&mut self.queue)?;
            if job.is_complete() {
                warn!(time = now, "Discarding zero-duration job");
                events.push(SimEvent::Discarded {
                    wait_time: job.wait_time,
                });
            } else {
                debug!(time = now, duration = job.duration, wait = job.wait_time, "Dispatched");
                events.push(SimEvent::Dispatched {
                    duration: job.duration,
                    wait_time: job.wait_time,
                });
                self.running = Some(job);
            }
        }

        if let Some(running) = self.running.take() {
            let decision = if self.discipline.is_preemptive() {
                self.discipline.preempt(running, &mut self.queue)?
            } else {
                Decision::Continue(running)
            };
            if let Decision::Preempt {
                incoming,
                displaced,
            } = decision
            {
                debug!(
                    time = now,
                    incoming = incoming.duration,
                    displaced = displaced.duration,
                    "Preempting job"
                );
                events.push(SimEvent::Preempted {
                    incoming: incoming.duration,
                    displaced: displaced.duration,
                });
            }
            let mut job = decision.running();

            self.counters.total_run_time += 1;
            if job.run_for_tick() {
                self.counters.total_wait_time += job.wait_time;
                self.counters.completed_jobs += 1;
                debug!(time = now, wait = job.wait_time, "Job completed");
                events.push(SimEvent::Completed {
                    wait_time: job.wait_time,
                });
            } else {
                self.running = Some(job);
            }
        }

        self.counters.max_queue_length = self.counters.max_queue_length.max(self.queue.len());

        debug!(
            time = now,
            remaining = ?self.running.map(|job| job.duration),
            queue = %self.queue,
            "Step finished"
        );

        self.queue.increment_wait_times();
        self.now += 1;
        Ok(events)
    }

    /// Steps until the simulation is finished and returns the summary.
    pub fn run(&mut self) -> Result<SimulationSummary> {
        while !self.is_finished() {
            self.step()?;
        }

        let summary = self.summary();
        info!(
            discipline = summary.discipline,
            total_time = summary.total_time,
            total_jobs = summary.total_jobs,
            total_wait_time = summary.total_wait_time,
            utilization = summary.utilization,
            "Simulation finished"
        );
        Ok(summary)
    }

    /// Whether arrivals are exhausted, the queue is empty and nothing runs.
    pub fn is_finished(&self) -> bool {
        self.arrivals.is_exhausted() && self.queue.is_empty() && self.running.is_none()
    }

    /// Statistics accumulated so far.
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary::from_counters(self.discipline.name(), self.now, &self.counters)
    }

    /// Current simulation time.
    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn queue(&self) -> &JobQueue {
        &self.queue
    }

    /// The job occupying the processor, if any.
    pub fn running(&self) -> Option<&Job> {
        self.running.as_ref()
    }

    pub fn discipline(&self) -> &dyn Discipline {
        self.discipline.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrival::ArrivalFeed;
    use crate::dispatching::DisciplineKind;
    use crate::models::Arrival;
    use crate::queue::QueueError;
    use crate::workload::WorkloadGenerator;
    use crate::SimError;

    type VecFeed = ArrivalFeed<std::vec::IntoIter<Arrival>>;

    fn sim(kind: DisciplineKind, pairs: &[(u64, u64)]) -> Simulation<VecFeed> {
        let arrivals: Vec<Arrival> = pairs.iter().map(|&(t, d)| Arrival::new(t, d)).collect();
        Simulation::new(&SimulationConfig::new(kind), ArrivalFeed::from(arrivals))
    }

    /// Runs to completion, collecting every step's events.
    fn run_with_events(sim: &mut Simulation<VecFeed>) -> Vec<(Ticks, SimEvent)> {
        let mut events = Vec::new();
        while !sim.is_finished() {
            let now = sim.now();
            for event in sim.step().unwrap() {
                events.push((now, event));
            }
        }
        events
    }

    fn completions(events: &[(Ticks, SimEvent)]) -> Vec<(Ticks, Ticks)> {
        events
            .iter()
            .filter_map(|&(t, e)| match e {
                SimEvent::Completed { wait_time } => Some((t, wait_time)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fcfs_two_jobs() {
        let mut sim = sim(DisciplineKind::Fcfs, &[(0, 5), (2, 1)]);
        let events = run_with_events(&mut sim);

        // Job 1 finishes during step 4 (t=5), job 2 during step 5 (t=6).
        assert_eq!(completions(&events), vec![(4, 0), (5, 3)]);

        let summary = sim.summary();
        assert_eq!(summary.total_time, 6);
        assert_eq!(summary.total_jobs, 2);
        assert_eq!(summary.completed_jobs, 2);
        assert_eq!(summary.total_run_time, 6);
        assert_eq!(summary.total_wait_time, 3);
        assert_eq!(summary.max_queue_length, 1);
        assert!((summary.average_wait_time - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_matches_fcfs_when_no_choice() {
        let mut fcfs = sim(DisciplineKind::Fcfs, &[(0, 5), (2, 1)]);
        let mut sjf = sim(DisciplineKind::Sjf, &[(0, 5), (2, 1)]);

        let fcfs_summary = fcfs.run().unwrap();
        let sjf_summary = sjf.run().unwrap();

        assert_eq!(sjf_summary.discipline, "SJF");
        assert_eq!(sjf_summary.total_time, fcfs_summary.total_time);
        assert_eq!(sjf_summary.total_run_time, fcfs_summary.total_run_time);
        assert_eq!(sjf_summary.total_wait_time, fcfs_summary.total_wait_time);
        assert!((sjf_summary.average_wait_time - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_sjfp_preempts_longer_job() {
        let mut sim = sim(DisciplineKind::Sjfp, &[(0, 5), (1, 2)]);
        let events = run_with_events(&mut sim);

        assert!(events.contains(&(
            1,
            SimEvent::Preempted {
                incoming: 2,
                displaced: 4
            }
        )));
        // Job 2 completes at t=3 without waiting; job 1 at t=7 after 2 steps displaced.
        assert_eq!(completions(&events), vec![(2, 0), (6, 2)]);

        let summary = sim.summary();
        assert_eq!(summary.total_time, 7);
        assert_eq!(summary.total_run_time, 7);
        assert_eq!(summary.total_wait_time, 2);
        assert!((summary.average_wait_time - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjfp_preempts_on_later_arrival() {
        let mut sjfp = sim(DisciplineKind::Sjfp, &[(0, 5), (2, 1)]);
        let summary = sjfp.run().unwrap();
        // Job 2 (duration 1) is shorter than job 1's remaining 3 at t=2.
        assert_eq!(summary.total_wait_time, 1);
        assert_eq!(summary.total_time, 6);
    }

    #[test]
    fn test_sjfp_compared_candidate_keeps_waiting() {
        let mut sim = sim(DisciplineKind::Sjfp, &[(0, 3), (1, 5)]);
        sim.step().unwrap();

        // The arrival is taken off the queue for comparison, loses, and goes back.
        let events = sim.step().unwrap();
        assert_eq!(events, vec![SimEvent::Arrived { duration: 5 }]);
        let queued: Vec<Job> = sim.queue().iter().copied().collect();
        assert_eq!(queued, vec![Job::new(5).with_wait_time(1)]);

        let summary = sim.run().unwrap();
        assert_eq!(summary.total_time, 8);
        assert_eq!(summary.total_wait_time, 2);
    }

    #[test]
    fn test_sjf_picks_shortest_waiting_job() {
        // Three jobs pile up behind a long one; SJF runs them shortest first.
        let mut sim = sim(DisciplineKind::Sjf, &[(0, 4), (1, 3), (2, 1), (3, 2)]);
        let events = run_with_events(&mut sim);

        let dispatched: Vec<Ticks> = events
            .iter()
            .filter_map(|&(_, e)| match e {
                SimEvent::Dispatched { duration, .. } => Some(duration),
                _ => None,
            })
            .collect();
        assert_eq!(dispatched, vec![4, 1, 2, 3]);

        let summary = sim.summary();
        assert_eq!(summary.total_time, 10);
        assert_eq!(summary.max_queue_length, 3);
        // Waits: 0, (4-2)=2, (5-3)=2, (7-1)=6
        assert_eq!(summary.total_wait_time, 10);
    }

    #[test]
    fn test_sjf_tie_goes_to_earliest_arrival() {
        let mut sim = sim(DisciplineKind::Sjf, &[(0, 3), (1, 2), (2, 2)]);
        let events = run_with_events(&mut sim);

        let dispatched: Vec<(Ticks, Ticks)> = events
            .iter()
            .filter_map(|&(t, e)| match e {
                SimEvent::Dispatched { wait_time, .. } => Some((t, wait_time)),
                _ => None,
            })
            .collect();
        // The job from t=1 has waited longer when the processor frees at t=3.
        assert_eq!(dispatched, vec![(0, 0), (3, 2), (5, 3)]);
    }

    #[test]
    fn test_arrival_gap_idles() {
        let mut sim = sim(DisciplineKind::Fcfs, &[(0, 1), (5, 1)]);
        let summary = sim.run().unwrap();
        assert_eq!(summary.total_time, 7);
        assert_eq!(summary.total_run_time, 2);
        assert_eq!(summary.total_wait_time, 0);
        assert_eq!(summary.max_queue_length, 0);
    }

    #[test]
    fn test_empty_input_runs_one_step() {
        let mut sim = sim(DisciplineKind::Fcfs, &[]);
        assert!(!sim.is_finished());
        let summary = sim.run().unwrap();
        assert_eq!(summary.total_time, 1);
        assert_eq!(summary.total_jobs, 0);
        assert!((summary.average_wait_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_duration_arrival_is_skipped() {
        let mut sim = sim(DisciplineKind::Fcfs, &[(0, 0), (1, 2)]);
        let summary = sim.run().unwrap();
        assert_eq!(summary.total_jobs, 1);
        assert_eq!(summary.total_run_time, 2);
        assert_eq!(summary.total_time, 3);
    }

    #[test]
    fn test_zero_duration_job_in_queue_is_discarded() {
        let mut queue = JobQueue::new();
        queue.add(Job::new(0)).unwrap();
        let mut sim = Simulation::with_discipline(
            DisciplineKind::Fcfs.rule(),
            queue,
            ArrivalFeed::from(Vec::<Arrival>::new()),
        );

        let events = sim.step().unwrap();
        assert_eq!(events, vec![SimEvent::Discarded { wait_time: 0 }]);
        assert!(sim.running().is_none());
        assert!(sim.is_finished());
        assert_eq!(sim.summary().total_run_time, 0);
    }

    #[test]
    fn test_running_job_does_not_accrue_wait() {
        let mut sim = sim(DisciplineKind::Fcfs, &[(0, 3), (1, 1)]);
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.running().map(|j| j.wait_time), Some(0));
        assert_eq!(sim.queue().iter().next().map(|j| j.wait_time), Some(1));
    }

    #[test]
    fn test_queue_overflow_is_an_error() {
        let config = SimulationConfig::new(DisciplineKind::Fcfs).with_queue_capacity(1);
        let arrivals: Vec<Arrival> = (0..3).map(|t| Arrival::new(t, 10)).collect();
        let mut sim = Simulation::new(&config, ArrivalFeed::from(arrivals));

        match sim.run() {
            Err(SimError::Queue(QueueError::Full { capacity })) => assert_eq!(capacity, 1),
            other => panic!("expected queue overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_unbounded_queue_absorbs_burst() {
        let config = SimulationConfig::new(DisciplineKind::Sjf).unbounded();
        let arrivals: Vec<Arrival> = (0..400).map(|t| Arrival::new(t, 10)).collect();
        let mut sim = Simulation::new(&config, ArrivalFeed::from(arrivals));

        let summary = sim.run().unwrap();
        assert_eq!(summary.total_jobs, 400);
        assert_eq!(summary.completed_jobs, 400);
        assert!(summary.max_queue_length > 256);
    }

    #[test]
    fn test_wait_total_equals_sum_of_completions() {
        let arrivals = WorkloadGenerator::default().with_ticks(300).generate_seeded(11);
        for kind in DisciplineKind::ALL {
            let mut sim = Simulation::new(
                &SimulationConfig::new(kind),
                ArrivalFeed::from(arrivals.clone()),
            );
            let events = run_with_events(&mut sim);
            let summary = sim.summary();

            let summed: Ticks = completions(&events).iter().map(|&(_, w)| w).sum();
            assert_eq!(summed, summary.total_wait_time, "{kind}");
            assert_eq!(summary.completed_jobs, summary.total_jobs, "{kind}");
            assert_eq!(summary.total_jobs, arrivals.len() as u64, "{kind}");

            let work: Ticks = arrivals.iter().map(|a| a.duration).sum();
            assert_eq!(summary.total_run_time, work, "{kind}");
        }
    }

    #[test]
    fn test_sjf_beats_fcfs_on_backlog() {
        let pairs = [(0, 4), (1, 3), (2, 1), (3, 2)];
        let fcfs = sim(DisciplineKind::Fcfs, &pairs).run().unwrap();
        let sjf = sim(DisciplineKind::Sjf, &pairs).run().unwrap();

        // FCFS waits: 0, 3, 5, 5
        assert_eq!(fcfs.total_wait_time, 13);
        assert_eq!(sjf.total_wait_time, 10);
        assert_eq!(fcfs.total_time, sjf.total_time);
    }
}
