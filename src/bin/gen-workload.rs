//! Writes a random arrival file for `sched-sim` to stdout.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sched_sim::arrival::format_arrivals;
use sched_sim::workload::WorkloadGenerator;

#[derive(Parser, Debug)]
#[command(name = "gen-workload")]
#[command(version)]
#[command(about = "Generate a Bernoulli arrival workload for sched-sim")]
struct Args {
    /// Number of timesteps during which jobs may arrive
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Probability that a job arrives at each timestep
    #[arg(long, default_value_t = 0.3)]
    arrival_prob: f64,

    /// Probability that an arriving job is short
    #[arg(long, default_value_t = 0.3)]
    short_prob: f64,

    /// Duration of a short job
    #[arg(long, default_value_t = 2)]
    short: u64,

    /// Duration of a long job
    #[arg(long, default_value_t = 6)]
    long: u64,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    for (name, p) in [("arrival-prob", args.arrival_prob), ("short-prob", args.short_prob)] {
        if !(0.0..=1.0).contains(&p) {
            tracing::warn!(option = name, value = p, "Probability outside 0..1, clamping");
        }
    }

    let generator = WorkloadGenerator::default()
        .with_ticks(args.ticks)
        .with_arrival_probability(args.arrival_prob.clamp(0.0, 1.0))
        .with_short_probability(args.short_prob.clamp(0.0, 1.0))
        .with_durations(args.short, args.long);

    let arrivals = generator.generate_seeded(args.seed);
    tracing::info!(count = arrivals.len(), seed = args.seed, "Generated arrivals");
    print!("{}", format_arrivals(&arrivals));
}
