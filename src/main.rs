use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sched_sim::arrival::{load_arrivals, ArrivalFeed};
use sched_sim::dispatching::DisciplineKind;
use sched_sim::queue::DEFAULT_QUEUE_CAPACITY;
use sched_sim::scheduler::Simulation;
use sched_sim::validation::ensure_valid;
use sched_sim::SimulationConfig;

#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
#[command(version)]
#[command(about = "Discrete-time single-CPU scheduling simulator (FCFS, SJF, SJFP)")]
struct Args {
    /// Scheduling discipline
    #[arg(value_enum, ignore_case = true)]
    discipline: DisciplineKind,

    /// Arrival file: one "<arrival_time> <duration>" pair per line
    input: PathBuf,

    /// Maximum number of queued jobs
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY, conflicts_with = "unbounded")]
    capacity: usize,

    /// Let the job queue grow without bound
    #[arg(long)]
    unbounded: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log every simulation step to stderr
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures.
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.trace);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> sched_sim::Result<()> {
    let arrivals = load_arrivals(&args.input)?;
    ensure_valid(&arrivals)?;
    tracing::debug!(path = %args.input.display(), count = arrivals.len(), "Loaded arrivals");

    let config = build_config(args);
    let mut sim = Simulation::new(&config, ArrivalFeed::from(arrivals));

    match args.format {
        OutputFormat::Text => {
            println!("Running simulation for {}", sim.discipline().description());
            let summary = sim.run()?;
            println!("{summary}");
        }
        OutputFormat::Json => {
            let summary = sim.run()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> SimulationConfig {
    let config = SimulationConfig::new(args.discipline);
    if args.unbounded {
        config.unbounded()
    } else {
        config.with_queue_capacity(args.capacity)
    }
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("sched_sim=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
