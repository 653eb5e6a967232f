//! Headless firefly simulation.
//!
//! Runs one simulation until it synchronizes or hits the step limit, or
//! with `--repetitions N` runs a batch of seeded simulations and prints a
//! summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package firefly-cli -- --rows 10 --cols 10 --neighbourhood moore --seed 42
//! cargo run --package firefly-cli -- --repetitions 100 --step-limit 2500 --quiet
//! ```
//!
//! Standard output carries only progress and result lines. Diagnostics go
//! to standard error through `tracing`; raise them with `-v` or `RUST_LOG`.

use std::fmt;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use firefly::engine::experiment::DEFAULT_STEP_LIMIT;
use firefly::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Ticks between progress lines.
const PROGRESS_EVERY: u64 = 100;

/// Firefly synchronization automaton
#[derive(Parser, Debug)]
#[command(name = "firefly")]
#[command(about = "Simulate fireflies on a grid until their flashes synchronize", long_about = None)]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,

    /// Grid columns
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    cols: u32,

    /// Neighbourhood: moore, vonneumann or random
    #[arg(long, visible_alias = "neighborhood", default_value_t = NeighbourhoodKind::Moore)]
    neighbourhood: NeighbourhoodKind,

    /// Maximum steps per run (0 for no limit)
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT, value_parser = parse_step_limit)]
    step_limit: u64,

    /// Random seed (drawn from OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress the periodic tick lines
    #[arg(short, long)]
    quiet: bool,

    /// Milliseconds to sleep between ticks
    #[arg(long, default_value_t = 0)]
    tick_interval_ms: u64,

    /// Run this many seeded simulations and print a summary
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repetitions: u32,

    /// Compute each generation across row chunks in parallel
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            prepare: if self.parallel {
                PrepareMode::Parallel
            } else {
                PrepareMode::Sequential
            },
            ..SimConfig::new(self.rows, self.cols, self.neighbourhood, self.seed)
        }
    }
}

fn parse_step_limit(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidStepLimit {
            value: value.to_string(),
        })
}

/// Failures after argument parsing.
#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Io(io::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::from(2),
            Self::Io(_) => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Io(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.repetitions > 1 {
        run_batch(args, out)
    } else {
        run_single(args, out)
    }
}

fn run_single(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let mut sim = Simulation::new(args.config())?;
    info!(
        seed = sim.seed(),
        rows = args.rows,
        cols = args.cols,
        neighbourhood = %args.neighbourhood,
        "simulation created"
    );

    let interval = sim.tick_interval();
    let mut write_error = None;
    let outcome = sim.run_with(args.step_limit, |s| {
        let tick = s.tick_count();
        if !args.quiet && tick % PROGRESS_EVERY == 0 {
            if let Err(e) = writeln!(out, "tick {tick}") {
                write_error = Some(e);
                return ControlFlow::Break(());
            }
        }
        if !interval.is_zero() {
            thread::sleep(interval);
        }
        ControlFlow::Continue(())
    });
    if let Some(e) = write_error {
        return Err(e.into());
    }

    match outcome.synced_at {
        Some(tick) => writeln!(out, "synchronized at tick {tick}")?,
        None => writeln!(
            out,
            "halted at tick {} without synchronizing",
            outcome.final_tick
        )?,
    }
    Ok(())
}

fn run_batch(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let experiment = Experiment {
        config: args.config(),
        repetitions: args.repetitions as usize,
        step_limit: args.step_limit,
    };
    let report = experiment.run()?;
    writeln!(out, "{report}")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
