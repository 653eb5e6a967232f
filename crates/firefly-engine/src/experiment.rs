//! Batch experiments: many seeded runs of one configuration.
//!
//! Each repetition is an independent [`Simulation`] with seed `base + i`,
//! run on the rayon pool. The report summarizes the runs that
//! synchronized within the step limit.

use std::fmt;

use firefly_core::ConfigError;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::driver::RunOutcome;
use crate::simulation::Simulation;

/// Step limit used by [`Experiment::default`].
pub const DEFAULT_STEP_LIMIT: u64 = 2500;
/// Repetitions used by [`Experiment::default`].
pub const DEFAULT_REPETITIONS: usize = 100;

/// A batch of seeded runs of one configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Experiment {
    /// Shared configuration. Its seed, if any, is the base seed.
    pub config: SimConfig,
    /// Number of independent runs.
    pub repetitions: usize,
    /// Per-run step limit (0 means unbounded).
    pub step_limit: u64,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            repetitions: DEFAULT_REPETITIONS,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

/// One run of an [`Experiment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRecord {
    /// Seed the run was built from.
    pub seed: u64,
    /// How the run ended.
    pub outcome: RunOutcome,
}

/// Summary of an [`Experiment`].
///
/// `total_ticks`, `mean`, `min` and `max` cover synchronized runs only.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentReport {
    /// Every run, in seed order.
    pub runs: Vec<RunRecord>,
    /// Runs that synchronized within the limit.
    pub successes: usize,
    /// Sum of the sync ticks of successful runs.
    pub total_ticks: u64,
    /// Mean sync tick, if any run succeeded.
    pub mean: Option<f64>,
    /// Fastest sync tick.
    pub min: Option<u64>,
    /// Slowest sync tick.
    pub max: Option<u64>,
}

impl ExperimentReport {
    /// Summarize a set of runs.
    pub fn from_runs(runs: Vec<RunRecord>) -> Self {
        let synced: Vec<u64> = runs.iter().filter_map(|r| r.outcome.synced_at).collect();
        let total_ticks: u64 = synced.iter().sum();
        let mean = (!synced.is_empty()).then(|| total_ticks as f64 / synced.len() as f64);
        Self {
            successes: synced.len(),
            total_ticks,
            mean,
            min: synced.iter().copied().min(),
            max: synced.iter().copied().max(),
            runs,
        }
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "successful synchronizations: {} out of {} repetitions",
            self.successes,
            self.runs.len()
        )?;
        write!(f, "total ticks: {}", self.total_ticks)?;
        if let (Some(mean), Some(min), Some(max)) = (self.mean, self.min, self.max) {
            write!(f, "\naverage ticks: {mean:.2}\nminimum: {min}\nmaximum: {max}")?;
        }
        Ok(())
    }
}

impl Experiment {
    /// Run every repetition and summarize.
    pub fn run(&self) -> Result<ExperimentReport, ConfigError> {
        self.config.validate()?;
        let base = self.config.seed.unwrap_or_else(rand::random);
        debug!(
            repetitions = self.repetitions,
            step_limit = self.step_limit,
            base_seed = base,
            "experiment started"
        );
        let runs = (0..self.repetitions)
            .into_par_iter()
            .map(|i| -> Result<RunRecord, ConfigError> {
                let seed = base.wrapping_add(i as u64);
                let config = SimConfig {
                    seed: Some(seed),
                    ..self.config.clone()
                };
                let outcome = Simulation::new(config)?.run(self.step_limit);
                Ok(RunRecord { seed, outcome })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let report = ExperimentReport::from_runs(runs);
        info!(
            successes = report.successes,
            repetitions = self.repetitions,
            "experiment finished"
        );
        Ok(report)
    }
}
