//! Simulation engine for the firefly synchronization automaton.
//!
//! Provides [`Simulation`], which owns the grid, its neighbour table and
//! the double-buffered generations, and advances them with a two-phase
//! synchronous update. The driver ([`Simulation::run`]) steps until every
//! cell agrees with its neighbours or a step limit is hit, and
//! [`Experiment`] repeats that over many seeds in parallel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod detector;
pub mod driver;
pub mod experiment;
pub mod metrics;
pub mod rule;
pub mod simulation;
pub mod stepper;

pub use config::{PrepareMode, SimConfig};
pub use driver::{HaltReason, RunOutcome};
pub use experiment::{Experiment, ExperimentReport, RunRecord};
pub use metrics::StepMetrics;
pub use simulation::{new_simulation, Simulation};
pub use stepper::Stepper;
