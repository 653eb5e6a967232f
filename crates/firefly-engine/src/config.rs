//! Simulation configuration.
//!
//! [`SimConfig`] is the builder input for [`Simulation::new`](crate::Simulation::new).
//! [`validate()`](SimConfig::validate) checks structural invariants before
//! anything is allocated.

use std::time::Duration;

use firefly_core::{ConfigError, NeighbourhoodKind};
use firefly_space::Grid2D;

// ── PrepareMode ────────────────────────────────────────────────────

/// How the prepare phase of a step is executed.
///
/// Both modes produce identical generations; only wall-clock time differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrepareMode {
    /// One thread, cells in row-major order.
    #[default]
    Sequential,
    /// Rows split across the rayon thread pool. Commit still happens once,
    /// after every row has joined.
    Parallel,
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of rows. Default: 10.
    pub rows: u32,
    /// Number of columns. Default: 10.
    pub cols: u32,
    /// Neighbourhood kind. Default: Moore.
    pub neighbourhood: NeighbourhoodKind,
    /// Seed for the initial state. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Wall-clock hint for a hosting renderer. Has no effect on the
    /// simulation itself. Default: 100 ms.
    pub tick_interval: Duration,
    /// Prepare-phase execution. Default: sequential.
    pub prepare: PrepareMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            neighbourhood: NeighbourhoodKind::Moore,
            seed: None,
            tick_interval: Duration::from_millis(100),
            prepare: PrepareMode::Sequential,
        }
    }
}

impl SimConfig {
    /// Configuration with the given shape and seed, other fields default.
    pub fn new(rows: u32, cols: u32, neighbourhood: NeighbourhoodKind, seed: Option<u64>) -> Self {
        Self {
            rows,
            cols,
            neighbourhood,
            seed,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid().map(|_| ())
    }

    /// The grid these dimensions describe.
    pub(crate) fn grid(&self) -> Result<Grid2D, ConfigError> {
        // EmptySpace converts to InvalidDimensions.
        Ok(Grid2D::new(self.rows, self.cols)?)
    }
}
