//! The simulation: grid, topology, and generation storage.
//!
//! [`Simulation`] is the primary user-facing API. Each call to
//! [`step()`](Simulation::step) runs one prepare/commit cycle and returns
//! the metrics of that step.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and
//! [`snapshot()`](Simulation::snapshot) returns a [`Snapshot`] that borrows
//! from `self`. The caller cannot step while holding a snapshot; the
//! borrow checker enforces this at compile time. Several simulations can
//! coexist in one process since no state is global.

use std::time::Duration;

use firefly_arena::{PingPongBuffer, Snapshot};
use firefly_core::{ConfigError, Coord, NeighbourhoodKind, Step};
use firefly_space::{assign_connectivity, Adjacency, Connectivity, Grid2D};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::SimConfig;
use crate::detector;
use crate::metrics::StepMetrics;
use crate::stepper::Stepper;

// Compile-time assertion: Simulation is Send + Sync.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Simulation>();
    }
};

/// A firefly grid and everything needed to advance it.
///
/// # Example
///
/// ```
/// use firefly_core::NeighbourhoodKind;
/// use firefly_engine::new_simulation;
///
/// let mut sim = new_simulation(10, 10, NeighbourhoodKind::Moore, Some(42)).unwrap();
/// let outcome = sim.run(2500);
/// assert_eq!(outcome.synced_at, Some(87));
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid2D,
    neighbourhood: NeighbourhoodKind,
    adjacency: Adjacency,
    arena: PingPongBuffer,
    stepper: Stepper,
    seed: u64,
    tick_interval: Duration,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Create a simulation from a [`SimConfig`].
    ///
    /// Validates the configuration, draws the initial generation and (for
    /// [`NeighbourhoodKind::Random`]) the per-cell connectivity from one
    /// seeded stream, and builds the adjacency table.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let initial = draw_steps(grid.cell_count(), &mut rng);
        let per_cell = assign_connectivity(config.neighbourhood, grid.cell_count(), &mut rng);
        Ok(Self::assemble(grid, &config, seed, initial, per_cell))
    }

    /// Create a simulation whose tick-0 generation is given explicitly.
    ///
    /// `steps` is row-major, one value in `[0, 9]` per cell. The seed only
    /// drives the connectivity draw for [`NeighbourhoodKind::Random`] and
    /// any later [`reset`](Self::reset).
    pub fn from_steps(
        rows: u32,
        cols: u32,
        neighbourhood: NeighbourhoodKind,
        seed: Option<u64>,
        steps: &[u8],
    ) -> Result<Self, ConfigError> {
        let config = SimConfig::new(rows, cols, neighbourhood, seed);
        let grid = config.grid()?;
        if steps.len() != grid.cell_count() {
            return Err(ConfigError::CellCountMismatch {
                expected: grid.cell_count(),
                actual: steps.len(),
            });
        }
        let initial = steps
            .iter()
            .map(|&v| Step::new(v))
            .collect::<Result<Vec<_>, _>>()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let per_cell = assign_connectivity(neighbourhood, grid.cell_count(), &mut rng);
        Ok(Self::assemble(grid, &config, seed, initial, per_cell))
    }

    fn assemble(
        grid: Grid2D,
        config: &SimConfig,
        seed: u64,
        initial: Vec<Step>,
        per_cell: Vec<Connectivity>,
    ) -> Self {
        let adjacency = Adjacency::build(&grid, per_cell);
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            neighbourhood = %config.neighbourhood,
            seed,
            prepare = ?config.prepare,
            "simulation created"
        );
        Self {
            grid,
            neighbourhood: config.neighbourhood,
            adjacency,
            arena: PingPongBuffer::new(initial),
            stepper: Stepper::new(config.prepare),
            seed,
            tick_interval: config.tick_interval,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) -> &StepMetrics {
        let cols = self.grid.cols() as usize;
        self.last_metrics = self.stepper.step(&mut self.arena, &self.adjacency, cols);
        trace!(
            tick = self.tick_count(),
            resets = self.last_metrics.resets,
            flashing = self.last_metrics.flashing,
            prepare_us = self.last_metrics.prepare_us,
            "step committed"
        );
        &self.last_metrics
    }

    /// `true` iff every cell shares its step with all of its neighbours.
    pub fn is_synchronized(&self) -> bool {
        detector::is_synchronized(self.arena.published(), &self.adjacency)
    }

    /// Number of cells with a neighbour on a different step.
    pub fn out_of_sync_cells(&self) -> usize {
        detector::out_of_sync_cells(self.arena.published(), &self.adjacency)
    }

    /// Read-only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.grid, self.arena.published(), self.tick_count())
    }

    /// Steps taken since construction or the last [`reset`](Self::reset).
    pub fn tick_count(&self) -> u64 {
        self.arena.generation()
    }

    /// Redraw the initial state from `seed` and rewind to tick 0.
    ///
    /// The draw order matches [`new`](Self::new), so `reset(s)` leaves the
    /// simulation identical to a fresh one built with seed `s`.
    pub fn reset(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let initial = draw_steps(self.grid.cell_count(), &mut rng);
        if self.neighbourhood == NeighbourhoodKind::Random {
            let per_cell =
                assign_connectivity(self.neighbourhood, self.grid.cell_count(), &mut rng);
            self.adjacency = Adjacency::build(&self.grid, per_cell);
        }
        self.arena.reset(initial);
        self.seed = seed;
        self.last_metrics = StepMetrics::default();
        debug!(seed, "simulation reset");
    }

    /// The seed the current initial state was drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configured neighbourhood kind.
    pub fn neighbourhood(&self) -> NeighbourhoodKind {
        self.neighbourhood
    }

    /// Connectivity resolved for the cell at `coord`, or `None` outside
    /// the grid.
    pub fn connectivity(&self, coord: Coord) -> Option<Connectivity> {
        let index = self.grid.try_index(coord)?;
        Some(self.adjacency.connectivity(index))
    }

    /// In-bounds neighbours of the cell at `coord`, or `None` outside the
    /// grid.
    pub fn neighbours(&self, coord: Coord) -> Option<Vec<Coord>> {
        let index = self.grid.try_index(coord)?;
        Some(
            self.adjacency
                .neighbours(index)
                .iter()
                .map(|&n| self.grid.coord(n as usize))
                .collect(),
        )
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (u32, u32) {
        self.grid.dims()
    }

    /// The grid geometry.
    pub fn grid(&self) -> Grid2D {
        self.grid
    }

    /// The precomputed neighbour table.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Metrics of the most recent step (all zero before the first).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Wall-clock hint for a hosting renderer.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

/// Build a simulation from the four core parameters.
///
/// Shorthand for [`Simulation::new`] with a [`SimConfig`] whose other
/// fields are default.
pub fn new_simulation(
    rows: u32,
    cols: u32,
    neighbourhood: NeighbourhoodKind,
    seed: Option<u64>,
) -> Result<Simulation, ConfigError> {
    Simulation::new(SimConfig::new(rows, cols, neighbourhood, seed))
}

/// One uniform real per cell, row-major, mapped onto `{0, ..., 9}`.
fn draw_steps<R: Rng + ?Sized>(cell_count: usize, rng: &mut R) -> Vec<Step> {
    (0..cell_count)
        .map(|_| Step::from_unit(rng.random::<f64>()))
        .collect()
}
