//! Two-phase synchronous stepper.
//!
//! Prepare reads generation `t` from the published buffer and writes
//! generation `t+1` into the staging buffer. Commit is a single
//! [`TickGuard::publish`]. The guard holds the arena's only mutable
//! borrow, so prepare never observes a `t+1` value.

use std::time::Instant;

use firefly_arena::{PingPongBuffer, TickGuard};
use firefly_core::Step;
use firefly_space::Adjacency;
use rayon::prelude::*;

use crate::config::PrepareMode;
use crate::metrics::StepMetrics;
use crate::rule::{any_flashing, next_step};

/// Rule activity over a range of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PrepareCounts {
    resets: usize,
    flashing: usize,
}

impl PrepareCounts {
    fn merge(self, other: Self) -> Self {
        Self {
            resets: self.resets + other.resets,
            flashing: self.flashing + other.flashing,
        }
    }
}

/// Advances a [`PingPongBuffer`] one generation at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stepper {
    mode: PrepareMode,
}

impl Stepper {
    /// A stepper running its prepare phase in `mode`.
    pub fn new(mode: PrepareMode) -> Self {
        Self { mode }
    }

    /// The configured prepare mode.
    pub fn mode(&self) -> PrepareMode {
        self.mode
    }

    /// Prepare and commit one generation.
    ///
    /// `cols` is the row length used to split work in parallel mode.
    pub fn step(
        &self,
        arena: &mut PingPongBuffer,
        adjacency: &Adjacency,
        cols: usize,
    ) -> StepMetrics {
        debug_assert_eq!(arena.len(), adjacency.len());
        let step_start = Instant::now();

        let mut guard = arena.begin_tick();
        let prepare_start = Instant::now();
        let counts = self.prepare(&mut guard, adjacency, cols);
        let prepare_us = prepare_start.elapsed().as_micros() as u64;

        let commit_start = Instant::now();
        guard.publish();
        let commit_us = commit_start.elapsed().as_micros() as u64;

        StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            prepare_us,
            commit_us,
            resets: counts.resets,
            flashing: counts.flashing,
        }
    }

    fn prepare(
        &self,
        guard: &mut TickGuard<'_>,
        adjacency: &Adjacency,
        cols: usize,
    ) -> PrepareCounts {
        let (current, next) = guard.buffers();
        match self.mode {
            PrepareMode::Sequential => prepare_range(current, next, adjacency, 0),
            PrepareMode::Parallel => next
                .par_chunks_mut(cols.max(1))
                .enumerate()
                .map(|(row, out)| prepare_range(current, out, adjacency, row * cols))
                .reduce(PrepareCounts::default, PrepareCounts::merge),
        }
    }
}

/// Fill `out` with the next steps of cells `first..first + out.len()`.
fn prepare_range(
    current: &[Step],
    out: &mut [Step],
    adjacency: &Adjacency,
    first: usize,
) -> PrepareCounts {
    let mut counts = PrepareCounts::default();
    for (offset, slot) in out.iter_mut().enumerate() {
        let index = first + offset;
        let step = current[index];
        let seen = step.is_charging() && any_flashing(current, adjacency.neighbours(index));
        if step.is_flashing() {
            counts.flashing += 1;
        }
        if seen {
            counts.resets += 1;
        }
        *slot = next_step(step, seen);
    }
    counts
}
