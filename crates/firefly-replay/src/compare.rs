//! Trace and generation comparison.
//!
//! Digest-first: [`compare_traces`] only looks at checkpoint digests. When
//! both generations are still at hand, [`compare_generations`] pinpoints
//! the first differing cell.

use firefly_arena::GenerationAccess;
use firefly_core::{Coord, Step};

use crate::hash::{hex, Digest};
use crate::trace::Trace;

/// What differed at a checkpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// Both traces hold the tick but their digests differ.
    Digest {
        /// Digest from the first trace.
        left: Digest,
        /// Digest from the second trace.
        right: Digest,
    },
    /// Only one trace holds this tick.
    MissingCheckpoint {
        /// `true` if the first trace has it, `false` if the second does.
        in_left: bool,
    },
}

/// The first divergence between two traces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Tick of the first differing checkpoint.
    pub tick: u64,
    /// What differed.
    pub kind: DivergenceKind,
}

impl std::fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DivergenceKind::Digest { left, right } => write!(
                f,
                "tick {}: digest {} != {}",
                self.tick,
                hex(left),
                hex(right)
            ),
            DivergenceKind::MissingCheckpoint { in_left } => {
                let side = if *in_left { "second" } else { "first" };
                write!(f, "tick {}: checkpoint missing from {side} trace", self.tick)
            }
        }
    }
}

/// First checkpoint at which `a` and `b` disagree, in tick order.
///
/// Returns `None` when both traces hold the same ticks with the same
/// digests. Seed and dimensions are not compared.
pub fn compare_traces(a: &Trace, b: &Trace) -> Option<DivergenceReport> {
    let mut left = a.checkpoints.iter().peekable();
    let mut right = b.checkpoints.iter().peekable();
    loop {
        match (left.peek(), right.peek()) {
            (None, None) => return None,
            (Some(l), None) => {
                return Some(DivergenceReport {
                    tick: l.tick,
                    kind: DivergenceKind::MissingCheckpoint { in_left: true },
                })
            }
            (None, Some(r)) => {
                return Some(DivergenceReport {
                    tick: r.tick,
                    kind: DivergenceKind::MissingCheckpoint { in_left: false },
                })
            }
            (Some(l), Some(r)) if l.tick < r.tick => {
                return Some(DivergenceReport {
                    tick: l.tick,
                    kind: DivergenceKind::MissingCheckpoint { in_left: true },
                })
            }
            (Some(l), Some(r)) if r.tick < l.tick => {
                return Some(DivergenceReport {
                    tick: r.tick,
                    kind: DivergenceKind::MissingCheckpoint { in_left: false },
                })
            }
            (Some(l), Some(r)) => {
                if l.digest != r.digest {
                    return Some(DivergenceReport {
                        tick: l.tick,
                        kind: DivergenceKind::Digest {
                            left: l.digest,
                            right: r.digest,
                        },
                    });
                }
                left.next();
                right.next();
            }
        }
    }
}

/// The first cell, in row-major order, that differs between two
/// generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// Position of the cell.
    pub coord: Coord,
    /// Its step in the first generation.
    pub left: Step,
    /// Its step in the second generation.
    pub right: Step,
}

/// Cell-exact comparison of two generations of the same grid.
///
/// # Panics
///
/// Panics if the dimensions differ.
pub fn compare_generations(
    a: &dyn GenerationAccess,
    b: &dyn GenerationAccess,
) -> Option<CellDivergence> {
    assert_eq!(a.dims(), b.dims(), "generations have different dimensions");
    let grid = a.grid();
    a.steps()
        .iter()
        .zip(b.steps())
        .position(|(l, r)| l != r)
        .map(|index| CellDivergence {
            coord: grid.coord(index),
            left: a.steps()[index],
            right: b.steps()[index],
        })
}
