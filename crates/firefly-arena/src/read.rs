//! Read-only views of a published generation.
//!
//! [`Snapshot`] borrows from a [`crate::PingPongBuffer`]; [`OwnedSnapshot`]
//! owns a copy. Both implement [`GenerationAccess`], which is what
//! renderers, digests, and detectors consume.

use firefly_core::{Coord, Phase, Step};
use firefly_space::Grid2D;

/// One cell as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    /// Cell position.
    pub coord: Coord,
    /// Current phase counter.
    pub step: Step,
    /// Phase derived from `step`.
    pub phase: Phase,
}

/// Uniform read access to a generation, borrowed or owned.
pub trait GenerationAccess {
    /// Grid dimensions.
    fn grid(&self) -> Grid2D;

    /// Tick at which this generation was current.
    fn tick(&self) -> u64;

    /// All steps in row-major order.
    fn steps(&self) -> &[Step];

    /// `(rows, cols)`.
    fn dims(&self) -> (u32, u32) {
        self.grid().dims()
    }

    /// Step of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    fn get(&self, x: u32, y: u32) -> Step {
        let grid = self.grid();
        let coord = Coord::new(x, y);
        assert!(
            grid.contains(coord),
            "{coord} outside {}x{} grid",
            grid.rows(),
            grid.cols()
        );
        self.steps()[grid.index(coord)]
    }

    /// Cells in row-major order.
    fn iter(&self) -> Cells<'_> {
        Cells {
            grid: self.grid(),
            steps: self.steps(),
            index: 0,
        }
    }

    /// Row-major byte encoding of the steps, one byte per cell.
    fn to_bytes(&self) -> Vec<u8> {
        self.steps().iter().map(|s| s.get()).collect()
    }
}

/// Row-major iterator over [`CellView`]s.
#[derive(Clone, Debug)]
pub struct Cells<'a> {
    grid: Grid2D,
    steps: &'a [Step],
    index: usize,
}

impl Iterator for Cells<'_> {
    type Item = CellView;

    fn next(&mut self) -> Option<CellView> {
        let step = *self.steps.get(self.index)?;
        let coord = self.grid.coord(self.index);
        self.index += 1;
        Some(CellView {
            coord,
            step,
            phase: step.phase(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.steps.len() - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Cells<'_> {}

/// A read-only view of the published generation.
///
/// # Lifetime
///
/// `'a` is the borrow of the owning simulation. Stepping requires
/// `&mut`, so the borrow checker guarantees a snapshot never observes a
/// generation being written.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    grid: Grid2D,
    steps: &'a [Step],
    tick: u64,
}

impl<'a> Snapshot<'a> {
    /// Wrap a published buffer.
    ///
    /// # Panics
    ///
    /// Panics if `steps.len()` does not match the grid.
    pub fn new(grid: Grid2D, steps: &'a [Step], tick: u64) -> Self {
        assert_eq!(steps.len(), grid.cell_count(), "snapshot size mismatch");
        Self { grid, steps, tick }
    }

    /// Copy into an [`OwnedSnapshot`].
    pub fn to_owned(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            grid: self.grid,
            steps: self.steps.to_vec(),
            tick: self.tick,
        }
    }
}

impl GenerationAccess for Snapshot<'_> {
    fn grid(&self) -> Grid2D {
        self.grid
    }

    fn tick(&self) -> u64 {
        self.tick
    }

    fn steps(&self) -> &[Step] {
        self.steps
    }
}

/// An owned copy of a generation.
///
/// `Send + Sync`, so a host can hand it to a render thread while the
/// simulation keeps stepping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedSnapshot {
    grid: Grid2D,
    steps: Vec<Step>,
    tick: u64,
}

impl OwnedSnapshot {
    /// Borrow as a [`Snapshot`].
    pub fn as_snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            steps: &self.steps,
            tick: self.tick,
        }
    }
}

impl GenerationAccess for OwnedSnapshot {
    fn grid(&self) -> Grid2D {
        self.grid
    }

    fn tick(&self) -> u64 {
        self.tick
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(values: &[u8]) -> Vec<Step> {
        values.iter().map(|&v| Step::new(v).unwrap()).collect()
    }

    #[test]
    fn get_is_row_major() {
        let grid = Grid2D::new(2, 3).unwrap();
        let data = steps(&[0, 1, 2, 3, 4, 9]);
        let snap = Snapshot::new(grid, &data, 7);
        assert_eq!(snap.get(0, 2).get(), 2);
        assert_eq!(snap.get(1, 0).get(), 3);
        assert_eq!(snap.get(1, 2).get(), 9);
        assert_eq!(snap.tick(), 7);
        assert_eq!(snap.dims(), (2, 3));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn get_out_of_bounds_panics() {
        let grid = Grid2D::new(2, 2).unwrap();
        let data = steps(&[0; 4]);
        let _ = Snapshot::new(grid, &data, 0).get(2, 0);
    }

    #[test]
    fn cells_carry_phase() {
        let grid = Grid2D::new(1, 3).unwrap();
        let data = steps(&[2, 7, 9]);
        let snap = Snapshot::new(grid, &data, 0);
        let cells: Vec<CellView> = snap.iter().collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].phase, Phase::Charging);
        assert_eq!(cells[1].phase, Phase::NonSensitive);
        assert_eq!(cells[2].phase, Phase::Flash);
        assert_eq!(cells[2].coord, Coord::new(0, 2));
        assert_eq!(snap.iter().len(), 3);
    }

    #[test]
    fn bytes_match_steps() {
        let grid = Grid2D::new(2, 2).unwrap();
        let data = steps(&[9, 0, 5, 6]);
        assert_eq!(Snapshot::new(grid, &data, 0).to_bytes(), vec![9, 0, 5, 6]);
    }

    #[test]
    fn owned_snapshot_matches_borrowed() {
        let grid = Grid2D::new(2, 2).unwrap();
        let data = steps(&[1, 2, 3, 4]);
        let snap = Snapshot::new(grid, &data, 3);
        let owned = snap.to_owned();
        assert_eq!(owned.steps(), snap.steps());
        assert_eq!(owned.tick(), 3);
        assert_eq!(owned.as_snapshot().to_bytes(), snap.to_bytes());
    }

    #[test]
    fn owned_snapshot_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OwnedSnapshot>();
    }
}
