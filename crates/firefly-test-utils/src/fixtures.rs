//! Literal grids and a single-buffered reference stepper.

use firefly_arena::GenerationAccess;
use firefly_core::Step;
use firefly_space::{Adjacency, Grid2D};

/// Flatten nested rows into row-major values.
///
/// # Panics
///
/// Panics if the rows are ragged.
pub fn flatten(rows: &[&[u8]]) -> Vec<u8> {
    let width = rows.first().map_or(0, |r| r.len());
    assert!(rows.iter().all(|r| r.len() == width), "ragged fixture rows");
    rows.iter().flat_map(|r| r.iter().copied()).collect()
}

/// A grid written out row by row.
///
/// ```
/// use firefly_test_utils::GridFixture;
///
/// let g = GridFixture::new(&[&[0, 0], &[0, 9]]);
/// assert_eq!((g.rows, g.cols), (2, 2));
/// assert_eq!(g.values, vec![0, 0, 0, 9]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridFixture {
    pub rows: u32,
    pub cols: u32,
    pub values: Vec<u8>,
}

impl GridFixture {
    pub fn new(rows: &[&[u8]]) -> Self {
        let values = flatten(rows);
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        Self {
            rows: height,
            cols: width,
            values,
        }
    }

    /// A `rows x cols` grid with every cell at `value`.
    pub fn uniform(rows: u32, cols: u32, value: u8) -> Self {
        Self {
            rows,
            cols,
            values: vec![value; rows as usize * cols as usize],
        }
    }

    /// Split back into rows for readable assertions.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.values
            .chunks(self.cols as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }
}

/// Single-buffered stepper that writes each cell's next value back into
/// the grid before visiting the next cell.
///
/// Later cells in row-major order therefore see earlier cells' `t+1`
/// values. This is the defect the engine's ping-pong buffer prevents;
/// regression tests run both and require the trajectories to differ.
#[derive(Clone, Debug)]
pub struct NaiveStepper {
    grid: Grid2D,
    adjacency: Adjacency,
    steps: Vec<Step>,
    tick: u64,
}

impl NaiveStepper {
    /// Start from `steps` on `grid` with the given neighbour table.
    ///
    /// # Panics
    ///
    /// Panics if the sizes disagree.
    pub fn new(grid: Grid2D, adjacency: Adjacency, steps: Vec<Step>) -> Self {
        assert_eq!(steps.len(), grid.cell_count(), "steps do not cover the grid");
        assert_eq!(adjacency.len(), grid.cell_count(), "adjacency does not cover the grid");
        Self {
            grid,
            adjacency,
            steps,
            tick: 0,
        }
    }

    /// Update every cell in place, row-major.
    pub fn step(&mut self) {
        for index in 0..self.steps.len() {
            let current = self.steps[index];
            let flash_seen = self
                .adjacency
                .neighbours(index)
                .iter()
                .any(|&n| self.steps[n as usize].is_flashing());
            self.steps[index] = if current.is_charging() && flash_seen {
                Step::ZERO
            } else {
                current.advance()
            };
        }
        self.tick += 1;
    }
}

impl GenerationAccess for NaiveStepper {
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
