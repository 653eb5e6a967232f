//! Rectangular grid dimensions and row-major indexing.

use crate::error::SpaceError;
use firefly_core::Coord;

/// Dimensions of a rectangular `rows x cols` grid.
///
/// Cells are addressed by [`Coord`] (`x` = row, `y` = column) or by a flat
/// row-major index `x * cols + y`. The cell count is capped at
/// [`MAX_CELLS`](Self::MAX_CELLS) so adjacency tables can store both
/// neighbour indices and neighbour-list offsets as `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid2D {
    rows: u32,
    cols: u32,
}

impl Grid2D {
    /// Largest supported cell count: at most 8 neighbours per cell must
    /// still index a `u32` adjacency table.
    pub const MAX_CELLS: u64 = u32::MAX as u64 / 8;

    /// Create a grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if the cell count exceeds
    /// [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace { rows, cols });
        }
        let cells = u64::from(rows) * u64::from(cols);
        if cells > Self::MAX_CELLS {
            return Err(SpaceError::DimensionTooLarge {
                name: "cell count",
                value: cells,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.rows && coord.y < self.cols
    }

    /// Row-major index of an in-bounds coordinate.
    ///
    /// Out-of-bounds coordinates are a programmer error; this is checked
    /// in debug builds only. Use [`try_index`](Self::try_index) for
    /// untrusted input.
    #[inline]
    pub fn index(&self, coord: Coord) -> usize {
        debug_assert!(
            self.contains(coord),
            "{coord} outside {}x{} grid",
            self.rows,
            self.cols
        );
        (coord.x as usize) * (self.cols as usize) + (coord.y as usize)
    }

    /// Row-major index, or `None` if the coordinate is out of bounds.
    pub fn try_index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| self.index(coord))
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coord(&self, index: usize) -> Coord {
        debug_assert!(index < self.cell_count(), "index {index} out of range");
        let cols = self.cols as usize;
        Coord::new((index / cols) as u32, (index % cols) as u32)
    }

    /// All cells in row-major order: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |x| (0..self.cols).map(move |y| Coord::new(x, y)))
    }
}
