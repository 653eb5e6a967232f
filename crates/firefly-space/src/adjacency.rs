//! Precomputed flat adjacency table.

use crate::connectivity::Connectivity;
use crate::grid2d::Grid2D;

/// Neighbour indices for every cell, keyed by row-major cell index.
///
/// Stored compressed: `neighbours[offsets[i]..offsets[i + 1]]` are the
/// neighbours of cell `i`, in the order [`Connectivity::neighbours`]
/// yields them. Built once per grid; the connectivity of each cell is
/// kept alongside so hosts can inspect it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency {
    offsets: Vec<u32>,
    neighbours: Vec<u32>,
    connectivity: Vec<Connectivity>,
}

impl Adjacency {
    /// Build the table from a per-cell connectivity assignment.
    ///
    /// # Panics
    ///
    /// Panics if `per_cell.len() != grid.cell_count()`.
    pub fn build(grid: &Grid2D, per_cell: Vec<Connectivity>) -> Self {
        assert_eq!(
            per_cell.len(),
            grid.cell_count(),
            "connectivity assignment does not cover the grid"
        );
        let mut offsets = Vec::with_capacity(per_cell.len() + 1);
        let mut neighbours = Vec::with_capacity(per_cell.len() * 8);
        offsets.push(0);
        for (index, conn) in per_cell.iter().enumerate() {
            let at = grid.coord(index);
            neighbours.extend(
                conn.neighbours(grid, at)
                    .into_iter()
                    .map(|nb| grid.index(nb) as u32),
            );
            // Grid2D::MAX_CELLS keeps this within u32.
            debug_assert!(u32::try_from(neighbours.len()).is_ok());
            offsets.push(neighbours.len() as u32);
        }
        Self {
            offsets,
            neighbours,
            connectivity: per_cell,
        }
    }

    /// Build a table where every cell has the same connectivity.
    pub fn uniform(grid: &Grid2D, conn: Connectivity) -> Self {
        Self::build(grid, vec![conn; grid.cell_count()])
    }

    /// Neighbour indices of cell `index`.
    #[inline]
    pub fn neighbours(&self, index: usize) -> &[u32] {
        let lo = self.offsets[index] as usize;
        let hi = self.offsets[index + 1] as usize;
        &self.neighbours[lo..hi]
    }

    /// Connectivity assigned to cell `index`.
    pub fn connectivity(&self, index: usize) -> Connectivity {
        self.connectivity[index]
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.connectivity.len()
    }

    /// Always `false` for a table built from a valid grid.
    pub fn is_empty(&self) -> bool {
        self.connectivity.is_empty()
    }

    /// Largest neighbour count of any cell.
    pub fn max_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| (w[1] - w[0]) as usize)
            .max()
            .unwrap_or(0)
    }
}
