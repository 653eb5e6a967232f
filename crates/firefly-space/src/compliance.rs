//! Neighbourhood compliance test helpers.
//!
//! These functions verify the invariants every connectivity must satisfy
//! on a given grid. Reused by the connectivity and adjacency test modules.

use crate::adjacency::Adjacency;
use crate::connectivity::Connectivity;
use crate::grid2d::Grid2D;
use firefly_core::Coord;

/// Expected neighbour count from the cell's position class.
pub fn expected_degree(grid: &Grid2D, at: Coord, conn: Connectivity) -> usize {
    let rows_free = |x: u32| usize::from(x > 0) + usize::from(x + 1 < grid.rows());
    let cols_free = |y: u32| usize::from(y > 0) + usize::from(y + 1 < grid.cols());
    let vertical = rows_free(at.x);
    let horizontal = cols_free(at.y);
    match conn {
        Connectivity::VonNeumann => vertical + horizontal,
        // Each diagonal needs a free step on both axes.
        Connectivity::Moore => vertical + horizontal + vertical * horizontal,
    }
}

/// Every neighbour lies inside the grid and is not the cell itself.
pub fn assert_neighbours_in_bounds(grid: &Grid2D, conn: Connectivity) {
    for at in grid.canonical_ordering() {
        for nb in conn.neighbours(grid, at) {
            assert!(grid.contains(nb), "{nb} outside grid (from {at})");
            assert_ne!(nb, at, "self-loop at {at}");
        }
    }
}

/// `b in N(a)` implies `a in N(b)` when every cell shares one connectivity.
pub fn assert_neighbours_symmetric(grid: &Grid2D, conn: Connectivity) {
    for at in grid.canonical_ordering() {
        for nb in conn.neighbours(grid, at) {
            assert!(
                conn.neighbours(grid, nb).contains(&at),
                "{nb} in N({at}) but {at} not in N({nb})"
            );
        }
    }
}

/// Corner / edge / interior counts match the position class.
pub fn assert_degrees(grid: &Grid2D, conn: Connectivity) {
    for at in grid.canonical_ordering() {
        let got = conn.neighbours(grid, at).len();
        let want = expected_degree(grid, at, conn);
        assert_eq!(got, want, "degree at {at} under {conn:?}");
    }
}

/// Two calls return the same sequence, and the flat table agrees with it.
pub fn assert_deterministic(grid: &Grid2D, conn: Connectivity) {
    let table = Adjacency::build(grid, vec![conn; grid.cell_count()]);
    for at in grid.canonical_ordering() {
        let a = conn.neighbours(grid, at);
        let b = conn.neighbours(grid, at);
        assert_eq!(a, b, "non-deterministic neighbours at {at}");
        let flat: Vec<Coord> = table
            .neighbours(grid.index(at))
            .iter()
            .map(|&i| grid.coord(i as usize))
            .collect();
        assert_eq!(flat.as_slice(), a.as_slice(), "adjacency disagrees at {at}");
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(grid: &Grid2D, conn: Connectivity) {
    assert_neighbours_in_bounds(grid, conn);
    assert_neighbours_symmetric(grid, conn);
    assert_degrees(grid, conn);
    assert_deterministic(grid, conn);
}
