//! Moore and Von Neumann neighbourhoods.

use crate::grid2d::Grid2D;
use firefly_core::Coord;
use smallvec::SmallVec;

/// Moore offsets `(dx, dy)`: N, NE, E, SE, S, SW, W, NW.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Von Neumann offsets `(dx, dy)`: N, E, S, W.
const VON_NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// The connectivity resolved for a single cell.
///
/// Unlike [`NeighbourhoodKind`](firefly_core::NeighbourhoodKind) this has
/// no `Random` variant: by the time a cell has a `Connectivity` the coin
/// has already been flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// 8-connected.
    Moore,
    /// 4-connected.
    VonNeumann,
}

impl Connectivity {
    /// Offsets in deterministic order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Moore => &MOORE_OFFSETS,
            Self::VonNeumann => &VON_NEUMANN_OFFSETS,
        }
    }

    /// Neighbour count of an interior cell.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// In-bounds neighbours of `at`, in offset order.
    ///
    /// Offsets leaving the grid are dropped. `SmallVec<[Coord; 8]>` never
    /// spills for either neighbourhood.
    pub fn neighbours(self, grid: &Grid2D, at: Coord) -> SmallVec<[Coord; 8]> {
        self.offsets()
            .iter()
            .filter_map(|&(dx, dy)| at.offset(dx, dy))
            .filter(|c| grid.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: u32, y: u32) -> Coord {
        Coord::new(x, y)
    }

    // ── Moore ───────────────────────────────────────────────────

    #[test]
    fn moore_interior() {
        let g = Grid2D::new(5, 5).unwrap();
        assert_eq!(Connectivity::Moore.neighbours(&g, c(2, 2)).len(), 8);
    }

    #[test]
    fn moore_corner() {
        let g = Grid2D::new(5, 5).unwrap();
        let n = Connectivity::Moore.neighbours(&g, c(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn moore_edge() {
        let g = Grid2D::new(5, 5).unwrap();
        assert_eq!(Connectivity::Moore.neighbours(&g, c(0, 2)).len(), 5);
    }

    #[test]
    fn moore_order_follows_compass() {
        let g = Grid2D::new(3, 3).unwrap();
        let n = Connectivity::Moore.neighbours(&g, c(1, 1));
        assert_eq!(
            n.as_slice(),
            &[
                c(1, 0),
                c(2, 0),
                c(2, 1),
                c(2, 2),
                c(1, 2),
                c(0, 2),
                c(0, 1),
                c(0, 0),
            ]
        );
    }

    // ── Von Neumann ─────────────────────────────────────────────

    #[test]
    fn von_neumann_counts() {
        let g = Grid2D::new(5, 5).unwrap();
        let vn = Connectivity::VonNeumann;
        assert_eq!(vn.neighbours(&g, c(0, 0)).len(), 2);
        assert_eq!(vn.neighbours(&g, c(0, 2)).len(), 3);
        assert_eq!(vn.neighbours(&g, c(2, 2)).len(), 4);
    }

    #[test]
    fn von_neumann_order() {
        let g = Grid2D::new(3, 3).unwrap();
        let n = Connectivity::VonNeumann.neighbours(&g, c(1, 1));
        assert_eq!(n.as_slice(), &[c(1, 0), c(2, 1), c(1, 2), c(0, 1)]);
    }

    // ── 1×1 and thin grids ─────────────────────────────────────

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid2D::new(1, 1).unwrap();
        assert!(Connectivity::Moore.neighbours(&g, c(0, 0)).is_empty());
        assert!(Connectivity::VonNeumann.neighbours(&g, c(0, 0)).is_empty());
    }

    #[test]
    fn single_row() {
        let g = Grid2D::new(1, 4).unwrap();
        assert_eq!(Connectivity::Moore.neighbours(&g, c(0, 1)).len(), 2);
        assert_eq!(Connectivity::VonNeumann.neighbours(&g, c(0, 0)).len(), 1);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_moore() {
        let g = Grid2D::new(6, 7).unwrap();
        compliance::run_full_compliance(&g, Connectivity::Moore);
    }

    #[test]
    fn compliance_von_neumann() {
        let g = Grid2D::new(6, 7).unwrap();
        compliance::run_full_compliance(&g, Connectivity::VonNeumann);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_connectivity() -> impl Strategy<Value = Connectivity> {
        prop_oneof![Just(Connectivity::Moore), Just(Connectivity::VonNeumann)]
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 1u32..10,
            cols in 1u32..10,
            conn in arb_connectivity(),
            x in 0u32..10, y in 0u32..10,
        ) {
            let g = Grid2D::new(rows, cols).unwrap();
            let at = c(x % rows, y % cols);
            for nb in conn.neighbours(&g, at) {
                prop_assert!(
                    conn.neighbours(&g, nb).contains(&at),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, at,
                );
            }
        }

        #[test]
        fn neighbours_are_adjacent_and_distinct(
            rows in 1u32..10,
            cols in 1u32..10,
            conn in arb_connectivity(),
            x in 0u32..10, y in 0u32..10,
        ) {
            let g = Grid2D::new(rows, cols).unwrap();
            let at = c(x % rows, y % cols);
            let n = conn.neighbours(&g, at);
            prop_assert!(n.len() <= conn.degree());
            for nb in &n {
                prop_assert!(g.contains(*nb));
                prop_assert_ne!(*nb, at);
                prop_assert!(nb.x.abs_diff(at.x) <= 1 && nb.y.abs_diff(at.y) <= 1);
            }
            let mut dedup = n.to_vec();
            dedup.sort();
            dedup.dedup();
            prop_assert_eq!(dedup.len(), n.len());
        }
    }
}
