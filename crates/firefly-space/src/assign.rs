//! Resolve a [`NeighbourhoodKind`] into a per-cell connectivity.

use crate::connectivity::Connectivity;
use firefly_core::NeighbourhoodKind;
use rand::Rng;

/// Assign a [`Connectivity`] to each of `cell_count` cells.
///
/// `Moore` and `VonNeumann` are uniform and consume no randomness.
/// `Random` draws one uniform real per cell in row-major order and rounds
/// it: 0 selects Moore, 1 selects Von Neumann. The draw count is fixed so
/// that callers sharing `rng` with other initialization stay reproducible.
pub fn assign_connectivity<R: Rng + ?Sized>(
    kind: NeighbourhoodKind,
    cell_count: usize,
    rng: &mut R,
) -> Vec<Connectivity> {
    match kind {
        NeighbourhoodKind::Moore => vec![Connectivity::Moore; cell_count],
        NeighbourhoodKind::VonNeumann => vec![Connectivity::VonNeumann; cell_count],
        NeighbourhoodKind::Random => (0..cell_count)
            .map(|_| {
                // round(u) == 0 exactly when u < 0.5
                if rng.random::<f64>() < 0.5 {
                    Connectivity::Moore
                } else {
                    Connectivity::VonNeumann
                }
            })
            .collect(),
    }
}
