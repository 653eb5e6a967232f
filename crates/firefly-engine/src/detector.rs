//! Synchronization detection.

use firefly_core::Step;
use firefly_space::Adjacency;

/// `true` iff every cell has the same step as every one of its neighbours.
///
/// Cells with no neighbours are vacuously in sync, so a 1x1 grid is always
/// synchronized. Under `Random` connectivity each cell is checked against
/// its own neighbour list.
pub fn is_synchronized(generation: &[Step], adjacency: &Adjacency) -> bool {
    debug_assert_eq!(generation.len(), adjacency.len());
    generation.iter().enumerate().all(|(index, &step)| {
        adjacency
            .neighbours(index)
            .iter()
            .all(|&n| generation[n as usize] == step)
    })
}

/// Number of cells with at least one neighbour on a different step.
pub fn out_of_sync_cells(generation: &[Step], adjacency: &Adjacency) -> usize {
    generation
        .iter()
        .enumerate()
        .filter(|&(index, &step)| {
            adjacency
                .neighbours(index)
                .iter()
                .any(|&n| generation[n as usize] != step)
        })
        .count()
}
