//! The per-cell update rule.

use firefly_core::Step;

/// Next step of a cell given its current step and whether any neighbour
/// is flashing in the current generation.
///
/// A charging cell that sees a flash restarts its cycle at 0. Every other
/// cell ignores its neighbours and advances, wrapping 9 to 0.
#[inline]
pub fn next_step(current: Step, neighbour_flashing: bool) -> Step {
    if current.is_charging() && neighbour_flashing {
        Step::ZERO
    } else {
        current.advance()
    }
}

/// `true` if any of `neighbours` (cell indices into `generation`) is at
/// step 9.
#[inline]
pub fn any_flashing(generation: &[Step], neighbours: &[u32]) -> bool {
    neighbours
        .iter()
        .any(|&n| generation[n as usize].is_flashing())
}
