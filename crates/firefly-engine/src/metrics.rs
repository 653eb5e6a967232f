//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and rule activity for a single step,
//! for hosts that want to display or log progress.

/// Timing and activity collected during a single step.
///
/// All durations are in microseconds. The engine overwrites these fields
/// on each `step()` call; consumers read them from the most recent step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent computing the next generation, in microseconds.
    pub prepare_us: u64,
    /// Time spent publishing the next generation, in microseconds.
    pub commit_us: u64,
    /// Charging cells pulled back to step 0 by a flashing neighbour.
    pub resets: usize,
    /// Cells at step 9 in the generation that was read.
    pub flashing: usize,
}
