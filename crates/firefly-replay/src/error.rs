//! Error types for trace recording.

use std::error::Error;
use std::fmt;

/// Errors that can occur while recording a [`Trace`](crate::Trace).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// No checkpoints were requested.
    EmptyCheckpoints,
    /// Checkpoints must be strictly increasing.
    CheckpointsNotIncreasing {
        /// The earlier checkpoint.
        previous: u64,
        /// The checkpoint that did not exceed it.
        next: u64,
    },
    /// A checkpoint lies before the simulation's current tick.
    CheckpointBehind {
        /// The requested checkpoint.
        checkpoint: u64,
        /// Tick of the simulation when recording started.
        tick: u64,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCheckpoints => write!(f, "no checkpoints requested"),
            Self::CheckpointsNotIncreasing { previous, next } => write!(
                f,
                "checkpoints must be strictly increasing, got {next} after {previous}"
            ),
            Self::CheckpointBehind { checkpoint, tick } => write!(
                f,
                "checkpoint {checkpoint} is before the current tick {tick}"
            ),
        }
    }
}

impl Error for ReplayError {}
