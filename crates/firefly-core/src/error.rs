//! Configuration errors.
//!
//! The engine is a closed computation: once a simulation is built, a
//! step cannot fail. Every user-facing failure is therefore a
//! configuration error, reported at construction or argument parsing.

use std::error::Error;
use std::fmt;

/// Errors detected while building or configuring a simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid dimension is zero.
    InvalidDimensions {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A grid dimension, or the cell count, exceeds what the grid can index.
    DimensionTooLarge {
        /// Which quantity overflowed.
        name: &'static str,
        /// The offending value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
    /// Unknown neighbourhood name.
    InvalidNeighbourhood {
        /// The string that failed to parse.
        value: String,
    },
    /// Step limit is negative or not an integer.
    InvalidStepLimit {
        /// The string that failed to parse.
        value: String,
    },
    /// An explicit step value lies outside `[0, 9]`.
    StepOutOfRange {
        /// The offending value.
        value: u8,
    },
    /// An explicit initial generation has the wrong number of cells.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::InvalidNeighbourhood { value } => write!(
                f,
                "unknown neighbourhood '{value}' (expected moore, vonneumann or random)"
            ),
            Self::InvalidStepLimit { value } => {
                write!(f, "step limit must be a non-negative integer, got '{value}'")
            }
            Self::StepOutOfRange { value } => {
                write!(f, "step {value} outside [0, 9]")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} step values, got {actual}")
            }
        }
    }
}

impl Error for ConfigError {}
