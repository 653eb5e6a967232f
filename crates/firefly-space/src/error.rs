//! Error types for grid construction.

use firefly_core::ConfigError;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// The cell count does not fit the index type.
    DimensionTooLarge {
        /// Which quantity overflowed.
        name: &'static str,
        /// The offending value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace { rows, cols } => {
                write!(f, "space must have at least one cell, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::EmptySpace { rows, cols } => ConfigError::InvalidDimensions { rows, cols },
            SpaceError::DimensionTooLarge { name, value, max } => {
                ConfigError::DimensionTooLarge { name, value, max }
            }
        }
    }
}
