//! Neighbourhood selection for a simulation.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which cells count as a firefly's neighbours.
///
/// `Random` is resolved once per cell at construction (fair coin between
/// Moore and Von Neumann) and stays fixed for the grid's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NeighbourhoodKind {
    /// 8-connected: cardinal and diagonal.
    #[default]
    Moore,
    /// 4-connected: cardinal only.
    VonNeumann,
    /// Per-cell coin flip between the two.
    Random,
}

impl FromStr for NeighbourhoodKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moore" => Ok(Self::Moore),
            "vonneumann" | "von-neumann" | "von_neumann" => Ok(Self::VonNeumann),
            "random" => Ok(Self::Random),
            _ => Err(ConfigError::InvalidNeighbourhood {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NeighbourhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moore => write!(f, "moore"),
            Self::VonNeumann => write!(f, "vonneumann"),
            Self::Random => write!(f, "random"),
        }
    }
}
