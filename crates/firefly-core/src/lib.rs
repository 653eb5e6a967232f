//! Core types for the firefly synchronization automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-cell phase counter ([`Step`]) and its derived [`Phase`], the
//! [`NeighbourhoodKind`] configuration value, grid coordinates, and the
//! [`ConfigError`] type shared by every layer above.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod kind;
pub mod step;

pub use coord::Coord;
pub use error::ConfigError;
pub use kind::NeighbourhoodKind;
pub use step::{Phase, Step};
