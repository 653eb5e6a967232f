//! Grid topology for the firefly automaton.
//!
//! Neighbours are never stored as references between cells. They are
//! derived from coordinates: [`Connectivity`] knows the offset tables,
//! [`Grid2D`] knows the bounds, and [`Adjacency`] flattens the result into
//! a table keyed by cell index so the stepper can read neighbour indices
//! without recomputing them every tick.
//!
//! # Boundaries
//!
//! There is no wrap-around. Offsets that leave the grid are dropped, so
//! corner and edge cells have fewer neighbours than interior cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod assign;
pub mod connectivity;
pub mod error;
pub mod grid2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::Adjacency;
pub use assign::assign_connectivity;
pub use connectivity::Connectivity;
pub use error::SpaceError;
pub use grid2d::Grid2D;
