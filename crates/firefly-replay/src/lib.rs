//! Determinism checks for firefly simulations.
//!
//! Records SHA-256 digests of selected generations and compares them
//! between runs. Nothing is written to disk; a [`Trace`] lives only as
//! long as the process.
//!
//! # Architecture
//!
//! - [`generation_digest`] hashes the row-major step bytes of a generation
//! - [`Trace`] steps a simulation and captures `(tick, digest)` checkpoints
//! - [`compare_traces`] and [`compare_generations`] locate the first
//!   divergence between two runs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod trace;

pub use compare::{
    compare_generations, compare_traces, CellDivergence, DivergenceKind, DivergenceReport,
};
pub use error::ReplayError;
pub use hash::{generation_digest, hex, Digest};
pub use trace::{Checkpoint, Trace};
