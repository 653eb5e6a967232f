//! Test fixtures for firefly development.
//!
//! Provides literal-grid helpers ([`flatten`], [`GridFixture`]) for the
//! hand-checked scenarios, and a [`NaiveStepper`] that updates cells in
//! place. The naive stepper exists to prove that the two-phase update
//! matters: seeded runs must diverge from it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{flatten, GridFixture, NaiveStepper};
