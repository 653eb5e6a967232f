//! Firefly: a cellular automaton whose cells learn to flash in unison.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all firefly sub-crates. For most users, adding `firefly` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use firefly::prelude::*;
//!
//! let mut sim = new_simulation(10, 10, NeighbourhoodKind::Moore, Some(42)).unwrap();
//! let outcome = sim.run(2500);
//! assert_eq!(outcome.halt, HaltReason::Synchronized);
//!
//! for cell in sim.snapshot().iter() {
//!     assert_eq!(cell.step, sim.snapshot().get(0, 0));
//!     assert_eq!(cell.phase, cell.step.phase());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `firefly-core` | `Step`, `Phase`, `NeighbourhoodKind`, `Coord`, `ConfigError` |
//! | [`space`] | `firefly-space` | Grid geometry, connectivity, adjacency tables |
//! | [`arena`] | `firefly-arena` | Double-buffered storage, `Snapshot`, `OwnedSnapshot` |
//! | [`engine`] | `firefly-engine` | `Simulation`, driver loop, batch experiments |
//! | [`replay`] | `firefly-replay` | Generation digests and trace comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`firefly-core`).
///
/// [`types::Step`] is the bounded phase counter every cell carries.
pub use firefly_core as types;

/// Grid geometry and neighbourhoods (`firefly-space`).
///
/// [`space::Grid2D`] for bounds and indexing, [`space::Connectivity`] for
/// the Moore and Von Neumann offset tables, [`space::Adjacency`] for the
/// precomputed neighbour table.
pub use firefly_space as space;

/// Generation storage (`firefly-arena`).
///
/// Most users only need [`arena::Snapshot`] and [`arena::OwnedSnapshot`]
/// from this module; they are also available in the [`prelude`].
pub use firefly_arena as arena;

/// The simulation engine (`firefly-engine`).
pub use firefly_engine as engine;

/// Determinism checks (`firefly-replay`).
///
/// Hash generations with [`replay::generation_digest`], record runs with
/// [`replay::Trace`], and compare them with [`replay::compare_traces`].
pub use firefly_replay as replay;

/// Common imports for typical firefly usage.
///
/// ```rust
/// use firefly::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use firefly_core::{ConfigError, Coord, NeighbourhoodKind, Phase, Step};

    // Space
    pub use firefly_space::Connectivity;

    // Arena snapshots
    pub use firefly_arena::{CellView, GenerationAccess, OwnedSnapshot, Snapshot};

    // Engine
    pub use firefly_engine::{
        new_simulation, Experiment, ExperimentReport, HaltReason, PrepareMode, RunOutcome,
        SimConfig, Simulation, StepMetrics,
    };
}
