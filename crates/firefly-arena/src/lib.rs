//! Generation storage for the firefly automaton.
//!
//! [`PingPongBuffer`] owns two generation buffers. During a tick the
//! published buffer is read-only and the staging buffer is write-only;
//! [`TickGuard::publish`] swaps their roles. Because the guard holds the
//! only mutable borrow of the arena, a commit can never interleave with a
//! prepare.
//!
//! [`Snapshot`] borrows the published generation for rendering and
//! inspection; [`OwnedSnapshot`] copies it out for hosts that need to keep
//! it past the next step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pingpong;
pub mod read;

pub use pingpong::{PingPongBuffer, TickGuard};
pub use read::{CellView, Cells, GenerationAccess, OwnedSnapshot, Snapshot};
