//! Double-buffered ping-pong generation storage.
//!
//! [`PingPongBuffer`] maintains two equally sized step buffers (A and B)
//! that alternate between "staging" (writable) and "published"
//! (readable) roles. The lifecycle per tick is:
//!
//! 1. `begin_tick()`: borrow the arena as a [`TickGuard`]
//! 2. `TickGuard::buffers()`: read generation `t`, write generation `t+1`
//! 3. `TickGuard::publish()`: swap roles, advance the generation counter
//!
//! Dropping the guard without publishing discards the staged generation
//! and leaves the published one untouched.

use firefly_core::Step;

/// Exclusive access to the arena for the duration of one tick.
///
/// Holds the only mutable borrow of the [`PingPongBuffer`], so no
/// snapshot can observe a half-written generation and no second tick can
/// start until this one is published or abandoned.
#[must_use = "a staged generation is discarded unless published"]
pub struct TickGuard<'a> {
    arena: &'a mut PingPongBuffer,
}

impl TickGuard<'_> {
    /// `(published, staging)`: generation `t` to read, `t+1` to fill.
    ///
    /// The staging buffer still holds generation `t-1`; every cell must be
    /// overwritten before publishing.
    pub fn buffers(&mut self) -> (&[Step], &mut [Step]) {
        let arena = &mut *self.arena;
        if arena.b_is_staging {
            (arena.buffer_a.as_slice(), arena.buffer_b.as_mut_slice())
        } else {
            (arena.buffer_b.as_slice(), arena.buffer_a.as_mut_slice())
        }
    }

    /// Make the staging buffer the published generation.
    pub fn publish(self) {
        self.arena.b_is_staging = !self.arena.b_is_staging;
        self.arena.generation += 1;
    }
}

/// Double-buffered generation storage.
///
/// # Buffer layout
///
/// ```text
/// buffer_a: Vec<Step>  ←─── staging (even generations) / published (odd)
/// buffer_b: Vec<Step>  ←─── published (even generations) / staging (odd)
/// ```
#[derive(Clone, Debug)]
pub struct PingPongBuffer {
    buffer_a: Vec<Step>,
    buffer_b: Vec<Step>,
    /// Which buffer is currently staging (false = A staging, true = B staging).
    b_is_staging: bool,
    /// Number of publishes since construction or the last reset.
    generation: u64,
}

impl PingPongBuffer {
    /// Create an arena whose published generation is `initial`.
    pub fn new(initial: Vec<Step>) -> Self {
        let staging = vec![Step::ZERO; initial.len()];
        Self {
            buffer_a: staging,
            buffer_b: initial,
            b_is_staging: false,
            generation: 0,
        }
    }

    /// Borrow the arena for one tick.
    pub fn begin_tick(&mut self) -> TickGuard<'_> {
        TickGuard { arena: self }
    }

    /// The current published generation.
    pub fn published(&self) -> &[Step] {
        if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Publishes since construction or the last [`reset`](Self::reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cells per generation.
    pub fn len(&self) -> usize {
        self.buffer_a.len()
    }

    /// `true` if the arena holds zero cells.
    pub fn is_empty(&self) -> bool {
        self.buffer_a.is_empty()
    }

    /// Replace the published generation and zero the generation counter.
    ///
    /// # Panics
    ///
    /// Panics if `initial` has a different length than the arena.
    pub fn reset(&mut self, initial: Vec<Step>) {
        assert_eq!(initial.len(), self.len(), "reset changes the cell count");
        self.buffer_b = initial;
        self.buffer_a.fill(Step::ZERO);
        self.b_is_staging = false;
        self.generation = 0;
    }
}
