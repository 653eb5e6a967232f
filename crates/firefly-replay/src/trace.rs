//! Checkpoint traces.

use firefly_arena::GenerationAccess;
use firefly_core::NeighbourhoodKind;
use firefly_engine::Simulation;
use tracing::debug;

use crate::error::ReplayError;
use crate::hash::{generation_digest, Digest};

/// Digest of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    /// Tick of the hashed generation.
    pub tick: u64,
    /// SHA-256 of its row-major step bytes.
    pub digest: Digest,
}

/// Digests of a run at selected ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// Seed of the recorded simulation.
    pub seed: u64,
    /// `(rows, cols)`.
    pub dims: (u32, u32),
    /// Neighbourhood kind of the recorded simulation.
    pub neighbourhood: NeighbourhoodKind,
    /// Checkpoints in increasing tick order.
    pub checkpoints: Vec<Checkpoint>,
}

impl Trace {
    /// Step `sim` forward, capturing a digest at each tick in `checkpoints`.
    ///
    /// Checkpoints must be strictly increasing and not before the current
    /// tick; the current tick itself is allowed. The simulation keeps
    /// stepping after synchronization, so late checkpoints are still
    /// recorded. On return `sim` sits at the last checkpoint.
    pub fn record(sim: &mut Simulation, checkpoints: &[u64]) -> Result<Self, ReplayError> {
        let seed = sim.seed();
        let dims = sim.dims();
        let neighbourhood = sim.neighbourhood();
        let recorded = record_by(
            sim,
            |s| s.tick_count(),
            |s| generation_digest(&s.snapshot()),
            |s| {
                s.step();
            },
            checkpoints,
        )?;
        Ok(Self {
            seed,
            dims,
            neighbourhood,
            checkpoints: recorded,
        })
    }

    /// Capture checkpoints from any stepping source.
    ///
    /// `step` must advance `source` by exactly one tick. Used to trace
    /// reference steppers that are not a [`Simulation`].
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `step` leaves the tick unchanged.
    pub fn record_with<G, F>(
        source: &mut G,
        mut step: F,
        checkpoints: &[u64],
    ) -> Result<Vec<Checkpoint>, ReplayError>
    where
        G: GenerationAccess,
        F: FnMut(&mut G),
    {
        record_by(
            source,
            |g| g.tick(),
            |g| generation_digest(g),
            |g| step(g),
            checkpoints,
        )
    }

    /// Digest at `tick`, if it was recorded.
    pub fn digest_at(&self, tick: u64) -> Option<&Digest> {
        self.checkpoints
            .iter()
            .find(|c| c.tick == tick)
            .map(|c| &c.digest)
    }

    /// The recorded ticks.
    pub fn ticks(&self) -> Vec<u64> {
        self.checkpoints.iter().map(|c| c.tick).collect()
    }
}

fn validate(checkpoints: &[u64], start: u64) -> Result<(), ReplayError> {
    let first = *checkpoints.first().ok_or(ReplayError::EmptyCheckpoints)?;
    if first < start {
        return Err(ReplayError::CheckpointBehind {
            checkpoint: first,
            tick: start,
        });
    }
    for pair in checkpoints.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ReplayError::CheckpointsNotIncreasing {
                previous: pair[0],
                next: pair[1],
            });
        }
    }
    Ok(())
}

fn record_by<S: ?Sized>(
    source: &mut S,
    tick: impl Fn(&S) -> u64,
    digest: impl Fn(&S) -> Digest,
    mut step: impl FnMut(&mut S),
    checkpoints: &[u64],
) -> Result<Vec<Checkpoint>, ReplayError> {
    let start = tick(source);
    validate(checkpoints, start)?;
    let mut recorded = Vec::with_capacity(checkpoints.len());
    for &target in checkpoints {
        while tick(source) < target {
            let before = tick(source);
            step(source);
            debug_assert!(
                tick(source) > before,
                "step did not advance the tick past {before}"
            );
        }
        let checkpoint = Checkpoint {
            tick: target,
            digest: digest(source),
        };
        debug!(tick = target, "checkpoint recorded");
        recorded.push(checkpoint);
    }
    Ok(recorded)
}
