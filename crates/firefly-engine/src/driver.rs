//! Driver loop: step until synchronization, a step limit, or cancellation.

use std::fmt;
use std::ops::ControlFlow;

use tracing::{debug, info};

use crate::simulation::Simulation;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// Every cell shares its step with all of its neighbours.
    Synchronized,
    /// The step limit was reached first.
    StepLimit,
    /// The observer asked to stop.
    Cancelled,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synchronized => write!(f, "synchronized"),
            Self::StepLimit => write!(f, "step limit"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of [`Simulation::run`] or [`Simulation::run_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Tick at which synchronization was detected, if it was.
    pub synced_at: Option<u64>,
    /// Tick count when the run stopped.
    pub final_tick: u64,
    /// Why the run stopped.
    pub halt: HaltReason,
}

impl Simulation {
    /// Step until synchronized or until `step_limit` steps have been taken.
    ///
    /// A `step_limit` of 0 means no limit.
    pub fn run(&mut self, step_limit: u64) -> RunOutcome {
        self.run_with(step_limit, |_| ControlFlow::Continue(()))
    }

    /// Like [`run`](Self::run), calling `observer` after every committed
    /// step.
    ///
    /// Synchronization is checked before each step, so a generation that is
    /// already synchronized halts without stepping. The limit counts steps
    /// taken by this call, not the absolute tick. Returning
    /// [`ControlFlow::Break`] from the observer stops the run between steps.
    pub fn run_with<F>(&mut self, step_limit: u64, mut observer: F) -> RunOutcome
    where
        F: FnMut(&Simulation) -> ControlFlow<()>,
    {
        debug!(step_limit, start_tick = self.tick_count(), "run started");
        let mut taken: u64 = 0;
        loop {
            if self.is_synchronized() {
                let tick = self.tick_count();
                info!(tick, "synchronized");
                return RunOutcome {
                    synced_at: Some(tick),
                    final_tick: tick,
                    halt: HaltReason::Synchronized,
                };
            }
            if step_limit > 0 && taken >= step_limit {
                let tick = self.tick_count();
                info!(tick, step_limit, "step limit reached without synchronizing");
                return RunOutcome {
                    synced_at: None,
                    final_tick: tick,
                    halt: HaltReason::StepLimit,
                };
            }
            self.step();
            taken += 1;
            if observer(self).is_break() {
                let tick = self.tick_count();
                info!(tick, "run cancelled");
                return RunOutcome {
                    synced_at: self.is_synchronized().then_some(tick),
                    final_tick: tick,
                    halt: HaltReason::Cancelled,
                };
            }
        }
    }
}
