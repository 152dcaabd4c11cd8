//! Paced, non-overlapping load test scheduling.
//!
//! The driver is a plain state machine; the session controller owns the
//! timer and the network call, and reports back after each dispatch. The
//! next tick is scheduled from the moment a dispatch finishes, so each
//! interval also absorbs the latency of the request before it.
mod run;


use tokio::time::Instant;

use crate::domain::{LoadDuration, RatePerSecond};
use crate::error::LoadTestError;

pub use run::{LoadTestRun, RunState};

/// What the controller should do when a scheduled tick fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDecision {
    /// No run is active.
    Idle,
    /// Issue exactly one request, then call `finish_dispatch`.
    Dispatch,
    /// The run reached a terminal state on this tick.
    Finished(RunState),
}

#[derive(Debug, Default)]
pub struct LoadTestDriver {
    state: RunState,
    next_tick: Option<Instant>,
    in_flight: bool,
}

impl LoadTestDriver {
    /// Starts a new run; the first tick is due immediately.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRunning` while another run is active.
    pub fn start(
        &mut self,
        rate: RatePerSecond,
        duration: LoadDuration,
        now: Instant,
    ) -> Result<LoadTestRun, LoadTestError> {
        if let RunState::Running(run) = &self.state {
            return Err(LoadTestError::AlreadyRunning {
                issued: run.issued(),
                target: run.target_count(),
            });
        }
        let run = LoadTestRun::new(rate, duration);
        self.state = RunState::Running(run);
        self.next_tick = Some(now);
        self.in_flight = false;
        Ok(run)
    }

    /// Requests cooperative cancellation; checked at the top of the next tick.
    ///
    /// Returns `false` when no run is active.
    pub const fn cancel(&mut self) -> bool {
        match &mut self.state {
            RunState::Running(run) => {
                run.mark_cancelled();
                true
            }
            RunState::Idle | RunState::Completed(_) | RunState::Cancelled(_) => false,
        }
    }

    /// When the next tick is due, if a run is active and nothing is in flight.
    #[must_use]
    pub const fn next_tick(&self) -> Option<Instant> {
        if self.in_flight {
            return None;
        }
        match self.state {
            RunState::Running(_) => self.next_tick,
            RunState::Idle | RunState::Completed(_) | RunState::Cancelled(_) => None,
        }
    }

    /// Top-of-tick check.
    pub const fn begin_tick(&mut self) -> TickDecision {
        let run = match self.state {
            RunState::Running(run) => run,
            RunState::Idle | RunState::Completed(_) | RunState::Cancelled(_) => {
                return TickDecision::Idle;
            }
        };
        if self.in_flight {
            return TickDecision::Idle;
        }
        if run.is_cancelled() {
            return self.finish(RunState::Cancelled(run));
        }
        if run.is_complete() {
            return self.finish(RunState::Completed(run));
        }
        self.in_flight = true;
        self.next_tick = None;
        TickDecision::Dispatch
    }

    /// Records a finished dispatch and schedules the next tick one interval
    /// after `now`, or at `now` once cancellation is pending.
    ///
    /// Returns the terminal state when this dispatch completed the run. A
    /// run that reaches its target count is `Completed` even if cancellation
    /// arrived while the last request was in flight.
    pub fn finish_dispatch(&mut self, now: Instant) -> Option<RunState> {
        if !self.in_flight {
            return None;
        }
        self.in_flight = false;
        let RunState::Running(run) = &mut self.state else {
            return None;
        };
        run.record_issued();
        if run.is_complete() {
            let finished = RunState::Completed(*run);
            self.state = finished;
            self.next_tick = None;
            return Some(finished);
        }
        self.next_tick = if run.is_cancelled() {
            Some(now)
        } else {
            now.checked_add(run.interval()).or(Some(now))
        };
        None
    }

    #[must_use]
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }

    const fn finish(&mut self, state: RunState) -> TickDecision {
        self.state = state;
        self.next_tick = None;
        TickDecision::Finished(state)
    }
}
