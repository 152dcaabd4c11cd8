use std::time::Duration;

use crate::domain::{LoadDuration, RatePerSecond};

/// One bounded campaign of paced requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTestRun {
    rate: RatePerSecond,
    duration: LoadDuration,
    issued: u64,
    target_count: u64,
    cancelled: bool,
}

impl LoadTestRun {
    #[must_use]
    pub fn new(rate: RatePerSecond, duration: LoadDuration) -> Self {
        Self {
            rate,
            duration,
            issued: 0,
            target_count: u64::from(rate.get()).saturating_mul(duration.secs()),
            cancelled: false,
        }
    }

    #[must_use]
    pub const fn rate(&self) -> RatePerSecond {
        self.rate
    }

    #[must_use]
    pub const fn duration(&self) -> LoadDuration {
        self.duration
    }

    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }

    #[must_use]
    pub const fn target_count(&self) -> u64 {
        self.target_count
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.issued >= self.target_count
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.rate.interval()
    }

    pub(super) const fn record_issued(&mut self) {
        self.issued = self.issued.saturating_add(1);
    }

    pub(super) const fn mark_cancelled(&mut self) {
        self.cancelled = true;
    }

    /// Integer percentage of the run that has been issued.
    #[must_use]
    pub fn percent(&self) -> u16 {
        if self.target_count == 0 {
            return 100;
        }
        let scaled = u128::from(self.issued.min(self.target_count))
            .saturating_mul(100)
            .checked_div(u128::from(self.target_count))
            .unwrap_or(0);
        u16::try_from(scaled).unwrap_or(100)
    }
}

/// Lifecycle of the driver: `Idle -> Running -> {Completed, Cancelled}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running(LoadTestRun),
    Completed(LoadTestRun),
    Cancelled(LoadTestRun),
}

impl RunState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running(_) => "running",
            RunState::Completed(_) => "completed",
            RunState::Cancelled(_) => "cancelled",
        }
    }

    #[must_use]
    pub const fn run(&self) -> Option<&LoadTestRun> {
        match self {
            RunState::Idle => None,
            RunState::Running(run) | RunState::Completed(run) | RunState::Cancelled(run) => {
                Some(run)
            }
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, RunState::Running(_))
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed(_) | RunState::Cancelled(_))
    }
}
