use crate::domain::{Algorithm, LoadDuration, RatePerSecond};
use crate::driver::RunState;

/// Newest log entries handed to the renderer on every publish.
pub const LOG_VIEW_CAPACITY: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetView {
    pub id: String,
    pub request_count: u64,
    pub is_last_selected: bool,
    /// Counter movement caused by the most recent merge.
    pub delta: u64,
}

/// Read-only snapshot of the session published to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub balancer_url: String,
    pub targets: Vec<TargetView>,
    pub total_requests: u64,
    pub algorithm: Algorithm,
    pub rate: RatePerSecond,
    pub duration: LoadDuration,
    pub run_state: RunState,
    pub log_tail: Vec<String>,
    pub log_len: usize,
    pub status: Option<String>,
    pub no_color: bool,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            balancer_url: String::new(),
            targets: Vec::new(),
            total_requests: 0,
            algorithm: Algorithm::default(),
            rate: RatePerSecond::default(),
            duration: LoadDuration::default(),
            run_state: RunState::Idle,
            log_tail: Vec::new(),
            log_len: 0,
            status: None,
            no_color: false,
        }
    }
}

impl DashboardData {
    /// Share of all requests handled by `target`, in whole percent.
    #[must_use]
    pub fn share_percent(&self, target: &TargetView) -> u16 {
        if self.total_requests == 0 {
            return 0;
        }
        let scaled = u128::from(target.request_count)
            .saturating_mul(100)
            .checked_div(u128::from(self.total_requests))
            .unwrap_or(0);
        u16::try_from(scaled.min(100)).unwrap_or(100)
    }

    #[must_use]
    pub fn last_selected(&self) -> Option<&TargetView> {
        self.targets.iter().find(|target| target.is_last_selected)
    }
}
