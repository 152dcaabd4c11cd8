use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Algorithm;
use crate::error::{BalancerError, CallFailure};
use crate::fleet::TargetId;

use super::{Balancer, Snapshot};

/// In-memory round-robin balancer with failure injection.
pub(crate) struct StubBalancer {
    state: Mutex<StubState>,
    latency: Duration,
}

#[derive(Default)]
struct StubState {
    ips: Vec<String>,
    counts: BTreeMap<String, u64>,
    cursor: usize,
    algorithm: Algorithm,
    dispatch_calls: u64,
    failing_dispatches: BTreeSet<u64>,
    reject_configuration: bool,
    reject_registration: bool,
    static_rotation: bool,
    registered: Vec<String>,
}

impl StubBalancer {
    pub(crate) fn new(ips: &[&str]) -> Self {
        let ips: Vec<String> = ips.iter().map(|ip| (*ip).to_owned()).collect();
        let counts = ips.iter().map(|ip| (ip.clone(), 0)).collect();
        Self {
            state: Mutex::new(StubState {
                ips,
                counts,
                ..StubState::default()
            }),
            latency: Duration::ZERO,
        }
    }

    pub(crate) const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes the given 1-based dispatch calls fail.
    pub(crate) fn failing_dispatches(self, calls: &[u64]) -> Self {
        self.state().failing_dispatches = calls.iter().copied().collect();
        self
    }

    pub(crate) fn rejecting_configuration(self) -> Self {
        self.state().reject_configuration = true;
        self
    }

    pub(crate) fn rejecting_registration(self) -> Self {
        self.state().reject_registration = true;
        self
    }

    /// Registered targets are recorded but never selected.
    pub(crate) fn with_static_rotation(self) -> Self {
        self.state().static_rotation = true;
        self
    }

    pub(crate) fn dispatch_calls(&self) -> u64 {
        self.state().dispatch_calls
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.state().algorithm
    }

    pub(crate) fn registered(&self) -> Vec<String> {
        self.state().registered.clone()
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn rejected(message: &str) -> CallFailure {
    CallFailure::Rejected {
        message: message.to_owned(),
    }
}

#[async_trait]
impl Balancer for StubBalancer {
    async fn send_request(&self) -> Result<Snapshot, BalancerError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let mut state = self.state();
        state.dispatch_calls = state.dispatch_calls.saturating_add(1);
        if state.failing_dispatches.contains(&state.dispatch_calls) {
            return Err(BalancerError::Dispatch {
                cause: rejected("injected failure"),
            });
        }
        let len = state.ips.len();
        let ip = state
            .cursor
            .checked_rem(len)
            .and_then(|idx| state.ips.get(idx).cloned())
            .ok_or_else(|| BalancerError::Dispatch {
                cause: rejected("no targets"),
            })?;
        state.cursor = state.cursor.saturating_add(1);
        let count = state.counts.entry(ip.clone()).or_insert(0);
        *count = count.saturating_add(1);
        Ok(Snapshot {
            selected_id: ip,
            message: "circulate".to_owned(),
            counts_by_id: state.counts.clone(),
        })
    }

    async fn set_algorithm(&self, algorithm: Algorithm) -> Result<(), BalancerError> {
        let mut state = self.state();
        if state.reject_configuration {
            return Err(BalancerError::Configuration {
                algorithm: algorithm.as_str().to_owned(),
                cause: rejected("switch refused"),
            });
        }
        state.algorithm = algorithm;
        Ok(())
    }

    async fn register_target(&self, id: &TargetId) -> Result<(), BalancerError> {
        let mut state = self.state();
        if state.reject_registration {
            return Err(BalancerError::Registration {
                id: id.as_str().to_owned(),
                cause: rejected("registration refused"),
            });
        }
        let ip = id.as_str().to_owned();
        if !state.static_rotation && !state.ips.contains(&ip) {
            state.ips.push(ip.clone());
            state.counts.insert(ip.clone(), 0);
        }
        state.registered.push(ip);
        Ok(())
    }
}
