//! The only code path that talks to the external balancing service.
mod client;
mod wire;

#[cfg(test)]
pub(crate) mod test_support;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::Algorithm;
use crate::error::BalancerError;
use crate::fleet::TargetId;

pub use client::{BalancerSettings, HttpBalancer};

/// Point-in-time answer to one synthetic request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub selected_id: String,
    pub message: String,
    pub counts_by_id: BTreeMap<String, u64>,
}

#[async_trait]
pub trait Balancer: Send + Sync {
    /// Issues one synthetic request and returns the balancer's stats.
    ///
    /// # Errors
    ///
    /// Returns `BalancerError::Dispatch` on transport or protocol failure.
    async fn send_request(&self) -> Result<Snapshot, BalancerError>;

    /// Switches the balancer's active algorithm.
    ///
    /// # Errors
    ///
    /// Returns `BalancerError::Configuration` when the switch is not confirmed.
    async fn set_algorithm(&self, algorithm: Algorithm) -> Result<(), BalancerError>;

    /// Announces a new fleet member.
    ///
    /// # Errors
    ///
    /// Returns `BalancerError::Registration` when the announcement fails.
    async fn register_target(&self, id: &TargetId) -> Result<(), BalancerError>;
}
