//! Fresh target ids and best-effort registration with the balancer.
mod generator;


use rand::Rng;
use tracing::{info, warn};

use crate::balancer::Balancer;
use crate::error::{BalancerError, FleetError};
use crate::fleet::{Fleet, TargetId};
use crate::results::ResultLog;

pub use generator::{DEFAULT_ID_PREFIX, IdGenerator, IdPrefix};

/// Adds a freshly generated target locally, then announces it remotely.
///
/// The local fleet is authoritative for rendering: a failed registration is
/// logged and the target stays.
///
/// # Errors
///
/// Returns `AddressSpaceExhausted` when every suffix under the prefix is
/// taken. Registration failures never surface here.
pub async fn add_target<B, R>(
    fleet: &mut Fleet,
    log: &mut ResultLog,
    balancer: &B,
    generator: &IdGenerator,
    rng: &mut R,
) -> Result<TargetId, FleetError>
where
    B: Balancer + ?Sized,
    R: Rng + ?Sized,
{
    let id = generator.generate(fleet, rng)?;
    fleet.add_target(id.clone())?;
    info!(target_id = %id, "added target to fleet");

    if let Err(err) = balancer.register_target(&id).await {
        warn!("Failed to register {} with the balancer: {}", id, err);
        log.push(registration_failed_line(&id, &err));
    }
    Ok(id)
}

#[must_use]
pub fn registration_failed_line(id: &TargetId, error: &BalancerError) -> String {
    format!("Registration of {} failed: {}", id, error.cause())
}
