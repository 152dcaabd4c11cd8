use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("Target '{id}' is already part of the fleet.")]
    DuplicateTarget { id: String },
    #[error("All 256 addresses under {prefix}.x are taken.")]
    AddressSpaceExhausted { prefix: String },
}
