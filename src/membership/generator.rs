use std::collections::BTreeSet;

use rand::Rng;

use crate::error::{FleetError, ValidationError};
use crate::fleet::{Fleet, TargetId};

/// Prefix generated addresses are handed out from by default.
pub const DEFAULT_ID_PREFIX: IdPrefix = IdPrefix([192, 168, 1]);

/// First three octets shared by generated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPrefix([u8; 3]);

impl IdPrefix {
    #[must_use]
    pub const fn octets(self) -> [u8; 3] {
        self.0
    }
}

impl Default for IdPrefix {
    fn default() -> Self {
        DEFAULT_ID_PREFIX
    }
}

impl std::fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}.{}.{}", a, b, c)
    }
}

impl std::str::FromStr for IdPrefix {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidIdPrefix {
            value: s.to_owned(),
        };
        let trimmed = s.trim().trim_end_matches('.');
        let mut octets = [0_u8; 3];
        let mut parts = trimmed.split('.');
        for slot in &mut octets {
            *slot = parts
                .next()
                .and_then(|part| part.parse::<u8>().ok())
                .ok_or_else(invalid)?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(octets))
    }
}

/// Picks random, unused fourth octets under a fixed prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    prefix: IdPrefix,
}

impl IdGenerator {
    #[must_use]
    pub const fn new(prefix: IdPrefix) -> Self {
        Self { prefix }
    }

    #[must_use]
    pub const fn prefix(&self) -> IdPrefix {
        self.prefix
    }

    /// Draws uniformly from 0..=255 until the candidate is not in the fleet.
    ///
    /// # Errors
    ///
    /// Returns `AddressSpaceExhausted` when all 256 suffixes are taken.
    pub fn generate<R>(&self, fleet: &Fleet, rng: &mut R) -> Result<TargetId, FleetError>
    where
        R: Rng + ?Sized,
    {
        let taken: BTreeSet<&str> = fleet.ids().map(TargetId::as_str).collect();
        let octets = self.prefix.octets();
        let free = (0..=u8::MAX)
            .filter(|last| !taken.contains(TargetId::from_octets(octets, *last).as_str()))
            .count();
        if free == 0 {
            return Err(FleetError::AddressSpaceExhausted {
                prefix: self.prefix.to_string(),
            });
        }
        loop {
            let candidate = TargetId::from_octets(octets, rng.gen_range(0..=u8::MAX));
            if !taken.contains(candidate.as_str()) {
                return Ok(candidate);
            }
        }
    }
}
