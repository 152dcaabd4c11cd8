use std::net::Ipv4Addr;

use serde::Serialize;

use crate::error::ValidationError;

/// Normalized, dotted-quad-shaped fleet member identifier.
///
/// The same normalization is applied to ids the balancer sends back, so
/// `matches` is the only comparison the fleet ever needs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Parses and normalizes a target id.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not four dot-separated octets.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_key(raw);
        normalized
            .parse::<Ipv4Addr>()
            .map(|addr| Self(addr.to_string()))
            .map_err(|_err| ValidationError::InvalidTargetId {
                value: raw.to_owned(),
            })
    }

    #[must_use]
    pub fn from_octets(prefix: [u8; 3], last: u8) -> Self {
        let [a, b, c] = prefix;
        Self(Ipv4Addr::new(a, b, c, last).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a raw id using the fleet's key normalization.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        normalize_key(raw) == self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TargetId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetId::parse(s)
    }
}

pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// One fleet member and its mirrored counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub(super) id: TargetId,
    pub(super) request_count: u64,
    pub(super) is_last_selected: bool,
}

impl Target {
    pub(super) const fn new(id: TargetId) -> Self {
        Self {
            id,
            request_count: 0,
            is_last_selected: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &TargetId {
        &self.id
    }

    #[must_use]
    pub const fn request_count(&self) -> u64 {
        self.request_count
    }

    #[must_use]
    pub const fn is_last_selected(&self) -> bool {
        self.is_last_selected
    }
}
