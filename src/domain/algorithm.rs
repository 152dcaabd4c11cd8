use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Balancing strategy the remote service can be switched to.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    #[value(name = "round_robin", alias = "round-robin")]
    RoundRobin,
    #[value(name = "random")]
    Random,
    #[value(name = "least_connections", alias = "least-connections")]
    LeastConnections,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::RoundRobin,
        Algorithm::Random,
        Algorithm::LeastConnections,
    ];

    /// Path segment used by `set_algorithm/{name}`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "round_robin",
            Algorithm::Random => "random",
            Algorithm::LeastConnections => "least_connections",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "round robin",
            Algorithm::Random => "random",
            Algorithm::LeastConnections => "least connections",
        }
    }

    /// Keyboard shortcut index in the dashboard (1-based).
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            Algorithm::RoundRobin => '1',
            Algorithm::Random => '2',
            Algorithm::LeastConnections => '3',
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownAlgorithm {
                value: s.to_owned(),
            })
    }
}
