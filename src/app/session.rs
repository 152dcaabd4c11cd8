use crate::domain::{Algorithm, LoadDuration, RatePerSecond};
use crate::error::AppResult;
use crate::fleet::{DEFAULT_TARGETS, Fleet, TargetId};
use crate::results::ResultLog;

/// Everything the operator sees, owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub fleet: Fleet,
    pub results: ResultLog,
    /// Last algorithm the balancer confirmed.
    pub algorithm: Algorithm,
    pub rate: RatePerSecond,
    pub duration: LoadDuration,
}

impl Session {
    #[must_use]
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            results: ResultLog::default(),
            algorithm: Algorithm::default(),
            rate: RatePerSecond::default(),
            duration: LoadDuration::default(),
        }
    }

    /// Session seeded with the three stock targets.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stock ids fail to parse.
    pub fn with_default_targets() -> AppResult<Self> {
        let ids = DEFAULT_TARGETS
            .iter()
            .map(|raw| TargetId::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(Fleet::with_targets(ids)?))
    }

    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub const fn with_rate(mut self, rate: RatePerSecond) -> Self {
        self.rate = rate;
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, duration: LoadDuration) -> Self {
        self.duration = duration;
        self
    }
}
