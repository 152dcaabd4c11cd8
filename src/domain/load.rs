use std::num::NonZeroU64;
use std::time::Duration;

use crate::error::ValidationError;

/// Lowest accepted requests-per-second setting.
pub const MIN_RATE_PER_SECOND: u32 = 1;
/// Highest accepted requests-per-second setting.
pub const MAX_RATE_PER_SECOND: u32 = 100;
/// Length of a load test when nothing else is configured.
pub const DEFAULT_LOAD_DURATION_SECS: u64 = 10;

/// Requests per second for a load test, always within 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatePerSecond(u32);

impl RatePerSecond {
    /// Clamps any operator input into the accepted range.
    #[must_use]
    pub fn clamped(value: u64) -> Self {
        let bounded = value.clamp(
            u64::from(MIN_RATE_PER_SECOND),
            u64::from(MAX_RATE_PER_SECOND),
        );
        Self(u32::try_from(bounded).unwrap_or(MAX_RATE_PER_SECOND))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Pause between the end of one request and the start of the next.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_secs(1)
            .checked_div(self.0)
            .unwrap_or(Duration::from_secs(1))
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self::clamped(u64::from(self.0).saturating_add(1))
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self::clamped(u64::from(self.0).saturating_sub(1))
    }
}

impl Default for RatePerSecond {
    fn default() -> Self {
        Self(MIN_RATE_PER_SECOND)
    }
}

impl std::fmt::Display for RatePerSecond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RatePerSecond {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        Ok(Self::clamped(u64::try_from(value).unwrap_or(0)))
    }
}

/// Length of a load test in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadDuration(NonZeroU64);

impl LoadDuration {
    #[must_use]
    pub const fn secs(self) -> u64 {
        self.0.get()
    }

}

impl Default for LoadDuration {
    fn default() -> Self {
        Self(NonZeroU64::MIN.saturating_add(DEFAULT_LOAD_DURATION_SECS.saturating_sub(1)))
    }
}

impl TryFrom<u64> for LoadDuration {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(LoadDuration)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl TryFrom<Duration> for LoadDuration {
    type Error = ValidationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.subsec_nanos() != 0 {
            return Err(ValidationError::DurationNotWholeSeconds {
                value: format!("{:?}", value),
            });
        }
        LoadDuration::try_from(value.as_secs())
    }
}

impl std::fmt::Display for LoadDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    #[test]
    fn rate_is_clamped_into_range() -> AppResult<()> {
        let cases = [(0, 1), (1, 1), (42, 42), (100, 100), (5_000, 100)];
        for (input, expected) in cases {
            let rate = RatePerSecond::clamped(input);
            if rate.get() != expected {
                return Err(AppError::validation(format!(
                    "clamped({}) = {}, expected {}",
                    input,
                    rate.get(),
                    expected
                )));
            }
        }
        Ok(())
    }

    #[test]
    fn negative_rate_text_clamps_to_minimum() -> AppResult<()> {
        let rate: RatePerSecond = "-7".parse()?;
        if rate.get() != MIN_RATE_PER_SECOND {
            return Err(AppError::validation("expected minimum rate"));
        }
        Ok(())
    }

    #[test]
    fn interval_divides_one_second() -> AppResult<()> {
        if RatePerSecond::clamped(5).interval() != Duration::from_millis(200) {
            return Err(AppError::validation("unexpected interval for rate 5"));
        }
        if RatePerSecond::clamped(1).interval() != Duration::from_secs(1) {
            return Err(AppError::validation("unexpected interval for rate 1"));
        }
        Ok(())
    }

    #[test]
    fn rate_steps_saturate_at_bounds() -> AppResult<()> {
        if RatePerSecond::clamped(100).increment().get() != 100 {
            return Err(AppError::validation("increment passed the maximum"));
        }
        if RatePerSecond::clamped(1).decrement().get() != 1 {
            return Err(AppError::validation("decrement passed the minimum"));
        }
        Ok(())
    }

    #[test]
    fn default_duration_is_ten_seconds() -> AppResult<()> {
        if LoadDuration::default().secs() != DEFAULT_LOAD_DURATION_SECS {
            return Err(AppError::validation("unexpected default duration"));
        }
        if LoadDuration::try_from(0_u64).is_ok() {
            return Err(AppError::validation("zero duration must be rejected"));
        }
        Ok(())
    }

    #[test]
    fn fractional_seconds_are_rejected() -> AppResult<()> {
        let fractional = LoadDuration::try_from(Duration::from_millis(1_500));
        if !matches!(fractional, Err(ValidationError::DurationNotWholeSeconds { .. })) {
            return Err(AppError::validation(format!(
                "1.5s must be rejected, got {:?}",
                fractional
            )));
        }
        if LoadDuration::try_from(Duration::from_millis(2_000))?.secs() != 2 {
            return Err(AppError::validation("2000ms must be two seconds"));
        }
        Ok(())
    }
}
