use std::time::Duration;

use crate::domain::{LoadDuration, RatePerSecond};
use crate::error::{AppError, AppResult, ValidationError};
use crate::fleet::TargetId;
use crate::membership::IdPrefix;

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Out-of-range rates are clamped, never rejected.
pub(super) fn parse_rate(s: &str) -> AppResult<RatePerSecond> {
    s.parse::<RatePerSecond>().map_err(AppError::from)
}

pub(crate) fn parse_load_duration(s: &str) -> AppResult<LoadDuration> {
    let duration = parse_duration_arg(s)?;
    LoadDuration::try_from(duration).map_err(AppError::validation)
}

pub(super) fn parse_target_id(s: &str) -> AppResult<TargetId> {
    TargetId::parse(s).map_err(AppError::from)
}

pub(super) fn parse_id_prefix(s: &str) -> AppResult<IdPrefix> {
    s.parse::<IdPrefix>().map_err(AppError::from)
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration(s).map_err(AppError::from)
}

/// Parses `<number>[ms|s|m|h]`; a bare number means seconds.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let duration = match unit_part.trim() {
        "ms" => Duration::from_millis(number),
        "" | "s" => Duration::from_secs(number),
        "m" => Duration::from_secs(
            number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?,
        ),
        "h" => Duration::from_secs(
            number
                .checked_mul(3_600)
                .ok_or(ValidationError::DurationOverflow)?,
        ),
        other => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: other.to_owned(),
            });
        }
    };

    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }
    Ok(duration)
}
