use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::CirculateArgs;
use crate::domain::{LoadDuration, RatePerSecond};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::fleet::TargetId;
use crate::membership::IdPrefix;

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid(field: &'static str) -> impl FnOnce(ValidationError) -> AppError {
    move |source| AppError::config(ConfigError::InvalidField { field, source })
}

/// Applies configuration values to CLI arguments.
///
/// Only options the command line left at their defaults are overwritten.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut CirculateArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "balancer_url")
        && let Some(url) = config.balancer_url.clone()
    {
        args.balancer_url = url;
    }

    if !is_cli(matches, "rate")
        && let Some(rate) = config.rate
    {
        args.rate = RatePerSecond::clamped(u64::try_from(rate).unwrap_or(0));
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration.as_ref()
    {
        let duration = duration.to_duration().map_err(invalid("duration"))?;
        args.duration = LoadDuration::try_from(duration).map_err(invalid("duration"))?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(invalid("timeout"))?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration().map_err(invalid("connect_timeout"))?;
    }

    if !is_cli(matches, "targets")
        && let Some(targets) = config.targets.as_ref()
    {
        args.targets = targets
            .iter()
            .map(|raw| TargetId::parse(raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid("targets"))?;
    }

    if !is_cli(matches, "id_prefix")
        && let Some(prefix) = config.id_prefix.as_deref()
    {
        args.id_prefix = prefix.parse::<IdPrefix>().map_err(invalid("id_prefix"))?;
    }

    if !is_cli(matches, "algorithm")
        && let Some(algorithm) = config.algorithm
    {
        args.algorithm = algorithm;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    Ok(())
}
