use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_load_duration};
use super::test_support::parse_test_args;
use super::{Command, DEFAULT_BALANCER_URL};
use crate::domain::Algorithm;
use crate::error::{AppError, AppResult};

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["circulate"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);
    let expected_url = std::env::var("CIRCULATE_BALANCER_URL")
        .unwrap_or_else(|_| DEFAULT_BALANCER_URL.to_owned());

    let checks = [
        (args.command.is_none(), "Expected no subcommand"),
        (args.balancer_url == expected_url, "Unexpected balancer_url"),
        (args.rate.get() == 1, "Unexpected rate"),
        (args.duration.secs() == 10, "Unexpected duration"),
        (
            args.request_timeout == Duration::from_secs(10),
            "Unexpected request_timeout",
        ),
        (
            args.connect_timeout == Duration::from_secs(5),
            "Unexpected connect_timeout",
        ),
        (args.targets.is_empty(), "Expected no explicit targets"),
        (
            args.id_prefix.to_string() == "192.168.1",
            "Unexpected id_prefix",
        ),
        (
            args.algorithm == Algorithm::RoundRobin,
            "Unexpected algorithm",
        ),
        (args.config.is_none(), "Expected config to be None"),
        (args.no_color == expected_no_color, "Unexpected no_color default"),
        (!args.verbose, "Expected verbose to be false"),
        (!args.no_ui, "Expected no_ui to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn rate_is_clamped_not_rejected() -> AppResult<()> {
    for (raw, expected) in [("0", 1), ("250", 100), ("-3", 1), ("42", 42)] {
        let args = parse_test_args(["circulate", "--rate", raw])?;
        if args.rate.get() != expected {
            return Err(AppError::validation(format!(
                "--rate {} gave {}, expected {}",
                raw,
                args.rate.get(),
                expected
            )));
        }
    }
    Ok(())
}

#[test]
fn rate_must_be_numeric() -> AppResult<()> {
    if parse_test_args(["circulate", "--rate", "fast"]).is_ok() {
        return Err(AppError::validation("non-numeric rate must be rejected"));
    }
    Ok(())
}

#[test]
fn load_test_subcommand_takes_global_options() -> AppResult<()> {
    let args = parse_test_args([
        "circulate",
        "load-test",
        "--rate",
        "5",
        "--duration",
        "2",
        "-u",
        "http://127.0.0.1:9/api",
    ])?;
    if args.command != Some(Command::LoadTest) {
        return Err(AppError::validation("Expected load-test subcommand"));
    }
    if args.rate.get() != 5 || args.duration.secs() != 2 {
        return Err(AppError::validation("Unexpected load-test pacing"));
    }
    if args.balancer_url != "http://127.0.0.1:9/api" {
        return Err(AppError::validation("Unexpected balancer url"));
    }
    Ok(())
}

#[test]
fn set_algorithm_accepts_wire_names_and_aliases() -> AppResult<()> {
    let cases = [
        ("round_robin", Algorithm::RoundRobin),
        ("least-connections", Algorithm::LeastConnections),
        ("random", Algorithm::Random),
    ];
    for (raw, expected) in cases {
        let args = parse_test_args(["circulate", "set-algorithm", raw])?;
        if !matches!(args.command, Some(Command::SetAlgorithm { name }) if name == expected) {
            return Err(AppError::validation(format!(
                "unexpected command for {}: {:?}",
                raw, args.command
            )));
        }
    }
    if parse_test_args(["circulate", "set-algorithm", "weighted"]).is_ok() {
        return Err(AppError::validation("unknown algorithm must be rejected"));
    }
    Ok(())
}

#[test]
fn targets_are_normalized_and_repeatable() -> AppResult<()> {
    let args = parse_test_args([
        "circulate",
        "--target",
        " 10.0.0.1 ",
        "--target",
        "10.0.0.2",
        "--id-prefix",
        "10.0.0",
    ])?;
    let ids: Vec<&str> = args.targets.iter().map(|id| id.as_str()).collect();
    if ids != ["10.0.0.1", "10.0.0.2"] {
        return Err(AppError::validation(format!("unexpected targets {:?}", ids)));
    }
    if args.id_prefix.octets() != [10, 0, 0] {
        return Err(AppError::validation("unexpected id prefix"));
    }
    if parse_test_args(["circulate", "--target", "10.0.0.300"]).is_ok() {
        return Err(AppError::validation("out-of-range octet must be rejected"));
    }
    Ok(())
}

#[test]
fn duration_arg_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3_600)),
    ];
    for (raw, expected) in cases {
        let parsed = parse_duration_arg(raw)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "{} parsed as {:?}",
                raw, parsed
            )));
        }
    }
    for raw in ["", "s", "5d", "0", "0ms"] {
        if parse_duration_arg(raw).is_ok() {
            return Err(AppError::validation(format!("'{}' must be rejected", raw)));
        }
    }
    Ok(())
}

#[test]
fn load_duration_needs_a_whole_second() -> AppResult<()> {
    if parse_load_duration("1m")?.secs() != 60 {
        return Err(AppError::validation("1m must be sixty seconds"));
    }
    if parse_load_duration("500ms").is_ok() {
        return Err(AppError::validation("sub-second load test must be rejected"));
    }
    if parse_load_duration("1500ms").is_ok() {
        return Err(AppError::validation("fractional seconds must not be truncated"));
    }
    if parse_load_duration("2000ms")?.secs() != 2 {
        return Err(AppError::validation("2000ms must be two seconds"));
    }
    Ok(())
}

#[test]
fn bool_env_values() -> AppResult<()> {
    for (raw, expected) in [("1", true), ("YES", true), ("off", false), ("n", false)] {
        if parse_bool_env(raw)? != expected {
            return Err(AppError::validation(format!("unexpected value for {}", raw)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("invalid boolean must be rejected"));
    }
    Ok(())
}
