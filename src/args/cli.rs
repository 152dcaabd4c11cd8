use clap::{Parser, Subcommand};
use std::time::Duration;

use crate::domain::{Algorithm, LoadDuration, RatePerSecond};
use crate::fleet::TargetId;
use crate::membership::IdPrefix;

use super::defaults::DEFAULT_BALANCER_URL;
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_id_prefix, parse_load_duration, parse_rate,
    parse_target_id,
};

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a single request and print the distribution
    Send,
    /// Switch the balancer's algorithm
    SetAlgorithm {
        /// round_robin, random, or least_connections
        #[arg(value_enum, value_name = "ALGORITHM")]
        name: Algorithm,
    },
    /// Generate a new target, add it to the fleet and register it
    AddTarget,
    /// Run a paced load test without the dashboard
    LoadTest,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal dashboard and load driver for a client-side load balancer - live topology, per-target counters, and paced synthetic traffic."
)]
pub struct CirculateArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the balancer API
    #[arg(
        long = "balancer-url",
        short = 'u',
        env = "CIRCULATE_BALANCER_URL",
        default_value = DEFAULT_BALANCER_URL,
        global = true
    )]
    pub balancer_url: String,

    /// Requests per second during a load test (clamped to 1..=100)
    #[arg(long, short = 'r', default_value = "1", value_parser = parse_rate, allow_negative_numbers = true, global = true)]
    pub rate: RatePerSecond,

    /// Load test length in whole seconds (plain seconds or ms/s/m/h)
    #[arg(long, short = 't', default_value = "10", value_parser = parse_load_duration, global = true)]
    pub duration: LoadDuration,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg, global = true)]
    pub request_timeout: Duration,

    /// Connection timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "5s", value_parser = parse_duration_arg, global = true)]
    pub connect_timeout: Duration,

    /// Initial fleet member (repeatable). Defaults to 192.168.1.1-3.
    #[arg(long = "target", value_parser = parse_target_id, global = true)]
    pub targets: Vec<TargetId>,

    /// First three octets for generated target ids
    #[arg(long = "id-prefix", default_value = "192.168.1", value_parser = parse_id_prefix, global = true)]
    pub id_prefix: IdPrefix,

    /// Algorithm the balancer is assumed to start with
    #[arg(long, value_enum, default_value_t = Algorithm::RoundRobin, global = true)]
    pub algorithm: Algorithm,

    /// Path to config file (TOML/JSON). Defaults to ./circulate.toml or ./circulate.json if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, global = true)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by CIRCULATE_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Skip the dashboard and run a headless load test
    #[arg(long = "no-ui", alias = "no-tui", global = true)]
    pub no_ui: bool,
}
