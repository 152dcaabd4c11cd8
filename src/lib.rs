//! Core library for the `circulate` CLI.
//!
//! `circulate` drives an external load-balancing service: it sends synthetic
//! requests, mirrors the per-target counters the balancer reports, switches
//! the balancing algorithm, grows the fleet with generated target ids, and
//! paces bounded load tests. The primary interface is the terminal dashboard
//! and the headless subcommands of the `circulate` binary; library APIs may
//! change as the CLI grows.
pub mod app;
pub mod args;
pub mod balancer;
pub mod config;
pub mod domain;
pub mod driver;
pub mod entry;
pub mod error;
pub mod fleet;
pub mod logger;
pub mod membership;
pub mod merger;
pub mod results;
pub mod shutdown;
pub mod ui;
