use thiserror::Error;

use super::{
    BalancerError, ConfigError, FleetError, HttpError, LoadTestError, ValidationError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Balancer error: {0}")]
    Balancer(#[from] BalancerError),
    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),
    #[error("Load test error: {0}")]
    LoadTest(#[from] LoadTestError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[must_use]
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    #[must_use]
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    #[must_use]
    pub fn balancer<E>(error: E) -> Self
    where
        E: Into<BalancerError>,
    {
        error.into().into()
    }

    #[must_use]
    pub fn fleet<E>(error: E) -> Self
    where
        E: Into<FleetError>,
    {
        error.into().into()
    }
}
