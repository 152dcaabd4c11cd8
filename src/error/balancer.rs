use thiserror::Error;

/// Why a single call to the balancer did not succeed.
#[derive(Debug, Error)]
pub enum CallFailure {
    #[error("{source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("balancer answered with status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("invalid response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
    #[error("balancer rejected the call: {message}")]
    Rejected { message: String },
    #[error("invalid endpoint '{path}': {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum BalancerError {
    #[error("{cause}")]
    Dispatch {
        #[source]
        cause: CallFailure,
    },
    #[error("failed to switch algorithm to {algorithm}: {cause}")]
    Configuration {
        algorithm: String,
        #[source]
        cause: CallFailure,
    },
    #[error("failed to register target {id}: {cause}")]
    Registration {
        id: String,
        #[source]
        cause: CallFailure,
    },
}

impl BalancerError {
    #[must_use]
    pub const fn cause(&self) -> &CallFailure {
        match self {
            BalancerError::Dispatch { cause }
            | BalancerError::Configuration { cause, .. }
            | BalancerError::Registration { cause, .. } => cause,
        }
    }
}
