use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid balancer URL '{url}': {source}")]
    InvalidBalancerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Balancer URL '{url}' cannot be used as a base.")]
    CannotBeBase { url: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}
