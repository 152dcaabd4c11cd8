pub(crate) const DEFAULT_USER_AGENT: &str = concat!("circulate/", env!("CARGO_PKG_VERSION"));

/// Where the reference balancer serves its API.
pub(crate) const DEFAULT_BALANCER_URL: &str = "http://127.0.0.1:5000/api";
