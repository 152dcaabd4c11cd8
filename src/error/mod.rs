mod app;
mod balancer;
mod config;
mod fleet;
mod http;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use balancer::{BalancerError, CallFailure};
pub use config::ConfigError;
pub use fleet::FleetError;
pub use http::HttpError;
pub use load_test::LoadTestError;
pub use validation::ValidationError;
