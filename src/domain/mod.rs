//! Value types shared by the CLI, the session controller and the dashboard.
mod algorithm;
mod load;

pub use algorithm::Algorithm;
pub use load::{
    DEFAULT_LOAD_DURATION_SECS, LoadDuration, MAX_RATE_PER_SECOND, MIN_RATE_PER_SECOND,
    RatePerSecond,
};
