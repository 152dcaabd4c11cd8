use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration;
use crate::domain::Algorithm;
use crate::error::ValidationError;

/// Every key is optional; command-line values win over the file.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub balancer_url: Option<String>,
    /// Clamped like `--rate`, so out-of-range values are accepted.
    pub rate: Option<i64>,
    pub duration: Option<DurationValue>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub targets: Option<Vec<String>>,
    pub id_prefix: Option<String>,
    pub algorithm: Option<Algorithm>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
    pub no_ui: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
