use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Load test duration '{value}' must be a whole number of seconds.")]
    DurationNotWholeSeconds { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid boolean '{value}'. Use true/false, 1/0, yes/no, or on/off.")]
    InvalidBoolean { value: String },
    #[error("Invalid target id '{value}'. Expected a dotted quad like 192.168.1.7.")]
    InvalidTargetId { value: String },
    #[error("Invalid id prefix '{value}'. Expected three octets like 192.168.1.")]
    InvalidIdPrefix { value: String },
    #[error("Unknown algorithm '{value}'. Use round_robin, random, or least_connections.")]
    UnknownAlgorithm { value: String },
    #[error("Duplicate initial target '{value}'.")]
    DuplicateInitialTarget { value: String },
    #[error("Failed to build runtime: {source}")]
    RuntimeBuildFailed {
        #[source]
        source: std::io::Error,
    },
    #[error("Request failed; see the log line above.")]
    RequestFailed,
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
