use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid offset format: {0:?}")]
    InvalidOffsetFormat(String),

    #[error("Invalid offset prefix: {0:?}")]
    InvalidOffsetPrefix(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unknown timezone: {0:?}")]
    UnknownTimezone(String),
}
