//! Error types for shift-range operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftRangeError {
    /// The raw range string matched none of the supported shapes.
    #[error("unable to parse the date range: '{0}'")]
    UnrecognizedFormat(String),

    /// A shape matched but a captured token did not form a valid time.
    #[error("invalid time component: {0}")]
    InvalidTime(String),

    /// A zone identifier is not in the IANA database after alias resolution.
    #[error("invalid timezone: '{0}'")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ShiftRangeError>;
