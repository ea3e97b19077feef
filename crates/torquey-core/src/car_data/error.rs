//! Import errors

use thiserror::Error;

/// Reasons an imported car file is rejected.
///
/// The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Not valid JSON
    #[error("Failed to parse JSON file")]
    MalformedJson,

    /// Neither a bare nor a wrapped car record
    #[error("Invalid file format")]
    InvalidFormat,

    /// `name` is missing, empty or not a string
    #[error("Missing or invalid car name")]
    InvalidName,

    /// `data` is missing or not an array
    #[error("Missing or invalid torque data")]
    InvalidTorqueData,

    /// A `data` entry is not an object
    #[error("Invalid data point format")]
    InvalidDataPoint,

    /// No entry has a numeric rpm and torque
    #[error("No valid data points found")]
    NoDataPoints,
}
