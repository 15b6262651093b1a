//! Error types for calendar and instant conversions.

use thiserror::Error;

/// Errors from calendar validation, timestamp parsing, or instant construction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    /// A UTC timestamp string could not be parsed.
    #[error("cannot parse UTC timestamp `{0}` (expected YYYY-MM-DDThh:mm:ssZ)")]
    Parse(String),
    /// The Julian day is NaN or infinite.
    #[error("julian day must be finite")]
    NonFinite,
}
