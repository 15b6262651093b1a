//! Error type for the annual timing engine.

use thiserror::Error;

use varsha_base::{CuspError, Graha};
use varsha_core::OracleError;
use varsha_time::TimeError;

/// Errors from annual chart computation.
///
/// Every failure is returned to the caller; nothing is replaced by a default.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TajikaError {
    /// No sign change of Sun minus natal Sun inside the search window, even
    /// after the single widening retry.
    #[error(
        "solar return for {target_year} not bracketed (natal Sun {natal_sun_deg} deg, window +/-{window_days} d)"
    )]
    RootNotBracketed {
        target_year: i32,
        natal_sun_deg: f64,
        window_days: f64,
    },
    /// The ephemeris could not supply a required graha.
    #[error("missing position for {graha}")]
    MissingPosition {
        graha: Graha,
        #[source]
        source: OracleError,
    },
    /// Target year precedes the birth year.
    #[error("target year {target_year} precedes birth year {birth_year}")]
    InvalidYear { target_year: i32, birth_year: i32 },
    /// House system failure.
    #[error("house system: {0}")]
    Houses(#[source] OracleError),
    /// Cusps returned by the house system break the monotonic invariant.
    #[error("invalid house cusps: {0}")]
    InvalidHouseCusps(#[from] CuspError),
    /// Calendar or Julian day conversion failure.
    #[error("time: {0}")]
    Time(#[from] TimeError),
    /// Caller input out of range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
