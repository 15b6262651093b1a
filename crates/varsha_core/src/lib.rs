//! Oracle contracts consumed by the annual timing engine.
//!
//! The engine never computes planetary positions or house cusps itself. It
//! consumes two collaborators through the traits defined here:
//!
//! - [`Ephemeris`]: sidereal ecliptic state of one graha at one instant
//! - [`HouseSystem`]: twelve cusps plus Lagna/MC at one instant
//!
//! Implementations must be deterministic: the same arguments always return
//! the same answer. The solar-return bisection re-queries the Sun dozens of
//! times and relies on this. Both traits take `&self`, so a single oracle can
//! be shared across threads by callers that parallelize independent charts.

use serde::Serialize;
use thiserror::Error;

use varsha_base::{Graha, GeoLocation};
use varsha_time::Instant;

/// Sidereal ecliptic state of a graha as seen from the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaState {
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Distance from the observer in AU.
    pub distance_au: f64,
    /// Longitudinal speed in degrees/day; negative means retrograde.
    pub speed_deg_per_day: f64,
}

/// Twelve house cusps plus the two angles, all sidereal degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    /// Cusp longitudes, `cusps[0]` = house 1.
    pub cusps: [f64; 12],
    /// Ascendant (Lagna) longitude.
    pub ascendant_deg: f64,
    /// Midheaven (MC) longitude.
    pub midheaven_deg: f64,
}

/// Failure reported by an oracle implementation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The oracle has no data for this graha.
    #[error("{graha} is not supported by this ephemeris")]
    UnsupportedGraha { graha: Graha },
    /// The instant lies outside the oracle's validity range.
    #[error("JD {jd} outside ephemeris range")]
    OutOfRange { jd: f64 },
    /// House division is undefined at this location (e.g. polar latitudes).
    #[error("house system unavailable: {0}")]
    HousesUnavailable(&'static str),
    /// Any other implementation-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Source of sidereal planetary positions.
pub trait Ephemeris {
    /// State of `graha` at `at` for an observer at `location`.
    fn position(
        &self,
        graha: Graha,
        at: Instant,
        location: &GeoLocation,
    ) -> Result<GrahaState, OracleError>;
}

/// Source of house cusps.
pub trait HouseSystem {
    /// Cusps, ascendant and midheaven at `at` for `location`.
    fn compute(&self, at: Instant, location: &GeoLocation) -> Result<HouseCusps, OracleError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(
        &self,
        graha: Graha,
        at: Instant,
        location: &GeoLocation,
    ) -> Result<GrahaState, OracleError> {
        (**self).position(graha, at, location)
    }
}

impl<H: HouseSystem + ?Sized> HouseSystem for &H {
    fn compute(&self, at: Instant, location: &GeoLocation) -> Result<HouseCusps, OracleError> {
        (**self).compute(at, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Ephemeris for Fixed {
        fn position(
            &self,
            graha: Graha,
            _at: Instant,
            _location: &GeoLocation,
        ) -> Result<GrahaState, OracleError> {
            if graha.is_node() {
                return Err(OracleError::UnsupportedGraha { graha });
            }
            Ok(GrahaState {
                longitude_deg: graha.index() as f64 * 40.0,
                latitude_deg: 0.0,
                distance_au: 1.0,
                speed_deg_per_day: 1.0,
            })
        }
    }

    fn jupiter_longitude<E: Ephemeris>(eph: E) -> f64 {
        let at = Instant::from_jd(2_451_545.0).unwrap();
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        eph.position(Graha::Guru, at, &loc).unwrap().longitude_deg
    }

    #[test]
    fn reference_forwards_to_inner() {
        let oracle = Fixed;
        assert!((jupiter_longitude(&oracle) - 160.0).abs() < 1e-12);
        let dynamic: &dyn Ephemeris = &oracle;
        assert!((jupiter_longitude(dynamic) - 160.0).abs() < 1e-12);
    }

    #[test]
    fn error_messages_name_the_graha() {
        let err = OracleError::UnsupportedGraha { graha: Graha::Rahu };
        assert_eq!(err.to_string(), "Rahu is not supported by this ephemeris");
    }
}
