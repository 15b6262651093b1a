//! Self-contained analytic ephemeris for the varsha engine.
//!
//! [`AnalyticEphemeris`] implements [`varsha_core::Ephemeris`] from closed-form
//! series (Sun, Moon, mean node) and Keplerian mean elements (Mars through
//! Saturn). [`AnalyticHouses`] implements [`varsha_core::HouseSystem`].
//!
//! Positions are geocentric and sidereal. Speeds come from a symmetric
//! difference over one day. Input instants are treated as TT; the TT-UT
//! offset (about a minute in the modern era) moves the Moon by well under
//! an arcminute and is ignored.

pub mod ayanamsha;
pub mod houses;
pub mod luminaries;
pub mod planets;

pub use ayanamsha::{AyanamshaSystem, general_precession_deg};
pub use houses::{AnalyticHouses, HouseDivision, MAX_QUADRANT_LATITUDE_DEG};

use varsha_base::{GeoLocation, Graha, normalize_360, normalize_pm180};
use varsha_core::{Ephemeris, GrahaState, OracleError};
use varsha_time::{Instant, jd_to_centuries};

/// First JD covered (1800-01-01).
pub const MIN_JD: f64 = 2_378_496.5;
/// Last JD covered (2100-01-01).
pub const MAX_JD: f64 = 2_488_069.5;

/// Half-width of the speed difference stencil, days.
const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Analytic sidereal ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticEphemeris {
    pub ayanamsha: AyanamshaSystem,
}

impl AnalyticEphemeris {
    pub fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha }
    }

    /// Sidereal (longitude, latitude, distance) at JD.
    fn ecliptic(&self, graha: Graha, jd: f64) -> Result<(f64, f64, f64), OracleError> {
        let t = jd_to_centuries(jd);
        let aya_of_date = self.ayanamsha.at_centuries(t);
        let (lon, lat, dist) = match graha {
            Graha::Surya => {
                let (l, b, r) = luminaries::sun_ecliptic(t);
                (l - aya_of_date, b, r)
            }
            Graha::Chandra => {
                let (l, b, r) = luminaries::moon_ecliptic(t);
                (l - aya_of_date, b, r)
            }
            Graha::Rahu => (luminaries::mean_node_longitude(t) - aya_of_date, 0.0, 0.0),
            Graha::Ketu => (
                luminaries::mean_node_longitude(t) + 180.0 - aya_of_date,
                0.0,
                0.0,
            ),
            _ => match planets::planet_ecliptic_j2000(graha, t) {
                // J2000 longitudes plus precession minus ayanamsha of date
                // collapses to J2000 longitude minus the reference value.
                Some((l, b, r)) => (l - self.ayanamsha.reference_j2000_deg(), b, r),
                None => return Err(OracleError::UnsupportedGraha { graha }),
            },
        };
        Ok((normalize_360(lon), lat, dist))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn position(
        &self,
        graha: Graha,
        at: Instant,
        _location: &GeoLocation,
    ) -> Result<GrahaState, OracleError> {
        let jd = at.jd();
        if !(MIN_JD..=MAX_JD).contains(&jd) {
            return Err(OracleError::OutOfRange { jd });
        }
        let (lon, lat, dist) = self.ecliptic(graha, jd)?;
        let (before, _, _) = self.ecliptic(graha, jd - SPEED_HALF_STEP_DAYS)?;
        let (after, _, _) = self.ecliptic(graha, jd + SPEED_HALF_STEP_DAYS)?;
        let speed = normalize_pm180(after - before) / (2.0 * SPEED_HALF_STEP_DAYS);

        Ok(GrahaState {
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
        })
    }
}
