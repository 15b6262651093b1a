//! Natal chart inputs for the annual computation.

use serde::Serialize;

use varsha_base::{ALL_GRAHAS, GeoLocation, Graha, rashi_index_of};
use varsha_core::{Ephemeris, HouseSystem};
use varsha_time::{Instant, UtcTime};

use crate::adapter::EphemerisAdapter;
use crate::error::TajikaError;

/// Birth data plus the natal longitudes the annual chart is keyed to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NatalChart {
    pub birth: UtcTime,
    pub birth_instant: Instant,
    pub location: GeoLocation,
    /// Sidereal longitudes indexed by [`Graha::index`].
    pub longitudes: [f64; 9],
    pub ascendant_deg: f64,
}

fn check_longitude(lon: f64) -> Result<(), TajikaError> {
    if lon.is_finite() && (0.0..360.0).contains(&lon) {
        Ok(())
    } else {
        Err(TajikaError::InvalidInput("longitude must be in [0, 360)"))
    }
}

impl NatalChart {
    /// Natal chart from stored values.
    pub fn new(
        birth: UtcTime,
        location: GeoLocation,
        longitudes: [f64; 9],
        ascendant_deg: f64,
    ) -> Result<Self, TajikaError> {
        let birth_instant = Instant::from_utc(&birth)?;
        location
            .validate()
            .map_err(|_| TajikaError::InvalidInput("birth location out of range"))?;
        for &lon in &longitudes {
            check_longitude(lon)?;
        }
        check_longitude(ascendant_deg)?;
        Ok(Self {
            birth,
            birth_instant,
            location,
            longitudes,
            ascendant_deg,
        })
    }

    /// Natal chart cast through the same oracles used for the annual chart.
    pub fn from_oracle<E, H>(
        ephemeris: &E,
        houses: &H,
        birth: UtcTime,
        location: GeoLocation,
    ) -> Result<Self, TajikaError>
    where
        E: Ephemeris + ?Sized,
        H: HouseSystem + ?Sized,
    {
        let at = Instant::from_utc(&birth)?;
        let adapter = EphemerisAdapter::new(ephemeris, &location);
        let mut longitudes = [0.0; 9];
        for graha in ALL_GRAHAS {
            longitudes[graha.index()] = adapter.longitude(graha, at)?;
        }
        let hc = houses
            .compute(at, &location)
            .map_err(TajikaError::Houses)?;
        Self::new(birth, location, longitudes, hc.ascendant_deg)
    }

    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index()]
    }

    /// Natal Sun longitude: the solar-return target.
    pub fn sun_longitude(&self) -> f64 {
        self.longitude(Graha::Surya)
    }

    pub fn ascendant_sign(&self) -> u8 {
        rashi_index_of(self.ascendant_deg)
    }

    pub fn birth_year(&self) -> i32 {
        self.birth.year
    }
}
