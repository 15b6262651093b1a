//! Annual chart construction at the solar-return instant.

use serde::Serialize;
use tracing::debug;

use varsha_base::{
    ALL_GRAHAS, GeoLocation, Graha, house_of_longitude, rashi_index_of, validate_cusps,
};
use varsha_core::{Ephemeris, HouseSystem};
use varsha_time::Instant;

use crate::adapter::EphemerisAdapter;
use crate::error::TajikaError;

/// One graha's placement in the annual chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    /// Degrees/day; negative means retrograde.
    pub speed_deg_per_day: f64,
    /// 0-based sign index.
    pub rashi_index: u8,
    /// House 1-12.
    pub house: u8,
}

impl PlanetPosition {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Chart cast for the solar-return instant of one target year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualChart {
    pub target_year: i32,
    pub instant: Instant,
    pub location: GeoLocation,
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    /// Sidereal cusp longitudes, `cusps[0]` = house 1.
    pub cusps: [f64; 12],
    /// All nine grahas, indexed by [`Graha::index`].
    pub planets: [PlanetPosition; 9],
}

impl AnnualChart {
    /// Placement of `graha`.
    pub fn planet(&self, graha: Graha) -> &PlanetPosition {
        &self.planets[graha.index()]
    }

    /// 0-based sign index of the annual ascendant.
    pub fn ascendant_sign(&self) -> u8 {
        rashi_index_of(self.ascendant_deg)
    }

    /// House (1-12) containing an arbitrary longitude, against this chart's cusps.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        house_of_longitude(longitude_deg, &self.cusps)
    }
}

/// Build the annual chart at `instant`.
///
/// Every graha is required: the first oracle failure aborts the build and no
/// partial chart is returned.
pub fn build_annual_chart<E, H>(
    adapter: &EphemerisAdapter<'_, E>,
    houses: &H,
    instant: Instant,
    target_year: i32,
) -> Result<AnnualChart, TajikaError>
where
    E: Ephemeris + ?Sized,
    H: HouseSystem + ?Sized,
{
    let location = *adapter.location();
    let hc = houses
        .compute(instant, &location)
        .map_err(TajikaError::Houses)?;
    validate_cusps(&hc.cusps)?;

    let mut placed = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let s = adapter.state(graha, instant)?;
        placed.push(PlanetPosition {
            graha,
            longitude_deg: s.longitude_deg,
            latitude_deg: s.latitude_deg,
            distance_au: s.distance_au,
            speed_deg_per_day: s.speed_deg_per_day,
            rashi_index: rashi_index_of(s.longitude_deg),
            house: house_of_longitude(s.longitude_deg, &hc.cusps),
        });
    }
    let planets: [PlanetPosition; 9] = placed
        .try_into()
        .map_err(|_| TajikaError::InvalidInput("expected nine graha positions"))?;

    debug!(
        target_year,
        jd = instant.jd(),
        ascendant = hc.ascendant_deg,
        "annual chart built"
    );

    Ok(AnnualChart {
        target_year,
        instant,
        location,
        ascendant_deg: hc.ascendant_deg,
        midheaven_deg: hc.midheaven_deg,
        cusps: hc.cusps,
        planets,
    })
}
