//! Deterministic fake oracles shared by the integration tests.

#![allow(dead_code)]

use varsha_base::{GeoLocation, Graha};
use varsha_core::{Ephemeris, GrahaState, HouseCusps, HouseSystem, OracleError};
use varsha_time::Instant;

pub const EPOCH_JD: f64 = 2_451_545.0;

/// Every graha moves uniformly: lon = base + rate * (jd - EPOCH_JD).
pub struct LinearSky {
    pub base: [f64; 9],
    pub rate: [f64; 9],
    /// Grahas this sky refuses to report.
    pub missing: Vec<Graha>,
}

impl Default for LinearSky {
    fn default() -> Self {
        Self {
            base: [280.0, 220.0, 330.0, 270.0, 30.0, 240.0, 45.0, 120.0, 300.0],
            rate: [
                0.985_609, 13.176_4, 0.524, 1.383, 0.083, 1.602, 0.033, -0.052_95, -0.052_95,
            ],
            missing: Vec::new(),
        }
    }
}

impl LinearSky {
    pub fn longitude(&self, graha: Graha, jd: f64) -> f64 {
        let i = graha.index();
        (self.base[i] + self.rate[i] * (jd - EPOCH_JD)).rem_euclid(360.0)
    }
}

impl Ephemeris for LinearSky {
    fn position(
        &self,
        graha: Graha,
        at: Instant,
        _location: &GeoLocation,
    ) -> Result<GrahaState, OracleError> {
        if self.missing.contains(&graha) {
            return Err(OracleError::UnsupportedGraha { graha });
        }
        Ok(GrahaState {
            longitude_deg: self.longitude(graha, at.jd()),
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: self.rate[graha.index()],
        })
    }
}

/// Equal houses from an ascendant turning once per sidereal day.
pub struct SpinningEqualHouses {
    pub asc_at_epoch: f64,
}

impl HouseSystem for SpinningEqualHouses {
    fn compute(&self, at: Instant, location: &GeoLocation) -> Result<HouseCusps, OracleError> {
        let asc = (self.asc_at_epoch + 360.985_647 * (at.jd() - EPOCH_JD) + location.longitude_deg)
            .rem_euclid(360.0);
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = (asc + 30.0 * i as f64).rem_euclid(360.0);
        }
        Ok(HouseCusps {
            cusps,
            ascendant_deg: cusps[0],
            midheaven_deg: (asc + 270.0).rem_euclid(360.0),
        })
    }
}

/// Oracle that fails the test if it is ever queried.
pub struct Untouchable;

impl Ephemeris for Untouchable {
    fn position(&self, _: Graha, _: Instant, _: &GeoLocation) -> Result<GrahaState, OracleError> {
        panic!("ephemeris queried");
    }
}

impl HouseSystem for Untouchable {
    fn compute(&self, _: Instant, _: &GeoLocation) -> Result<HouseCusps, OracleError> {
        panic!("house system queried");
    }
}
