//! Lagna, MC and house division.
//!
//! Lagna/MC from local sidereal time, true obliquity of the mean ecliptic and
//! geographic latitude (Meeus Ch. 13/22). Cusps are returned sidereal.

use serde::{Deserialize, Serialize};

use varsha_base::{GeoLocation, forward_arc, normalize_360};
use varsha_core::{HouseCusps, HouseSystem, OracleError};
use varsha_time::{Instant, jd_to_centuries, local_sidereal_time_deg};

use crate::ayanamsha::AyanamshaSystem;

/// Latitude beyond which quadrant division degenerates.
pub const MAX_QUADRANT_LATITUDE_DEG: f64 = 66.5;

/// House division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseDivision {
    /// Equal 30 deg houses starting at the Lagna.
    #[default]
    Equal,
    /// Sripati (Porphyry): trisected quadrants between the angles.
    Sripati,
}

/// Analytic house oracle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyticHouses {
    pub division: HouseDivision,
    pub ayanamsha: AyanamshaSystem,
}

impl AnalyticHouses {
    pub fn new(division: HouseDivision, ayanamsha: AyanamshaSystem) -> Self {
        Self {
            division,
            ayanamsha,
        }
    }
}

/// Mean obliquity of the ecliptic in degrees (Meeus Eq. 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// Tropical (ascendant, midheaven) in degrees from LST, latitude and obliquity.
pub fn tropical_angles(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    let mc = f64::atan2(theta.sin(), theta.cos() * eps.cos());
    (
        normalize_360(asc.to_degrees()),
        normalize_360(mc.to_degrees()),
    )
}

/// Equal division: cusp[i] = start + 30 i.
pub fn equal_cusps(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(start_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Sripati division: cusps 1/4/7/10 are Asc/IC/Desc/MC, the rest trisect.
pub fn sripati_cusps(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let angles = [
        asc_deg,
        normalize_360(mc_deg + 180.0),
        normalize_360(asc_deg + 180.0),
        mc_deg,
    ];
    let mut cusps = [0.0; 12];
    for (q, &from) in angles.iter().enumerate() {
        let to = angles[(q + 1) % 4];
        let arc = forward_arc(from, to);
        cusps[q * 3] = from;
        cusps[q * 3 + 1] = normalize_360(from + arc / 3.0);
        cusps[q * 3 + 2] = normalize_360(from + 2.0 * arc / 3.0);
    }
    cusps
}

impl HouseSystem for AnalyticHouses {
    fn compute(&self, at: Instant, location: &GeoLocation) -> Result<HouseCusps, OracleError> {
        if location.latitude_deg.abs() >= 89.99 {
            return Err(OracleError::HousesUnavailable("ascendant undefined at the poles"));
        }
        if self.division == HouseDivision::Sripati
            && location.latitude_deg.abs() > MAX_QUADRANT_LATITUDE_DEG
        {
            return Err(OracleError::HousesUnavailable(
                "latitude exceeds 66.5 deg limit for Sripati houses",
            ));
        }

        let t = jd_to_centuries(at.jd());
        let lst = local_sidereal_time_deg(at.jd(), location.longitude_deg);
        let (asc, mc) = tropical_angles(lst, location.latitude_deg, mean_obliquity_deg(t));
        let aya = self.ayanamsha.at_centuries(t);
        let asc = normalize_360(asc - aya);
        let mc = normalize_360(mc - aya);

        let cusps = match self.division {
            HouseDivision::Equal => equal_cusps(asc),
            HouseDivision::Sripati => sripati_cusps(asc, mc),
        };
        Ok(HouseCusps {
            cusps,
            ascendant_deg: asc,
            midheaven_deg: mc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varsha_base::validate_cusps;

    #[test]
    fn equator_lst_zero_gives_cancer_rising() {
        let (asc, mc) = tropical_angles(0.0, 0.0, 23.44);
        assert!((asc - 90.0).abs() < 1e-9, "{asc}");
        assert!(mc.abs() < 1e-9 || (mc - 360.0).abs() < 1e-9);
    }

    #[test]
    fn ascendant_is_east_of_midheaven() {
        for k in 0..36 {
            let lst = k as f64 * 10.0;
            let (asc, mc) = tropical_angles(lst, 28.6, 23.44);
            let arc = forward_arc(mc, asc);
            assert!(arc > 0.0 && arc < 180.0, "lst={lst} arc={arc}");
        }
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-5);
    }

    #[test]
    fn equal_cusps_wrap() {
        let cusps = equal_cusps(350.0);
        assert!((cusps[1] - 20.0).abs() < 1e-10);
        assert!((cusps[11] - 320.0).abs() < 1e-10);
    }

    #[test]
    fn sripati_trisects_quadrants() {
        let cusps = sripati_cusps(90.0, 0.0);
        let expected = [
            90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 0.0, 30.0, 60.0,
        ];
        for (got, want) in cusps.iter().zip(expected) {
            assert!((got - want).abs() < 1e-10, "{got} vs {want}");
        }
    }

    #[test]
    fn computed_cusps_are_valid() {
        let delhi = GeoLocation::new(28.6139, 77.209, 0.0);
        let at = Instant::from_jd(2_460_400.25).unwrap();
        for division in [HouseDivision::Equal, HouseDivision::Sripati] {
            let h = AnalyticHouses::new(division, AyanamshaSystem::Lahiri)
                .compute(at, &delhi)
                .unwrap();
            validate_cusps(&h.cusps).unwrap();
            assert_eq!(h.cusps[0], h.ascendant_deg);
        }
    }

    #[test]
    fn sripati_refuses_polar_latitude() {
        let tromso = GeoLocation::new(69.65, 18.96, 0.0);
        let at = Instant::from_jd(2_460_400.25).unwrap();
        let err = AnalyticHouses::new(HouseDivision::Sripati, AyanamshaSystem::Lahiri)
            .compute(at, &tromso)
            .unwrap_err();
        assert!(matches!(err, OracleError::HousesUnavailable(_)));
        assert!(AnalyticHouses::default().compute(at, &tromso).is_ok());
    }
}
