//! Ayanamsha: offset between the tropical equinox of date and a sidereal zero point.
//!
//! Each system is a J2000.0 reference value advanced by the IAU 2006 general
//! precession in longitude (Capitaine, Wallace & Chapront 2003, Table 1).

use serde::{Deserialize, Serialize};

/// Supported sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaSystem {
    /// Chitrapaksha: Spica at 0 Libra sidereal.
    #[default]
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    /// Fagan-Bradley synetic vernal point.
    FaganBradley,
}

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
            Self::FaganBradley => 24.736,
        }
    }

    /// Ayanamsha in degrees at `t` Julian centuries from J2000.0.
    pub fn at_centuries(self, t: f64) -> f64 {
        self.reference_j2000_deg() + general_precession_deg(t)
    }
}

/// Accumulated general precession in ecliptic longitude since J2000.0, degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let arcsec = 5028.796_195 * t + 1.105_434_8 * t2 + 0.000_079_64 * t3
        - 0.000_023_857 * t3 * t
        - 0.000_000_038_3 * t3 * t2;
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_precession_at_j2000() {
        assert_eq!(general_precession_deg(0.0), 0.0);
        assert!((AyanamshaSystem::Lahiri.at_centuries(0.0) - 23.853).abs() < 1e-12);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let per_year = general_precession_deg(0.01) * 3600.0;
        assert!((per_year - 50.29).abs() < 0.1, "{per_year}");
    }

    #[test]
    fn lahiri_in_2024() {
        // ~24.19 deg in 2024
        let t = 0.24;
        let aya = AyanamshaSystem::Lahiri.at_centuries(t);
        assert!((aya - 24.19).abs() < 0.02, "{aya}");
    }
}
