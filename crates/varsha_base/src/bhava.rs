//! Bhava (house) lookup against a set of twelve cusps.
//!
//! Cusps are ecliptic longitudes in house order. Walking from cusp 1 to cusp
//! 12 and back to cusp 1 the longitudes increase monotonically around the
//! circle, crossing 360 → 0 exactly once. A longitude belongs to the house
//! whose cusp-to-next-cusp arc contains it; a longitude exactly on a cusp
//! belongs to the house that begins there.

use thiserror::Error;

use crate::angle::{forward_arc, normalize_360};

/// Cusp set that cannot be walked as twelve consecutive arcs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CuspError {
    #[error("cusp {house} is not a finite longitude in [0, 360): {value}")]
    OutOfRange { house: u8, value: f64 },
    #[error("cusps wrap through 0 deg {wraps} times, expected exactly once")]
    NotMonotonic { wraps: usize },
}

/// Check that the twelve cusps are finite, in [0, 360), and increase
/// around the circle with exactly one wrap.
pub fn validate_cusps(cusps: &[f64; 12]) -> Result<(), CuspError> {
    for (i, &c) in cusps.iter().enumerate() {
        if !c.is_finite() || !(0.0..360.0).contains(&c) {
            return Err(CuspError::OutOfRange {
                house: i as u8 + 1,
                value: c,
            });
        }
    }
    let wraps = (0..12)
        .filter(|&i| cusps[(i + 1) % 12] < cusps[i])
        .count();
    if wraps != 1 {
        return Err(CuspError::NotMonotonic { wraps });
    }
    Ok(())
}

/// House number (1-12) containing an ecliptic longitude.
///
/// Uses modular containment on each cusp arc, so the arc from cusp 12 back
/// to cusp 1 is handled like any other. Total: if rounding leaves a longitude
/// outside every arc, the house with the nearest preceding cusp is returned.
pub fn house_of_longitude(lon_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(lon_deg);
    for i in 0..12 {
        let arc = forward_arc(cusps[i], cusps[(i + 1) % 12]);
        let offset = forward_arc(cusps[i], lon);
        if offset < arc {
            return i as u8 + 1;
        }
    }

    let mut best = 0;
    let mut best_offset = f64::INFINITY;
    for (i, &c) in cusps.iter().enumerate() {
        let offset = forward_arc(c, lon);
        if offset < best_offset {
            best_offset = offset;
            best = i;
        }
    }
    best as u8 + 1
}

/// Whether a house is angular (kendra): 1, 4, 7 or 10.
pub const fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

/// Whether a house is a dusthana: 6, 8 or 12.
pub const fn is_dusthana(house: u8) -> bool {
    matches!(house, 6 | 8 | 12)
}
