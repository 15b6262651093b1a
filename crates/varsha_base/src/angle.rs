//! Angle arithmetic on the ecliptic circle.
//!
//! Every longitude handled by the engine lives in [0, 360). Sums and
//! differences are renormalized immediately with [`normalize_360`].

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Unsigned angular separation between two longitudes, folded to [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let raw = normalize_360(a - b);
    if raw > 180.0 { 360.0 - raw } else { raw }
}

/// Distance of a folded separation from an aspect angle, in degrees.
pub fn orb_distance(separation: f64, aspect_angle: f64) -> f64 {
    (separation - aspect_angle).abs()
}

/// Forward arc from `from` to `to`, walking in increasing longitude, [0, 360).
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}
