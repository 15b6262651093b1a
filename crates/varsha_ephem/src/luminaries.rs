//! Sun, Moon and mean lunar node from truncated analytic series.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 25 and 47.
//! Longitudes are tropical, referred to the mean equinox of date.
//! Accuracy: Sun ~0.01 deg, Moon ~0.1 deg, ample for chart work.

use varsha_base::normalize_360;

/// AU in kilometres (IAU 2012).
const AU_KM: f64 = 149_597_870.7;

/// Geocentric ecliptic coordinates: (longitude deg, latitude deg, distance AU).
pub type Ecliptic = (f64, f64, f64);

/// Sun's geometric longitude and distance at `t` Julian centuries from J2000.0.
pub fn sun_ecliptic(t: f64) -> Ecliptic {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let v = m + c.to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * v.cos());
    (normalize_360(true_lon), 0.0, r)
}

/// Moon's longitude, latitude and distance at `t` Julian centuries from J2000.0.
pub fn moon_ecliptic(t: f64) -> Ecliptic {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();

    let lon = lp
        + 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin()
        - 0.040_923 * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * (m + mp).sin();

    let lat = 5.128_122 * f.sin()
        + 0.280_602 * (mp + f).sin()
        + 0.277_693 * (mp - f).sin()
        + 0.173_237 * (2.0 * d - f).sin()
        + 0.055_413 * (2.0 * d - mp + f).sin()
        + 0.046_271 * (2.0 * d - mp - f).sin();

    let dist_km = 385_000.56
        - 20_905.355 * mp.cos()
        - 3_699.111 * (2.0 * d - mp).cos()
        - 2_955.968 * (2.0 * d).cos()
        - 569.925 * (2.0 * mp).cos();

    (normalize_360(lon), lat, dist_km / AU_KM)
}

/// Mean ascending lunar node (Rahu) longitude in degrees.
pub fn mean_node_longitude(t: f64) -> f64 {
    normalize_360(125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t * t)
}
