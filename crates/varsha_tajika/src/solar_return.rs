//! Solar-return solver.
//!
//! Finds the instant in a target year at which the transiting sidereal Sun
//! returns to its natal longitude. Bisection on
//! f(t) = normalize_pm180(sun(t) - natal_sun), seeded on the birth
//! anniversary. The (-180, 180] fold means the only sign changes near the
//! anniversary are the genuine root and the far-side wrap jump, which
//! [`is_genuine_crossing`] tells apart.

use tracing::{debug, warn};

use varsha_base::{Graha, normalize_pm180};
use varsha_core::Ephemeris;
use varsha_time::{Instant, UtcTime, calendar_to_jd};

use crate::adapter::EphemerisAdapter;
use crate::error::TajikaError;
use crate::solar_return_types::{SolarReturn, SolarReturnConfig};

/// A sign change between two samples that is not the +/-180 wrap jump.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Anniversary of the birth moment in `target_year`, same UT time of day.
///
/// A 29 February birth in a common year lands on 1 March: the day count
/// simply rolls over.
pub fn birth_anniversary(birth: &UtcTime, target_year: i32) -> Result<Instant, TajikaError> {
    let day = birth.day as f64 + birth.day_fraction();
    Ok(Instant::from_jd(calendar_to_jd(target_year, birth.month, day))?)
}

/// Locate the solar return for `target_year`.
///
/// `natal_sun_deg` must lie in [0, 360). The first bracket is
/// `config.window_days` either side of the anniversary; if it holds no
/// genuine crossing the search is retried once with
/// `config.widened_window_days` before giving up with
/// [`TajikaError::RootNotBracketed`].
pub fn solve_solar_return<E: Ephemeris + ?Sized>(
    adapter: &EphemerisAdapter<'_, E>,
    natal_sun_deg: f64,
    birth: &UtcTime,
    target_year: i32,
    config: &SolarReturnConfig,
) -> Result<SolarReturn, TajikaError> {
    if target_year < birth.year {
        return Err(TajikaError::InvalidYear {
            target_year,
            birth_year: birth.year,
        });
    }
    if !natal_sun_deg.is_finite() || !(0.0..360.0).contains(&natal_sun_deg) {
        return Err(TajikaError::InvalidInput("natal Sun longitude must be in [0, 360)"));
    }
    config.validate().map_err(TajikaError::InvalidInput)?;

    let anniversary = birth_anniversary(birth, target_year)?;

    if let Some(found) = try_window(adapter, natal_sun_deg, anniversary, config.window_days, config)? {
        return Ok(found);
    }

    warn!(
        target_year,
        natal_sun_deg,
        window_days = config.widened_window_days,
        "solar return not bracketed, widening window"
    );
    try_window(
        adapter,
        natal_sun_deg,
        anniversary,
        config.widened_window_days,
        config,
    )?
    .ok_or(TajikaError::RootNotBracketed {
        target_year,
        natal_sun_deg,
        window_days: config.widened_window_days,
    })
}

/// Bracket `anniversary +/- half_width` and bisect if it holds the root.
fn try_window<E: Ephemeris + ?Sized>(
    adapter: &EphemerisAdapter<'_, E>,
    natal_sun_deg: f64,
    anniversary: Instant,
    half_width: f64,
    config: &SolarReturnConfig,
) -> Result<Option<SolarReturn>, TajikaError> {
    let f = |t: Instant| -> Result<(f64, f64), TajikaError> {
        let lon = adapter.longitude(Graha::Surya, t)?;
        Ok((normalize_pm180(lon - natal_sun_deg), lon))
    };

    let mut t_a = anniversary.add_days(-half_width);
    let mut t_b = anniversary.add_days(half_width);
    let (mut f_a, lon_a) = f(t_a)?;
    let (f_b, lon_b) = f(t_b)?;
    debug!(
        jd_a = t_a.jd(),
        jd_b = t_b.jd(),
        f_a,
        f_b,
        "solar return bracket"
    );

    let found = |instant: Instant, sun_longitude_deg: f64| SolarReturn {
        instant,
        sun_longitude_deg,
        anniversary,
        window_days: half_width,
    };

    if f_a == 0.0 {
        return Ok(Some(found(t_a, lon_a)));
    }
    if f_b == 0.0 {
        return Ok(Some(found(t_b, lon_b)));
    }
    if !is_genuine_crossing(f_a, f_b) {
        return Ok(None);
    }

    for _ in 0..config.iterations {
        let t_mid = t_a.midpoint(t_b);
        let (f_mid, lon_mid) = f(t_mid)?;
        if f_mid == 0.0 {
            return Ok(Some(found(t_mid, lon_mid)));
        }
        if f_a * f_mid < 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    let root = t_a.midpoint(t_b);
    let lon = adapter.longitude(Graha::Surya, root)?;
    debug!(jd = root.jd(), sun = lon, "solar return refined");
    Ok(Some(found(root, lon)))
}
