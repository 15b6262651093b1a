//! Tajika aspects between the seven classical grahas.
//!
//! Each unordered pair yields at most one aspect: the one whose exact angle
//! is nearest. Rahu and Ketu take no part.

use varsha_base::{SAPTA_GRAHAS, angular_separation, normalize_360, normalize_pm180};

use crate::aspect_types::{
    ALL_TAJIKA_ASPECTS, ApplyingMethod, AspectConfig, TajikaAspect, TajikaAspectRecord,
};
use crate::chart::{AnnualChart, PlanetPosition};

/// Distance from the raw separation `|a - b|` (or its complement) to `angle`.
pub fn distance_to_angle(lon_a: f64, lon_b: f64, angle: f64) -> f64 {
    let raw = (lon_a - lon_b).abs();
    let d1 = (raw - angle).abs();
    let d2 = ((360.0 - raw) - angle).abs();
    d1.min(d2)
}

/// Nearest aspect within orb, if any, with its measured orb.
pub fn match_aspect(lon_a: f64, lon_b: f64) -> Option<(TajikaAspect, f64)> {
    let mut best: Option<(TajikaAspect, f64)> = None;
    for aspect in ALL_TAJIKA_ASPECTS {
        let d = distance_to_angle(lon_a, lon_b, aspect.angle_deg());
        if d <= aspect.orb_deg() && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((aspect, d));
        }
    }
    best
}

/// Applying test from instantaneous speeds.
///
/// With s the folded separation and d = |s - angle|, the aspect applies when
/// dd/dt < 0. An exact aspect or zero relative speed counts as separating.
fn applying_by_speed(a: &PlanetPosition, b: &PlanetPosition, angle: f64) -> bool {
    let delta = normalize_pm180(a.longitude_deg - b.longitude_deg);
    let sep = delta.abs();
    let sep_rate = delta.signum() * (a.speed_deg_per_day - b.speed_deg_per_day);
    let orb_rate = (sep - angle).signum() * sep_rate;
    delta != 0.0 && sep != angle && orb_rate < 0.0
}

/// Applying test by stepping the faster body forward.
fn applying_by_step(a: &PlanetPosition, b: &PlanetPosition, angle: f64, step_days: f64) -> bool {
    let now = (angular_separation(a.longitude_deg, b.longitude_deg) - angle).abs();
    let (la, lb) = if a.speed_deg_per_day.abs() >= b.speed_deg_per_day.abs() {
        (
            normalize_360(a.longitude_deg + a.speed_deg_per_day * step_days),
            b.longitude_deg,
        )
    } else {
        (
            a.longitude_deg,
            normalize_360(b.longitude_deg + b.speed_deg_per_day * step_days),
        )
    };
    let later = (angular_separation(la, lb) - angle).abs();
    later < now
}

/// Aspect record for one pair, if the pair is within orb of any aspect.
pub fn aspect_between(
    a: &PlanetPosition,
    b: &PlanetPosition,
    config: &AspectConfig,
) -> Option<TajikaAspectRecord> {
    let (aspect, orb_deg) = match_aspect(a.longitude_deg, b.longitude_deg)?;
    let angle = aspect.angle_deg();
    let applying = match config.applying {
        ApplyingMethod::RelativeSpeed => applying_by_speed(a, b, angle),
        ApplyingMethod::FiniteDifference { step_days } => applying_by_step(a, b, angle, step_days),
    };
    Some(TajikaAspectRecord {
        first: a.graha,
        second: b.graha,
        aspect,
        orb_deg,
        applying,
    })
}

/// All aspects among the sapta grahas, pairs in graha order.
pub fn find_aspects(chart: &AnnualChart, config: &AspectConfig) -> Vec<TajikaAspectRecord> {
    let mut out = Vec::new();
    for (i, &ga) in SAPTA_GRAHAS.iter().enumerate() {
        for &gb in &SAPTA_GRAHAS[i + 1..] {
            if let Some(rec) = aspect_between(chart.planet(ga), chart.planet(gb), config) {
                out.push(rec);
            }
        }
    }
    out
}
