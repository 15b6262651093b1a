//! Kinematic sanity checks for the analytic ephemeris.

use varsha_base::{ALL_GRAHAS, GeoLocation, Graha, angular_separation};
use varsha_core::Ephemeris;
use varsha_ephem::{AnalyticEphemeris, AyanamshaSystem};
use varsha_time::Instant;

fn loc() -> GeoLocation {
    GeoLocation::new(19.076, 72.8777, 0.0)
}

#[test]
fn sun_moves_about_one_degree_per_day() {
    let eph = AnalyticEphemeris::default();
    for k in 0..24 {
        let at = Instant::from_jd(2_451_545.0 + k as f64 * 15.2).unwrap();
        let s = eph.position(Graha::Surya, at, &loc()).unwrap();
        assert!(
            (0.95..1.03).contains(&s.speed_deg_per_day),
            "speed {}",
            s.speed_deg_per_day
        );
    }
}

#[test]
fn moon_speed_in_physical_band() {
    let eph = AnalyticEphemeris::default();
    for k in 0..60 {
        let at = Instant::from_jd(2_455_000.0 + k as f64 * 0.9).unwrap();
        let m = eph.position(Graha::Chandra, at, &loc()).unwrap();
        assert!((11.5..15.5).contains(&m.speed_deg_per_day), "{}", m.speed_deg_per_day);
        assert!(m.latitude_deg.abs() < 5.5);
    }
}

#[test]
fn sun_returns_after_one_sidereal_year() {
    let eph = AnalyticEphemeris::default();
    let t0 = Instant::from_jd(2_448_000.0).unwrap();
    let t1 = t0.add_days(365.256_363);
    let a = eph.position(Graha::Surya, t0, &loc()).unwrap().longitude_deg;
    let b = eph.position(Graha::Surya, t1, &loc()).unwrap().longitude_deg;
    assert!(angular_separation(a, b) < 0.01, "{a} vs {b}");
}

#[test]
fn mercury_retrogrades_sometimes() {
    let eph = AnalyticEphemeris::default();
    let retro = (0..120).any(|k| {
        let at = Instant::from_jd(2_460_000.0 + k as f64 * 3.0).unwrap();
        eph.position(Graha::Buddh, at, &loc())
            .unwrap()
            .speed_deg_per_day
            < 0.0
    });
    assert!(retro);
}

#[test]
fn ayanamsha_choice_shifts_every_graha_equally() {
    let lahiri = AnalyticEphemeris::new(AyanamshaSystem::Lahiri);
    let raman = AnalyticEphemeris::new(AyanamshaSystem::Raman);
    let at = Instant::from_jd(2_458_000.0).unwrap();
    let diff = AyanamshaSystem::Lahiri.reference_j2000_deg()
        - AyanamshaSystem::Raman.reference_j2000_deg();
    for g in ALL_GRAHAS {
        let a = lahiri.position(g, at, &loc()).unwrap().longitude_deg;
        let b = raman.position(g, at, &loc()).unwrap().longitude_deg;
        assert!((angular_separation(a, b) - diff).abs() < 1e-9, "{g}");
    }
}
