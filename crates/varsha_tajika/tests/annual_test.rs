//! End-to-end annual timing through fake and analytic oracles.

mod common;

use common::{LinearSky, SpinningEqualHouses, Untouchable};
use varsha_base::{GeoLocation, Graha, SAPTA_GRAHAS, angular_separation, normalize_pm180};
use varsha_core::Ephemeris;
use varsha_ephem::{AnalyticEphemeris, AnalyticHouses, AyanamshaSystem, HouseDivision};
use varsha_tajika::{
    AnnualTiming, NatalChart, TajikaConfig, TajikaError, birth_anniversary,
    compute_annual_timing, mudda_start_owner,
};
use varsha_time::{Instant, UtcTime};

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.209, 216.0)
}

fn analytic() -> (AnalyticEphemeris, AnalyticHouses) {
    (
        AnalyticEphemeris::new(AyanamshaSystem::Lahiri),
        AnalyticHouses::new(HouseDivision::Sripati, AyanamshaSystem::Lahiri),
    )
}

fn check_invariants(natal: &NatalChart, timing: &AnnualTiming) {
    let chart = &timing.chart;

    let sun = chart.planet(Graha::Surya).longitude_deg;
    assert!(normalize_pm180(sun - natal.sun_longitude()).abs() < 1e-4);

    for p in &chart.planets {
        assert!((1..=12).contains(&p.house), "{:?}", p);
    }

    let elapsed = (chart.target_year - natal.birth_year()) as u32;
    assert_eq!(
        timing.muntha.sign_index as u32,
        (natal.ascendant_sign() as u32 + elapsed) % 12
    );
    assert!(
        timing
            .year_lord
            .candidates
            .iter()
            .any(|c| c.graha == timing.year_lord.graha)
    );

    assert_eq!(timing.sahams.len(), 20);
    for rec in &timing.aspects {
        assert!(SAPTA_GRAHAS.contains(&rec.first));
        assert!(SAPTA_GRAHAS.contains(&rec.second));
        assert!(rec.orb_deg <= rec.aspect.orb_deg());
    }

    let total: f64 = timing.mudda.iter().map(|p| p.duration_days).sum();
    assert_eq!(total, 360.0);
    assert_eq!(timing.mudda[0].start, timing.solar_return.instant);
    assert_eq!(
        timing.mudda[0].graha,
        mudda_start_owner(chart.planet(Graha::Chandra).longitude_deg)
    );
}

#[test]
fn analytic_end_to_end() {
    let (eph, houses) = analytic();
    let birth = UtcTime::new(1985, 8, 15, 4, 30, 0.0);
    let natal = NatalChart::from_oracle(&eph, &houses, birth, delhi()).unwrap();
    let timing =
        compute_annual_timing(&eph, &houses, &natal, 2015, &TajikaConfig::default()).unwrap();

    check_invariants(&natal, &timing);
    let anniversary = birth_anniversary(&birth, 2015).unwrap();
    assert!((timing.solar_return.instant - anniversary).abs() <= 2.0);
    assert_eq!(timing.chart.instant.year(), 2015);
}

#[test]
fn fifteen_aries_thirty_years_on() {
    let (eph, houses) = analytic();
    let birth = UtcTime::new(1990, 4, 29, 12, 0, 0.0);
    let mut lons = [0.0; 9];
    lons[Graha::Surya.index()] = 15.0;
    let natal = NatalChart::new(birth, delhi(), lons, 200.0).unwrap();

    let timing =
        compute_annual_timing(&eph, &houses, &natal, 2020, &TajikaConfig::default()).unwrap();
    let sr = timing.solar_return;
    assert!((sr.sun_longitude_deg - 15.0).abs() <= 1e-4, "{}", sr.sun_longitude_deg);
    assert!((sr.instant - sr.anniversary).abs() <= sr.window_days);

    let direct = eph
        .position(Graha::Surya, sr.instant, &delhi())
        .unwrap()
        .longitude_deg;
    assert!((direct - 15.0).abs() <= 1e-4);
}

#[test]
fn consecutive_returns_one_sidereal_year_apart() {
    let (eph, houses) = analytic();
    let birth = UtcTime::new(1970, 12, 1, 18, 0, 0.0);
    let natal = NatalChart::from_oracle(&eph, &houses, birth, delhi()).unwrap();
    let config = TajikaConfig::default();
    let a = compute_annual_timing(&eph, &houses, &natal, 2000, &config).unwrap();
    let b = compute_annual_timing(&eph, &houses, &natal, 2001, &config).unwrap();
    let gap = b.solar_return.instant - a.solar_return.instant;
    assert!((gap - 365.256).abs() < 0.05, "gap {gap}");
}

#[test]
fn linear_sky_end_to_end() {
    let sky = LinearSky::default();
    let houses = SpinningEqualHouses { asc_at_epoch: 10.0 };
    let birth = UtcTime::new(1995, 3, 10, 9, 15, 0.0);
    let natal = NatalChart::from_oracle(&sky, &houses, birth, delhi()).unwrap();
    for year in [1995, 1996, 2010, 2040] {
        let timing =
            compute_annual_timing(&sky, &houses, &natal, year, &TajikaConfig::default()).unwrap();
        check_invariants(&natal, &timing);
    }
}

#[test]
fn birth_year_itself_returns_birth_moment() {
    let sky = LinearSky::default();
    let houses = SpinningEqualHouses { asc_at_epoch: 10.0 };
    let birth = UtcTime::new(1995, 3, 10, 9, 15, 0.0);
    let natal = NatalChart::from_oracle(&sky, &houses, birth, delhi()).unwrap();
    let timing =
        compute_annual_timing(&sky, &houses, &natal, 1995, &TajikaConfig::default()).unwrap();
    let birth_jd = Instant::from_utc(&birth).unwrap();
    assert!((timing.solar_return.instant - birth_jd).abs() < 1e-6);
    assert_eq!(timing.muntha.sign_index, natal.ascendant_sign());
}

#[test]
fn year_before_birth_never_touches_oracles() {
    let birth = UtcTime::new(1995, 3, 10, 9, 15, 0.0);
    let natal = NatalChart::new(birth, delhi(), [1.0; 9], 0.0).unwrap();
    let err = compute_annual_timing(&Untouchable, &Untouchable, &natal, 1994, &TajikaConfig::default())
        .unwrap_err();
    assert_eq!(
        err,
        TajikaError::InvalidYear {
            target_year: 1994,
            birth_year: 1995
        }
    );
}

#[test]
fn missing_graha_surfaces_without_partial_chart() {
    let full = LinearSky::default();
    let houses = SpinningEqualHouses { asc_at_epoch: 10.0 };
    let birth = UtcTime::new(1995, 3, 10, 9, 15, 0.0);
    let natal = NatalChart::from_oracle(&full, &houses, birth, delhi()).unwrap();

    let partial = LinearSky {
        missing: vec![Graha::Guru],
        ..LinearSky::default()
    };
    let err = compute_annual_timing(&partial, &houses, &natal, 2000, &TajikaConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        TajikaError::MissingPosition {
            graha: Graha::Guru,
            ..
        }
    ));
}

#[test]
fn polar_sripati_reports_house_failure() {
    let eph = AnalyticEphemeris::default();
    let equal = AnalyticHouses::new(HouseDivision::Equal, AyanamshaSystem::Lahiri);
    let sripati = AnalyticHouses::new(HouseDivision::Sripati, AyanamshaSystem::Lahiri);
    let tromso = GeoLocation::new(69.65, 18.96, 0.0);
    let birth = UtcTime::new(1980, 6, 1, 12, 0, 0.0);
    let natal = NatalChart::from_oracle(&eph, &equal, birth, tromso).unwrap();

    let err = compute_annual_timing(&eph, &sripati, &natal, 1990, &TajikaConfig::default())
        .unwrap_err();
    assert!(matches!(err, TajikaError::Houses(_)));
    assert!(compute_annual_timing(&eph, &equal, &natal, 1990, &TajikaConfig::default()).is_ok());
}

#[test]
fn aspects_agree_with_chart_longitudes() {
    let (eph, houses) = analytic();
    let birth = UtcTime::new(2001, 11, 20, 23, 45, 0.0);
    let natal = NatalChart::from_oracle(&eph, &houses, birth, delhi()).unwrap();
    let timing =
        compute_annual_timing(&eph, &houses, &natal, 2024, &TajikaConfig::default()).unwrap();
    for rec in &timing.aspects {
        let a = timing.chart.planet(rec.first).longitude_deg;
        let b = timing.chart.planet(rec.second).longitude_deg;
        let sep = angular_separation(a, b);
        assert!(((sep - rec.aspect.angle_deg()).abs() - rec.orb_deg).abs() < 1e-9);
    }
}
