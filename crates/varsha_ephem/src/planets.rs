//! Keplerian positions of the five star-planets.
//!
//! Mean elements and rates from Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL SSD, Table 1, valid 1800-2050 AD).
//! Results are geocentric, referred to the J2000.0 ecliptic and equinox.
//! Accuracy is a few arcminutes for the inner planets and better than
//! 0.5 deg for Jupiter/Saturn inside the validity window.

use varsha_base::{Graha, normalize_360};

/// Osculating elements at J2000.0 and their rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    incl: [f64; 2],
    mean_lon: [f64; 2],
    peri_lon: [f64; 2],
    node_lon: [f64; 2],
}

const MERCURY: Elements = Elements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    incl: [7.004_979_02, -0.005_947_49],
    mean_lon: [252.250_323_50, 149_472.674_111_75],
    peri_lon: [77.457_796_28, 0.160_476_89],
    node_lon: [48.330_765_93, -0.125_340_81],
};

const VENUS: Elements = Elements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    incl: [3.394_676_05, -0.000_788_90],
    mean_lon: [181.979_099_50, 58_517.815_387_29],
    peri_lon: [131.602_467_18, 0.002_683_29],
    node_lon: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON: Elements = Elements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    incl: [-0.000_015_31, -0.012_946_68],
    mean_lon: [100.464_571_66, 35_999.372_449_81],
    peri_lon: [102.937_681_93, 0.323_273_64],
    node_lon: [0.0, 0.0],
};

const MARS: Elements = Elements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    incl: [1.849_691_42, -0.008_131_31],
    mean_lon: [-4.553_432_05, 19_140.302_684_99],
    peri_lon: [-23.943_629_59, 0.444_410_88],
    node_lon: [49.559_538_91, -0.292_573_43],
};

const JUPITER: Elements = Elements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    incl: [1.304_396_95, -0.001_837_14],
    mean_lon: [34.396_440_51, 3_034.746_127_75],
    peri_lon: [14.728_479_83, 0.212_526_68],
    node_lon: [100.473_909_09, 0.204_691_06],
};

const SATURN: Elements = Elements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    incl: [2.485_991_87, 0.001_936_09],
    mean_lon: [49.954_244_23, 1_222.493_622_01],
    peri_lon: [92.598_878_31, -0.418_972_16],
    node_lon: [113.662_424_48, -0.288_677_94],
};

fn elements_for(graha: Graha) -> Option<&'static Elements> {
    match graha {
        Graha::Buddh => Some(&MERCURY),
        Graha::Shukra => Some(&VENUS),
        Graha::Mangal => Some(&MARS),
        Graha::Guru => Some(&JUPITER),
        Graha::Shani => Some(&SATURN),
        _ => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);
    let mut ecc_anom = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric J2000 ecliptic cartesian position in AU.
fn heliocentric(el: &Elements, t: f64) -> [f64; 3] {
    let at = |p: [f64; 2]| p[0] + p[1] * t;
    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.incl).to_radians();
    let mean_lon = at(el.mean_lon);
    let peri_lon = at(el.peri_lon);
    let node = at(el.node_lon);

    let arg_peri = (peri_lon - node).to_radians();
    let node = node.to_radians();
    let ecc_anom = solve_kepler((mean_lon - peri_lon).to_radians(), e);

    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geocentric J2000 ecliptic (longitude deg, latitude deg, distance AU).
///
/// Returns `None` for grahas without Keplerian elements (luminaries and nodes).
pub fn planet_ecliptic_j2000(graha: Graha, t: f64) -> Option<(f64, f64, f64)> {
    let el = elements_for(graha)?;
    let p = heliocentric(el, t);
    let earth = heliocentric(&EARTH_MOON, t);
    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    let z = p[2] - earth[2];
    let rho = x.hypot(y);
    Some((
        normalize_360(y.atan2(x).to_degrees()),
        z.atan2(rho).to_degrees(),
        (rho * rho + z * z).sqrt(),
    ))
}
