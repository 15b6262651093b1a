//! Sahams: sensitive points formed as `add - subtract + base` longitudes.
//!
//! The catalog holds the classical sahams whose inputs are the ascendant,
//! graha longitudes or a fixed longitude. With night reversal enabled and
//! the Sun below the horizon (houses 1-6), reversible sahams swap their
//! added and subtracted terms.

use serde::Serialize;

use varsha_base::{Graha, normalize_360, rashi_index_of};

use crate::chart::AnnualChart;

/// Saham settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SahamConfig {
    /// Swap added/subtracted terms of reversible sahams for night charts.
    pub night_reversal: bool,
}

/// One input longitude of a saham formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SahamInput {
    Ascendant,
    Graha(Graha),
    /// Fixed sidereal longitude in degrees.
    Fixed(f64),
}

/// Catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Saham {
    Punya,
    Vidya,
    Asha,
    Bhratri,
    Gaurava,
    Pitri,
    Matri,
    Putra,
    Jeeva,
    Karma,
    Roga,
    Kali,
    Shastra,
    Bandhu,
    Paradara,
    Vanik,
    Vivaha,
    Shraddha,
    Jadya,
    Jalapatana,
}

impl Saham {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Punya => "Punya",
            Self::Vidya => "Vidya",
            Self::Asha => "Asha",
            Self::Bhratri => "Bhratri",
            Self::Gaurava => "Gaurava",
            Self::Pitri => "Pitri",
            Self::Matri => "Matri",
            Self::Putra => "Putra",
            Self::Jeeva => "Jeeva",
            Self::Karma => "Karma",
            Self::Roga => "Roga",
            Self::Kali => "Kali",
            Self::Shastra => "Shastra",
            Self::Bandhu => "Bandhu",
            Self::Paradara => "Paradara",
            Self::Vanik => "Vanik",
            Self::Vivaha => "Vivaha",
            Self::Shraddha => "Shraddha",
            Self::Jadya => "Jadya",
            Self::Jalapatana => "Jalapatana",
        }
    }
}

/// Catalog entry: longitude = add - subtract + base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SahamFormula {
    pub saham: Saham,
    pub add: SahamInput,
    pub subtract: SahamInput,
    pub base: SahamInput,
    /// Whether night reversal applies.
    pub reversible: bool,
}

impl SahamFormula {
    /// Signed terms in effect, `(input, +1.0 | -1.0)`.
    pub fn terms(&self, night: bool) -> [(SahamInput, f64); 3] {
        let (add, subtract) = if night && self.reversible {
            (self.subtract, self.add)
        } else {
            (self.add, self.subtract)
        };
        [(add, 1.0), (subtract, -1.0), (self.base, 1.0)]
    }
}

/// A computed saham point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SahamPoint {
    pub saham: Saham,
    pub longitude_deg: f64,
    pub rashi_index: u8,
    pub house: u8,
}

const ASC: SahamInput = SahamInput::Ascendant;

const fn g(graha: Graha) -> SahamInput {
    SahamInput::Graha(graha)
}

const fn formula(
    saham: Saham,
    add: SahamInput,
    subtract: SahamInput,
    base: SahamInput,
) -> SahamFormula {
    SahamFormula {
        saham,
        add,
        subtract,
        base,
        reversible: true,
    }
}

const fn fixed_by_day_and_night(mut formula: SahamFormula) -> SahamFormula {
    formula.reversible = false;
    formula
}

/// 15 deg Karka.
const JALAPATANA_POINT: f64 = 105.0;

/// The saham catalog, in output order.
pub const SAHAM_CATALOG: [SahamFormula; 20] = [
    formula(Saham::Punya, g(Graha::Chandra), g(Graha::Surya), ASC),
    formula(Saham::Vidya, g(Graha::Surya), g(Graha::Chandra), ASC),
    formula(Saham::Asha, g(Graha::Shani), g(Graha::Mangal), ASC),
    fixed_by_day_and_night(formula(Saham::Bhratri, g(Graha::Guru), g(Graha::Shani), ASC)),
    formula(Saham::Gaurava, g(Graha::Guru), g(Graha::Chandra), g(Graha::Surya)),
    formula(Saham::Pitri, g(Graha::Shani), g(Graha::Surya), ASC),
    formula(Saham::Matri, g(Graha::Chandra), g(Graha::Shukra), ASC),
    formula(Saham::Putra, g(Graha::Guru), g(Graha::Chandra), ASC),
    formula(Saham::Jeeva, g(Graha::Shani), g(Graha::Guru), ASC),
    formula(Saham::Karma, g(Graha::Mangal), g(Graha::Buddh), ASC),
    fixed_by_day_and_night(formula(Saham::Roga, ASC, g(Graha::Chandra), ASC)),
    formula(Saham::Kali, g(Graha::Guru), g(Graha::Mangal), ASC),
    formula(Saham::Shastra, g(Graha::Guru), g(Graha::Shani), g(Graha::Buddh)),
    formula(Saham::Bandhu, g(Graha::Buddh), g(Graha::Chandra), ASC),
    formula(Saham::Paradara, g(Graha::Shukra), g(Graha::Surya), ASC),
    formula(Saham::Vanik, g(Graha::Chandra), g(Graha::Buddh), ASC),
    formula(Saham::Vivaha, g(Graha::Shukra), g(Graha::Shani), ASC),
    formula(Saham::Shraddha, g(Graha::Shukra), g(Graha::Mangal), ASC),
    formula(Saham::Jadya, g(Graha::Mangal), g(Graha::Shani), g(Graha::Buddh)),
    formula(
        Saham::Jalapatana,
        SahamInput::Fixed(JALAPATANA_POINT),
        g(Graha::Shani),
        ASC,
    ),
];

fn input_longitude(chart: &AnnualChart, input: SahamInput) -> f64 {
    match input {
        SahamInput::Ascendant => chart.ascendant_deg,
        SahamInput::Graha(g) => chart.planet(g).longitude_deg,
        SahamInput::Fixed(lon) => lon,
    }
}

/// Whether the chart is a night chart: Sun in houses 1-6, below the horizon.
pub fn is_night_chart(chart: &AnnualChart) -> bool {
    (1..=6).contains(&chart.planet(Graha::Surya).house)
}

/// Evaluate one formula against a chart.
pub fn compute_saham(chart: &AnnualChart, formula: &SahamFormula, night: bool) -> SahamPoint {
    let sum: f64 = formula
        .terms(night)
        .iter()
        .map(|&(input, sign)| sign * input_longitude(chart, input))
        .sum();
    let longitude_deg = normalize_360(sum);
    SahamPoint {
        saham: formula.saham,
        longitude_deg,
        rashi_index: rashi_index_of(longitude_deg),
        house: chart.house_of(longitude_deg),
    }
}

/// Every catalog saham for `chart`, in catalog order.
pub fn compute_all_sahams(chart: &AnnualChart, config: &SahamConfig) -> Vec<SahamPoint> {
    let night = config.night_reversal && is_night_chart(chart);
    SAHAM_CATALOG
        .iter()
        .map(|formula| compute_saham(chart, formula, night))
        .collect()
}
