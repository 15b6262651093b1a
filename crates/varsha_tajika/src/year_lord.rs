//! Year lord (Varsheshwara) selection.
//!
//! Three candidates are scored from their annual-chart placement:
//!
//! | condition | score |
//! |---|---|
//! | angular house (1, 4, 7, 10) | +15 |
//! | house 6, 8 or 12 | -15 |
//! | exaltation sign | +25 |
//! | own sign | +20 |
//! | debilitation sign | -25 |
//!
//! The highest score wins; ties go to the earliest candidate in
//! [`CandidateRole`] order.

use serde::Serialize;

use varsha_base::{
    Graha, SignDignity, Vaar, is_dusthana, is_kendra, rashi_lord_by_index, sign_dignity,
};

use crate::chart::AnnualChart;
use crate::muntha::Muntha;

const KENDRA_SCORE: i32 = 15;
const DUSTHANA_SCORE: i32 = -15;

/// Why a graha is a year-lord candidate, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CandidateRole {
    /// Lord of the weekday of the solar-return instant.
    WeekdayLord,
    /// Lord of the annual ascendant sign.
    AscendantLord,
    /// Lord of the Muntha sign.
    MunthaLord,
}

/// One scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearLordCandidate {
    pub role: CandidateRole,
    pub graha: Graha,
    pub house: u8,
    pub dignity: SignDignity,
    pub score: i32,
}

/// Selected year lord with all three scored candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearLord {
    pub graha: Graha,
    pub role: CandidateRole,
    pub candidates: [YearLordCandidate; 3],
}

/// Score contribution of a sign dignity.
pub const fn dignity_score(dignity: SignDignity) -> i32 {
    match dignity {
        SignDignity::Exalted => 25,
        SignDignity::OwnSign => 20,
        SignDignity::Debilitated => -25,
        SignDignity::Neutral => 0,
    }
}

/// Score contribution of a house placement.
pub const fn house_score(house: u8) -> i32 {
    if is_kendra(house) {
        KENDRA_SCORE
    } else if is_dusthana(house) {
        DUSTHANA_SCORE
    } else {
        0
    }
}

fn score_candidate(chart: &AnnualChart, role: CandidateRole, graha: Graha) -> YearLordCandidate {
    let p = chart.planet(graha);
    let dignity = sign_dignity(graha, p.rashi_index);
    YearLordCandidate {
        role,
        graha,
        house: p.house,
        dignity,
        score: house_score(p.house) + dignity_score(dignity),
    }
}

/// Pick the year lord from the weekday lord, the annual ascendant lord and
/// the Muntha lord.
///
/// The weekday is the local mean-time civil day at the chart location.
pub fn select_year_lord(chart: &AnnualChart, muntha: &Muntha) -> YearLord {
    let weekday = chart.instant.local_weekday(chart.location.longitude_deg);
    let candidates = [
        score_candidate(
            chart,
            CandidateRole::WeekdayLord,
            Vaar::from_weekday_index(weekday).lord(),
        ),
        score_candidate(
            chart,
            CandidateRole::AscendantLord,
            rashi_lord_by_index(chart.ascendant_sign()),
        ),
        score_candidate(chart, CandidateRole::MunthaLord, muntha.lord),
    ];

    let mut best = candidates[0];
    for c in &candidates[1..] {
        // strict: an equal score never displaces an earlier candidate
        if c.score > best.score {
            best = *c;
        }
    }

    YearLord {
        graha: best.graha,
        role: best.role,
        candidates,
    }
}
