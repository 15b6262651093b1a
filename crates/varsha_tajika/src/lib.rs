//! Tajika annual chart (Varsha Pravesha) timing engine.
//!
//! Given a natal chart and a target year, [`compute_annual_timing`] finds the
//! solar return, casts the annual chart and derives:
//!
//! - the Muntha ([`advance_muntha`])
//! - the year lord ([`select_year_lord`])
//! - the Sahams ([`compute_all_sahams`])
//! - Tajika aspects ([`find_aspects`])
//! - the Mudda dasha ([`partition_mudda`])
//!
//! Positions and cusps come from the [`varsha_core::Ephemeris`] and
//! [`varsha_core::HouseSystem`] oracles. Every function is pure with respect
//! to deterministic oracles.

pub mod adapter;
pub mod annual;
pub mod aspect;
pub mod aspect_types;
pub mod chart;
pub mod error;
pub mod mudda;
pub mod muntha;
pub mod natal;
pub mod saham;
pub mod solar_return;
pub mod solar_return_types;
pub mod year_lord;

pub use adapter::EphemerisAdapter;
pub use annual::{AnnualTiming, TajikaConfig, compute_annual_timing};
pub use aspect::{aspect_between, distance_to_angle, find_aspects, match_aspect};
pub use aspect_types::{
    ALL_TAJIKA_ASPECTS, ApplyingMethod, AspectConfig, TajikaAspect, TajikaAspectRecord,
};
pub use chart::{AnnualChart, PlanetPosition, build_annual_chart};
pub use error::TajikaError;
pub use mudda::{
    MUDDA_YEAR_DAYS, MuddaPeriod, mudda_days, mudda_start_owner, partition_mudda, period_at,
    rotation_index,
};
pub use muntha::{Muntha, advance_muntha};
pub use natal::NatalChart;
pub use saham::{
    SAHAM_CATALOG, Saham, SahamConfig, SahamFormula, SahamInput, SahamPoint, compute_all_sahams,
    compute_saham, is_night_chart,
};
pub use solar_return::{birth_anniversary, solve_solar_return};
pub use solar_return_types::{SolarReturn, SolarReturnConfig};
pub use year_lord::{
    CandidateRole, YearLord, YearLordCandidate, dignity_score, house_score, select_year_lord,
};
