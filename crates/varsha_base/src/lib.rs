//! Angle math and jyotish reference tables for the varsha engine.
//!
//! This crate provides:
//! - Ecliptic angle normalization, separation and orb distance
//! - Graha, rashi and nakshatra enums with lordship
//! - Sign dignity (exaltation, own sign, debilitation)
//! - Weekday lords
//! - House lookup against twelve cusps
//!
//! Everything here is pure: longitudes in, classifications out.

pub mod angle;
pub mod bhava;
pub mod dignity;
pub mod graha;
pub mod location;
pub mod nakshatra;
pub mod rashi;
pub mod vaar;

pub use angle::{angular_separation, forward_arc, normalize_360, normalize_pm180, orb_distance};
pub use bhava::{CuspError, house_of_longitude, is_dusthana, is_kendra, validate_cusps};
pub use dignity::{
    SignDignity, debilitation_degree, exaltation_degree, own_signs, sign_dignity,
};
pub use graha::{
    ALL_GRAHAS, Graha, SAPTA_GRAHAS, UnknownGraha, rashi_lord, rashi_lord_by_index,
};
pub use location::{GeoLocation, LocationError};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    VIMSHOTTARI_SEQUENCE, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude, rashi_index_of};
pub use vaar::{ALL_VAARS, Vaar};
