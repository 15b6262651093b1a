//! Continuous time for the varsha engine.
//!
//! This crate provides:
//! - Julian Date <-> Gregorian calendar conversions
//! - `Instant`, a totally ordered point on a continuous UT day count
//! - `UtcTime` calendar values with parsing and display
//! - Mean sidereal time for ascendant computation

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use serde::Serialize;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries, weekday_index,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::UtcTime;

/// A point in time as a Julian Date on the UT scale.
///
/// Always finite, so ordering is total. Adding a fractional day count yields
/// a new instant; subtracting two instants yields their difference in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Instant {
    jd: f64,
}

impl Instant {
    /// Create an instant from a Julian Date, rejecting NaN and infinities.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if jd.is_finite() {
            Ok(Self { jd })
        } else {
            Err(TimeError::NonFinite)
        }
    }

    /// Create an instant from a validated UTC calendar value.
    pub fn from_utc(utc: &UtcTime) -> Result<Self, TimeError> {
        utc.validate()?;
        Self::from_jd(utc.to_jd())
    }

    /// Julian Date (UT).
    pub fn jd(self) -> f64 {
        self.jd
    }

    /// Calendar form of this instant.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd(self.jd)
    }

    /// Gregorian year containing this instant.
    pub fn year(self) -> i32 {
        jd_to_calendar(self.jd).0
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// Days elapsed from `earlier` to `self` (negative if `self` is earlier).
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd - earlier.jd
    }

    /// Midpoint between two instants.
    pub fn midpoint(self, other: Instant) -> Self {
        Self {
            jd: 0.5 * (self.jd + other.jd),
        }
    }

    /// Civil weekday (0 = Sunday) in local mean time at an east-positive longitude.
    pub fn local_weekday(self, longitude_deg: f64) -> u8 {
        weekday_index(self.jd + longitude_deg / 360.0)
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.jd.total_cmp(&other.jd)
    }
}

impl Add<f64> for Instant {
    type Output = Instant;

    fn add(self, days: f64) -> Instant {
        self.add_days(days)
    }
}

impl Sub for Instant {
    type Output = f64;

    fn sub(self, rhs: Instant) -> f64 {
        self.days_since(rhs)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (JD {:.6})", self.to_utc(), self.jd)
    }
}
