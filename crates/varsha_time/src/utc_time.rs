//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the calendar-facing form of an [`Instant`](crate::Instant).
//! Leap seconds are not modelled: the engine works on a continuous UT day count.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check every field against the Gregorian calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate(format!("month {}", self.month)));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {} of {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "time {:02}:{:02}",
                self.hour, self.minute
            )));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!("second {}", self.second)));
        }
        Ok(())
    }

    /// Fraction of the day elapsed since midnight, [0, 1).
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0) / 24.0
    }

    /// Julian Date (UT) of this calendar value.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.day_fraction())
    }

    /// Calendar value of a Julian Date (UT).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = ((total_seconds / 3600.0).floor() as u32).min(23);
        let minute = (((total_seconds % 3600.0) / 60.0).floor() as u32).min(59);
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ` (fractional seconds and a missing `Z` accepted)
    /// or a bare `YYYY-MM-DD` (midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(s.to_string());
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = match trimmed.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        // A leading '-' would belong to a negative year; not supported.
        let mut date_parts = date.splitn(3, '-');
        let year: i32 = date_parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(parse_err)?;
        let month: u32 = date_parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(parse_err)?;
        let day: u32 = date_parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(parse_err)?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut time_parts = t.splitn(3, ':');
                let hour: u32 = time_parts
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(parse_err)?;
                let minute: u32 = time_parts
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(parse_err)?;
                let second: f64 = match time_parts.next() {
                    Some(v) => v.parse().map_err(|_| parse_err())?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn parse_full_timestamp() {
        let t: UtcTime = "1990-01-15T06:30:00Z".parse().unwrap();
        assert_eq!(t, UtcTime::new(1990, 1, 15, 6, 30, 0.0));
    }

    #[test]
    fn parse_date_only() {
        let t: UtcTime = "2024-02-29".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 2, 29, 0, 0, 0.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("yesterday".parse::<UtcTime>().is_err());
        assert!("2024-13-01T00:00:00Z".parse::<UtcTime>().is_err());
        assert!("2023-02-29T00:00:00Z".parse::<UtcTime>().is_err());
        assert!("2024-01-01T24:00:00Z".parse::<UtcTime>().is_err());
    }

    #[test]
    fn jd_roundtrip_to_the_second() {
        let t = UtcTime::new(1985, 7, 23, 18, 45, 12.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (1985, 7, 23));
        assert_eq!((back.hour, back.minute), (18, 45));
        assert!((back.second - 12.0).abs() < 1e-3);
    }

    #[test]
    fn day_fraction_noon() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.day_fraction() - 0.5).abs() < 1e-12);
        assert!((t.to_jd() - 2_451_545.0).abs() < 1e-9);
    }
}
