//! Mudda dasha: the annual Vimshottari compressed into a 360-day year.
//!
//! Nine periods in Vimshottari order, each lasting the graha's Vimshottari
//! years times 3 days. Durations are bound to the graha, not to the slot in
//! the rotation, so every starting owner yields the same 360-day total.

use serde::Serialize;

use varsha_base::{Graha, VIMSHOTTARI_SEQUENCE, nakshatra_from_longitude};
use varsha_time::Instant;

/// Length of the Mudda year in days.
pub const MUDDA_YEAR_DAYS: f64 = 360.0;

/// Mudda period length of a graha, in days.
pub const fn mudda_days(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 18.0,
        Graha::Chandra => 30.0,
        Graha::Mangal => 21.0,
        Graha::Rahu => 54.0,
        Graha::Guru => 48.0,
        Graha::Shani => 57.0,
        Graha::Buddh => 51.0,
        Graha::Ketu => 21.0,
        Graha::Shukra => 60.0,
    }
}

/// One Mudda sub-period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuddaPeriod {
    pub graha: Graha,
    pub start: Instant,
    pub duration_days: f64,
}

impl MuddaPeriod {
    /// Exclusive end instant.
    pub fn end(&self) -> Instant {
        self.start.add_days(self.duration_days)
    }

    /// Whether `at` falls inside [start, end).
    pub fn contains(&self, at: Instant) -> bool {
        at >= self.start && at < self.end()
    }
}

/// Position of `graha` in the Vimshottari rotation.
pub fn rotation_index(graha: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == graha)
        .unwrap_or(0)
}

/// Lord of the nakshatra containing the annual Moon.
pub fn mudda_start_owner(moon_longitude_deg: f64) -> Graha {
    nakshatra_from_longitude(moon_longitude_deg).lord
}

/// Lay the nine periods back to back from `start`, beginning with `owner`.
pub fn partition_mudda(start: Instant, owner: Graha) -> [MuddaPeriod; 9] {
    let first = rotation_index(owner);
    let mut periods = [MuddaPeriod {
        graha: owner,
        start,
        duration_days: 0.0,
    }; 9];
    let mut at = start;
    for (k, slot) in periods.iter_mut().enumerate() {
        let graha = VIMSHOTTARI_SEQUENCE[(first + k) % 9];
        let duration_days = mudda_days(graha);
        *slot = MuddaPeriod {
            graha,
            start: at,
            duration_days,
        };
        at = at.add_days(duration_days);
    }
    periods
}

/// The period running at `at`, if it lies within the Mudda year.
pub fn period_at(periods: &[MuddaPeriod], at: Instant) -> Option<&MuddaPeriod> {
    periods.iter().find(|p| p.contains(at))
}
