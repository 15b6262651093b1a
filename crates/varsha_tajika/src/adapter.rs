//! Location-bound view over an [`Ephemeris`].

use varsha_base::{GeoLocation, Graha};
use varsha_core::{Ephemeris, GrahaState};
use varsha_time::Instant;

use crate::error::TajikaError;

/// Binds an ephemeris to one observer location and maps oracle failures to
/// [`TajikaError::MissingPosition`].
#[derive(Debug, Clone, Copy)]
pub struct EphemerisAdapter<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    location: &'a GeoLocation,
}

impl<'a, E: Ephemeris + ?Sized> EphemerisAdapter<'a, E> {
    pub fn new(ephemeris: &'a E, location: &'a GeoLocation) -> Self {
        Self {
            ephemeris,
            location,
        }
    }

    pub fn location(&self) -> &'a GeoLocation {
        self.location
    }

    /// Full sidereal state of `graha` at `at`.
    pub fn state(&self, graha: Graha, at: Instant) -> Result<GrahaState, TajikaError> {
        self.ephemeris
            .position(graha, at, self.location)
            .map_err(|source| TajikaError::MissingPosition { graha, source })
    }

    /// Sidereal longitude in degrees.
    pub fn longitude(&self, graha: Graha, at: Instant) -> Result<f64, TajikaError> {
        Ok(self.state(graha, at)?.longitude_deg)
    }

    /// Longitudinal speed in degrees/day.
    pub fn speed(&self, graha: Graha, at: Instant) -> Result<f64, TajikaError> {
        Ok(self.state(graha, at)?.speed_deg_per_day)
    }
}
