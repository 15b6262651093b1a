//! Types for the solar-return search.

use serde::Serialize;

use varsha_time::Instant;

/// Search window and refinement settings for the solar-return solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarReturnConfig {
    /// Half-width of the first bracket around the birth anniversary, days.
    pub window_days: f64,
    /// Half-width used for the single retry when the first bracket fails.
    pub widened_window_days: f64,
    /// Fixed number of bisection halvings.
    pub iterations: u32,
}

impl Default for SolarReturnConfig {
    fn default() -> Self {
        Self {
            window_days: 2.0,
            widened_window_days: 8.0,
            iterations: 30,
        }
    }
}

impl SolarReturnConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.window_days.is_finite() || self.window_days <= 0.0 {
            return Err("window_days must be positive");
        }
        if !self.widened_window_days.is_finite() || self.widened_window_days < self.window_days {
            return Err("widened_window_days must be >= window_days");
        }
        if self.widened_window_days > 60.0 {
            return Err("widened_window_days must be <= 60");
        }
        if self.iterations == 0 {
            return Err("iterations must be > 0");
        }
        Ok(())
    }
}

/// A located solar return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarReturn {
    /// Instant the transiting Sun reaches the natal Sun longitude.
    pub instant: Instant,
    /// Sun's sidereal longitude at `instant`.
    pub sun_longitude_deg: f64,
    /// Birth anniversary the search window was centred on.
    pub anniversary: Instant,
    /// Half-width of the bracket that contained the root, days.
    pub window_days: f64,
}

impl SolarReturn {
    /// Whether the widened retry window was needed.
    pub fn used_widened_window(&self, config: &SolarReturnConfig) -> bool {
        self.window_days > config.window_days
    }
}
