//! TOML settings for the varsha engine.
//!
//! Every section and field is optional; missing values take the engine
//! defaults. [`Settings::validate`] runs after parsing so a bad file fails
//! before any computation starts.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use varsha_ephem::{AnalyticEphemeris, AnalyticHouses, AyanamshaSystem, HouseDivision};
use varsha_tajika::{
    ApplyingMethod, AspectConfig, SahamConfig, SolarReturnConfig, TajikaConfig,
};

/// Errors from loading settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub ephemeris: EphemerisSettings,
    pub solver: SolverSettings,
    pub aspects: AspectSettings,
    pub sahams: SahamSettings,
}

/// Oracle selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisSettings {
    pub ayanamsha: AyanamshaSystem,
    pub houses: HouseDivision,
}

/// Solar-return search window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    pub window_days: f64,
    pub widened_window_days: f64,
    pub iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let d = SolarReturnConfig::default();
        Self {
            window_days: d.window_days,
            widened_window_days: d.widened_window_days,
            iterations: d.iterations,
        }
    }
}

/// Applying/separating method name as written in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyingKind {
    #[default]
    RelativeSpeed,
    FiniteDifference,
}

/// Aspect settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AspectSettings {
    pub applying: ApplyingKind,
    /// Step for the finite-difference method, days.
    pub step_days: f64,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            applying: ApplyingKind::default(),
            step_days: 1.0,
        }
    }
}

/// Saham settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SahamSettings {
    pub night_reversal: bool,
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Settings {
    /// Read and validate a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = content.parse()?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Settings from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tajika_config().validate().map_err(ConfigError::Invalid)
    }

    /// Engine configuration for [`varsha_tajika::compute_annual_timing`].
    pub fn tajika_config(&self) -> TajikaConfig {
        let applying = match self.aspects.applying {
            ApplyingKind::RelativeSpeed => ApplyingMethod::RelativeSpeed,
            ApplyingKind::FiniteDifference => ApplyingMethod::FiniteDifference {
                step_days: self.aspects.step_days,
            },
        };
        TajikaConfig {
            solar_return: SolarReturnConfig {
                window_days: self.solver.window_days,
                widened_window_days: self.solver.widened_window_days,
                iterations: self.solver.iterations,
            },
            aspects: AspectConfig { applying },
            sahams: SahamConfig {
                night_reversal: self.sahams.night_reversal,
            },
        }
    }

    /// Ephemeris oracle described by these settings.
    pub fn ephemeris(&self) -> AnalyticEphemeris {
        AnalyticEphemeris::new(self.ephemeris.ayanamsha)
    }

    /// House oracle described by these settings.
    pub fn houses(&self) -> AnalyticHouses {
        AnalyticHouses::new(self.ephemeris.houses, self.ephemeris.ayanamsha)
    }
}
