//! Types for Tajika aspect detection.

use serde::Serialize;

use varsha_base::Graha;

/// The five Tajika aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TajikaAspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspects in ascending angle order.
pub const ALL_TAJIKA_ASPECTS: [TajikaAspect; 5] = [
    TajikaAspect::Conjunction,
    TajikaAspect::Sextile,
    TajikaAspect::Square,
    TajikaAspect::Trine,
    TajikaAspect::Opposition,
];

impl TajikaAspect {
    /// Exact angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Maximum orb in degrees (inclusive).
    pub const fn orb_deg(self) -> f64 {
        match self {
            Self::Conjunction => 12.0,
            Self::Sextile => 6.0,
            Self::Square => 7.0,
            Self::Trine => 8.0,
            Self::Opposition => 9.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }
}

/// How applying/separating is decided.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ApplyingMethod {
    /// Sign of the orb's rate of change from the oracle speeds.
    #[default]
    RelativeSpeed,
    /// Advance the faster body by `speed * step_days` and compare orbs.
    ///
    /// Coarse: a one-day step misjudges aspects that perfect within the step.
    FiniteDifference { step_days: f64 },
}

/// Aspect engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AspectConfig {
    pub applying: ApplyingMethod,
}

impl AspectConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let ApplyingMethod::FiniteDifference { step_days } = self.applying {
            if !step_days.is_finite() || step_days <= 0.0 {
                return Err("step_days must be positive");
            }
        }
        Ok(())
    }
}

/// One detected aspect between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TajikaAspectRecord {
    pub first: Graha,
    pub second: Graha,
    pub aspect: TajikaAspect,
    /// Distance from the exact angle, degrees.
    pub orb_deg: f64,
    pub applying: bool,
}

impl TajikaAspectRecord {
    pub fn angle_deg(&self) -> f64 {
        self.aspect.angle_deg()
    }
}
