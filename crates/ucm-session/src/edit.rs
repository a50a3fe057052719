//! Configuration edits as the input surface delivers them.

use ucm_model::{CurveConfig, DisplayUnit};
use ucm_solver::coerce_numeric;

/// A single configuration edit.
///
/// Numeric fields arrive as raw text and are normalized through
/// [`coerce_numeric`]: garbage, blank input, and non-finite tokens all land
/// on `0.0` instead of surfacing an error mid-keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    /// Curve radius in metres.
    Radius(String),
    /// Vehicle speed in m/s.
    Speed(String),
    /// Bank angle in degrees.
    BankAngle(String),
    /// Coefficient of static friction.
    Friction(String),
    /// Gravitational acceleration in m/s².
    Gravity(String),
    /// Unit system for rendered readouts.
    Unit(DisplayUnit),
    /// Whether the diagram draws force vectors.
    ShowVectors(bool),
}

impl ConfigEdit {
    /// Configuration field this edit touches.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Radius(_) => "radius",
            Self::Speed(_) => "speed",
            Self::BankAngle(_) => "bank_angle",
            Self::Friction(_) => "friction",
            Self::Gravity(_) => "gravity",
            Self::Unit(_) => "display_unit",
            Self::ShowVectors(_) => "show_vectors",
        }
    }

    /// Write this edit into `config`, normalizing raw text first.
    pub fn apply_to(self, config: &mut CurveConfig) {
        match self {
            Self::Radius(raw) => config.radius_m = coerce_numeric(&raw),
            Self::Speed(raw) => config.speed_mps = coerce_numeric(&raw),
            Self::BankAngle(raw) => config.bank_angle_deg = coerce_numeric(&raw),
            Self::Friction(raw) => config.friction_coefficient = coerce_numeric(&raw),
            Self::Gravity(raw) => config.gravity_mps2 = coerce_numeric(&raw),
            Self::Unit(unit) => config.display_unit = unit,
            Self::ShowVectors(show) => config.show_vectors = show,
        }
    }
}
