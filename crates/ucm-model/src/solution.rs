//! Solver output types.
//!
//! A [`SolverResult`] is derived state: recomputed from the configuration on
//! every edit, never persisted, and safe to discard at any time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the configured speed sits relative to the safe-speed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStatus {
    /// Speed sits inside the envelope; friction can hold the vehicle.
    Inside,
    /// Speed is below the minimum safe speed; the vehicle tends to slide
    /// down the bank toward the centre.
    TooSlow,
    /// Speed is above the maximum safe speed; the vehicle tends to slide
    /// up the bank and out of the curve.
    TooFast,
}

impl SafetyStatus {
    /// All classifications.
    pub const fn all() -> &'static [SafetyStatus] {
        &[Self::Inside, Self::TooSlow, Self::TooFast]
    }

    /// Canonical snake_case name (matches the serialized form).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::TooSlow => "too_slow",
            Self::TooFast => "too_fast",
        }
    }

    /// Short status line for readouts.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Inside => "within the safe-speed range",
            Self::TooSlow => "below the minimum safe speed",
            Self::TooFast => "above the maximum safe speed",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SafetyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inside" => Ok(Self::Inside),
            "too_slow" => Ok(Self::TooSlow),
            "too_fast" => Ok(Self::TooFast),
            _ => Err(format!("Unknown safety status: {s}")),
        }
    }
}

/// Which way the cross-section diagram draws the friction arrow.
///
/// Pure rendering hint. The [`scale`](FrictionDirection::scale) factor sets
/// the arrow's direction and length on screen and carries no physical
/// meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionDirection {
    /// Down the slope, toward the centre of the curve. Drawn when the
    /// vehicle runs too fast and tends to slide outward.
    Inward,
    /// Up the slope, away from the centre. Drawn when the vehicle runs too
    /// slow and tends to slide inward.
    Outward,
    /// Faint trace arrow while the speed sits inside the envelope.
    Trace,
}

impl FrictionDirection {
    /// Drawing factor for the diagram arrow.
    pub const fn scale(&self) -> f64 {
        match self {
            Self::Inward => -1.0,
            Self::Outward => 1.0,
            Self::Trace => 0.25,
        }
    }

    /// Arrow hint matching a safety classification.
    pub const fn for_status(status: SafetyStatus) -> Self {
        match status {
            SafetyStatus::TooFast => Self::Inward,
            SafetyStatus::TooSlow => Self::Outward,
            SafetyStatus::Inside => Self::Trace,
        }
    }
}

/// Derived outputs of a banked-curve solve.
///
/// Every field is finite; degenerate geometry is reported through sentinel
/// values (`min_safe_speed = 0`, `max_safe_speed = None`) rather than NaN or
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// Bank angle in degrees that needs no friction at the configured speed.
    pub required_angle_deg: f64,
    /// Lower edge of the safe-speed envelope in m/s. `0.0` when every speed
    /// down to rest holds.
    pub min_safe_speed: f64,
    /// Upper edge of the safe-speed envelope in m/s. `None` when bank plus
    /// friction hold the vehicle at any speed, so no finite ceiling exists.
    /// `Some(0.0)` is a real ceiling (a flat frictionless road); callers
    /// must match on the `Option` rather than coerce `None` to a number.
    pub max_safe_speed: Option<f64>,
    /// Friction-only ceiling on an unbanked road, in m/s.
    pub flat_road_max_speed: f64,
    /// Classification of the configured speed against the envelope.
    pub status: SafetyStatus,
    /// Friction-arrow hint for the diagram.
    pub friction: FrictionDirection,
}

impl SolverResult {
    /// True when no finite speed ceiling exists for this geometry.
    pub const fn is_unbounded(&self) -> bool {
        self.max_safe_speed.is_none()
    }
}
