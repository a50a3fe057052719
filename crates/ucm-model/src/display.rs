//! Display-unit selection and one-way readout conversions.
//!
//! Conversion happens at the rendering boundary only. The physics works in
//! SI throughout; a converted value never re-enters a computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metres per second to miles per hour.
pub const MPS_TO_MPH: f64 = 2.236_936_292_054_402;

/// Metres to feet.
pub const M_TO_FT: f64 = 3.280_839_895_013_123;

/// Unit system for rendered readouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    /// Metres and metres per second.
    #[default]
    Metric,
    /// Feet and miles per hour.
    Imperial,
}

impl DisplayUnit {
    /// All selectable unit systems.
    pub const fn all() -> &'static [DisplayUnit] {
        &[Self::Metric, Self::Imperial]
    }

    /// Canonical lowercase name (matches the serialized form).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Display name for UI pickers.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Metric => "Metric (m, m/s)",
            Self::Imperial => "Imperial (ft, mph)",
        }
    }

    /// Convert a speed in m/s into this unit system for display.
    pub fn display_speed(&self, mps: f64) -> f64 {
        match self {
            Self::Metric => mps,
            Self::Imperial => mps * MPS_TO_MPH,
        }
    }

    /// Convert a length in metres into this unit system for display.
    pub fn display_length(&self, metres: f64) -> f64 {
        match self {
            Self::Metric => metres,
            Self::Imperial => metres * M_TO_FT,
        }
    }

    /// Suffix for rendered speeds.
    pub const fn speed_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    /// Suffix for rendered lengths.
    pub const fn length_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Imperial => "ft",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    /// Parse a unit-system name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(format!("Unknown display unit: {s}")),
        }
    }
}
