//! Persisted banked-curve configuration.

use serde::{Deserialize, Serialize};

use crate::display::DisplayUnit;

/// User-adjustable parameters of the banked-curve scene.
///
/// All physics fields are SI: metres, metres per second, degrees for the
/// bank angle, m/s^2 for gravity. `display_unit` and `show_vectors` are
/// rendering hints only and never feed a computation.
///
/// Deserialization fills missing fields from [`CurveConfig::default`], so a
/// partially-present payload (an older save, a hand-edited file) still
/// produces a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Curve radius in metres. Expected positive; default 50.
    pub radius_m: f64,
    /// Vehicle speed in metres per second. Expected non-negative; default 20.
    pub speed_mps: f64,
    /// Bank angle in degrees, measured from horizontal. Expected in
    /// `[0, 90)`; default 10.
    pub bank_angle_deg: f64,
    /// Coefficient of static friction between tyres and road. Expected
    /// non-negative; default 0.6.
    pub friction_coefficient: f64,
    /// Gravitational acceleration in m/s^2. Expected positive; default 9.81.
    pub gravity_mps2: f64,
    /// Unit system for rendered readouts.
    pub display_unit: DisplayUnit,
    /// Whether the embedding view draws the force-vector overlay.
    pub show_vectors: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            radius_m: 50.0,
            speed_mps: 20.0,
            bank_angle_deg: 10.0,
            friction_coefficient: 0.6,
            gravity_mps2: 9.81,
            display_unit: DisplayUnit::Metric,
            show_vectors: true,
        }
    }
}
