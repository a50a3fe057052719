//! Form-input normalization.
//!
//! Numeric parameters arrive as free text from an embedding form. The
//! normalization rules turn arbitrary text into finite numbers and never
//! fail:
//! - empty or unparseable text coerces to `0.0`
//! - text that parses to NaN or an infinity coerces to `0.0`
//!
//! The guarantee is *finite*, not *in-domain*: a negative radius still
//! reaches the solver, which has to produce finite outputs for it.

use ucm_model::CurveConfig;

/// Coerce arbitrary form text into a finite number.
///
/// # Examples
/// ```
/// use ucm_solver::coerce_numeric;
///
/// assert_eq!(coerce_numeric("42.5"), 42.5);
/// assert_eq!(coerce_numeric("  -3 "), -3.0);
/// assert_eq!(coerce_numeric("1e2"), 100.0);
/// assert_eq!(coerce_numeric(""), 0.0);
/// assert_eq!(coerce_numeric("fast"), 0.0);
/// assert_eq!(coerce_numeric("NaN"), 0.0);
/// assert_eq!(coerce_numeric("inf"), 0.0);
/// ```
pub fn coerce_numeric(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// Replace NaN or an infinity with `0.0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Force every numeric field of a configuration finite.
///
/// Does not clamp to the documented parameter domains; finite but
/// out-of-domain values pass through unchanged so the solver's
/// degenerate-geometry handling stays observable.
pub fn sanitize_config(config: CurveConfig) -> CurveConfig {
    CurveConfig {
        radius_m: finite_or_zero(config.radius_m),
        speed_mps: finite_or_zero(config.speed_mps),
        bank_angle_deg: finite_or_zero(config.bank_angle_deg),
        friction_coefficient: finite_or_zero(config.friction_coefficient),
        gravity_mps2: finite_or_zero(config.gravity_mps2),
        ..config
    }
}
