//! Closed-form banked-curve physics.
//!
//! Working in SI with `s = sin(bank)`, `c = cos(bank)`, `mu` the friction
//! coefficient, and `rg = max(0, radius * gravity)`:
//!
//! - required frictionless angle: `atan(v^2 / (r * g))`
//! - speed ceiling: `v_max^2 = rg * (s + mu*c) / (c - mu*s)` while
//!   `c - mu*s > 0`
//! - speed floor: `v_min^2 = rg * (s - mu*c) / (c + mu*s)` while positive
//! - flat road: `v^2 = mu * g * r`
//!
//! When `c - mu*s <= 0` the bank and friction supply the needed centripetal
//! force at any speed, so no finite ceiling exists and the envelope is open
//! above. Angles convert to radians internally; returned angles are degrees.

use ucm_model::{CurveConfig, FrictionDirection, SafetyStatus, SolverResult};

use crate::normalize::{finite_or_zero, sanitize_config};

/// Classification tolerance in m/s. Keeps float dust at the envelope edges
/// from flipping the status.
pub const EPS: f64 = 1e-6;

/// Square root that saturates an overflowed square to `f64::MAX`.
///
/// Absurd magnitudes (a 1e308 m radius) can overflow the intermediate
/// products; the envelope stays finite instead of leaking an infinity into
/// derived state.
fn saturating_sqrt(squared: f64) -> f64 {
    if squared.is_finite() {
        squared.sqrt()
    } else {
        f64::MAX
    }
}

/// Bank angle in degrees that needs no friction at `speed_mps`.
///
/// Strictly increasing in speed and strictly decreasing in radius over the
/// documented domain. Degenerate geometry (`radius * gravity <= 0`)
/// saturates at the limit values: 90 degrees for a moving vehicle, 0 at
/// rest.
pub fn required_angle_deg(speed_mps: f64, radius_m: f64, gravity_mps2: f64) -> f64 {
    let speed = finite_or_zero(speed_mps);
    let rg = finite_or_zero(radius_m) * finite_or_zero(gravity_mps2);
    if rg > 0.0 {
        let ratio = speed * speed / rg;
        // An overflowed square means the angle limit is vertical anyway.
        if ratio.is_finite() {
            ratio.atan().to_degrees()
        } else {
            90.0
        }
    } else if speed != 0.0 {
        90.0
    } else {
        0.0
    }
}

/// Friction-bounded safe-speed envelope `(min, max)` in m/s.
///
/// The floor is `0.0` when every speed down to rest holds. The ceiling is
/// `None` when `cos(bank) - mu * sin(bank) <= 0`, the geometry with no
/// finite ceiling; otherwise `Some`, including `Some(0.0)` for a flat
/// frictionless road.
pub fn safe_speed_envelope(
    radius_m: f64,
    bank_angle_deg: f64,
    friction_coefficient: f64,
    gravity_mps2: f64,
) -> (f64, Option<f64>) {
    let bank = finite_or_zero(bank_angle_deg).to_radians();
    let (s, c) = bank.sin_cos();
    let mu = finite_or_zero(friction_coefficient);
    // Clamped so the square-root arguments stay non-negative for
    // out-of-domain (negative radius or gravity) input.
    let rg = (finite_or_zero(radius_m) * finite_or_zero(gravity_mps2)).max(0.0);

    let denom_max = c - mu * s;
    let max = if denom_max > 0.0 {
        // The max(0) also guards the root against out-of-domain negative
        // friction coefficients.
        let squared = (rg * (s + mu * c) / denom_max).max(0.0);
        Some(saturating_sqrt(squared))
    } else {
        None
    };

    let denom_min = c + mu * s;
    let min = if denom_min > 0.0 {
        let term = (s - mu * c) / denom_min;
        if term > 0.0 {
            saturating_sqrt(rg * term)
        } else {
            0.0
        }
    } else {
        0.0
    };

    (min, max)
}

/// Friction-only speed ceiling on an unbanked road, in m/s.
pub fn flat_road_max_speed(radius_m: f64, friction_coefficient: f64, gravity_mps2: f64) -> f64 {
    let squared = finite_or_zero(friction_coefficient)
        * finite_or_zero(gravity_mps2)
        * finite_or_zero(radius_m);
    saturating_sqrt(squared.max(0.0))
}

/// Solve the banked-curve scene for a configuration.
///
/// Total over arbitrary input: the configuration is sanitized at entry and
/// every output field is finite. Degenerate geometry reports through the
/// sentinel values documented on [`SolverResult`], never through NaN or an
/// error.
pub fn solve(config: &CurveConfig) -> SolverResult {
    let config = sanitize_config(*config);
    let speed = config.speed_mps;

    let required_angle_deg =
        required_angle_deg(config.speed_mps, config.radius_m, config.gravity_mps2);
    let (min_safe_speed, max_safe_speed) = safe_speed_envelope(
        config.radius_m,
        config.bank_angle_deg,
        config.friction_coefficient,
        config.gravity_mps2,
    );
    let flat_road_max_speed = flat_road_max_speed(
        config.radius_m,
        config.friction_coefficient,
        config.gravity_mps2,
    );

    // Both bounds are checked explicitly; an open ceiling can never be
    // exceeded. Exceeding the ceiling wins over undercutting the floor.
    let too_fast = matches!(max_safe_speed, Some(vmax) if speed > vmax + EPS);
    let too_slow = speed < min_safe_speed - EPS;
    let status = if too_fast {
        SafetyStatus::TooFast
    } else if too_slow {
        SafetyStatus::TooSlow
    } else {
        SafetyStatus::Inside
    };

    SolverResult {
        required_angle_deg,
        min_safe_speed,
        max_safe_speed,
        flat_road_max_speed,
        status,
        friction: FrictionDirection::for_status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scene(radius: f64, speed: f64, bank: f64, mu: f64) -> CurveConfig {
        CurveConfig {
            radius_m: radius,
            speed_mps: speed,
            bank_angle_deg: bank,
            friction_coefficient: mu,
            ..CurveConfig::default()
        }
    }

    #[test]
    fn test_default_scene_is_inside_the_envelope() {
        let result = solve(&scene(50.0, 20.0, 10.0, 0.6));
        assert_relative_eq!(
            result.required_angle_deg,
            39.197_050_897_473_275,
            max_relative = 1e-12
        );
        assert_eq!(result.min_safe_speed, 0.0);
        let vmax = result.max_safe_speed.expect("bounded ceiling");
        assert_relative_eq!(vmax, 20.635_908_213_569_355, max_relative = 1e-12);
        assert_relative_eq!(
            result.flat_road_max_speed,
            17.155_174_146_594_955,
            max_relative = 1e-12
        );
        assert_eq!(result.status, SafetyStatus::Inside);
        assert_eq!(result.friction, FrictionDirection::Trace);
    }

    #[test]
    fn test_speeding_classifies_too_fast() {
        let result = solve(&scene(50.0, 25.0, 10.0, 0.6));
        assert_eq!(result.status, SafetyStatus::TooFast);
        assert_eq!(result.friction, FrictionDirection::Inward);
    }

    #[test]
    fn test_steep_slick_bank_classifies_too_slow() {
        // A 45 degree bank with weak friction cannot hold a slow vehicle.
        let result = solve(&scene(50.0, 10.0, 45.0, 0.2));
        assert_relative_eq!(
            result.min_safe_speed,
            18.083_141_320_025_12,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.max_safe_speed.expect("bounded ceiling"),
            27.124_711_980_037_688,
            max_relative = 1e-12
        );
        assert_eq!(result.status, SafetyStatus::TooSlow);
        assert_eq!(result.friction, FrictionDirection::Outward);
    }

    #[test]
    fn test_flat_frictionless_road_has_a_zero_ceiling() {
        let result = solve(&scene(50.0, 20.0, 0.0, 0.0));
        assert_eq!(result.max_safe_speed, Some(0.0));
        assert_eq!(result.min_safe_speed, 0.0);
        assert_eq!(result.flat_road_max_speed, 0.0);
        assert_eq!(result.status, SafetyStatus::TooFast);
    }

    #[test]
    fn test_flat_frictionless_road_at_rest_is_inside() {
        let result = solve(&scene(50.0, 0.0, 0.0, 0.0));
        assert_eq!(result.max_safe_speed, Some(0.0));
        assert_eq!(result.status, SafetyStatus::Inside);
    }

    #[test]
    fn test_steep_grippy_bank_has_no_ceiling() {
        // cos(60) - 0.7 * sin(60) < 0: friction plus bank hold any speed.
        let result = solve(&scene(50.0, 60.0, 60.0, 0.7));
        assert_eq!(result.max_safe_speed, None);
        assert!(result.is_unbounded());
        assert_eq!(result.status, SafetyStatus::Inside);
        assert_relative_eq!(
            result.min_safe_speed,
            15.126_370_347_088_715,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.flat_road_max_speed,
            18.529_705_880_018_71,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_unbounded_geometry_still_bounds_below() {
        let result = solve(&scene(50.0, 10.0, 60.0, 0.7));
        assert_eq!(result.max_safe_speed, None);
        assert_eq!(result.status, SafetyStatus::TooSlow);
    }

    #[test]
    fn test_degenerate_radius_keeps_outputs_finite() {
        for radius in [0.0, -50.0] {
            let result = solve(&scene(radius, 20.0, 10.0, 0.6));
            assert_eq!(result.required_angle_deg, 90.0);
            assert!(result.min_safe_speed.is_finite());
            assert!(result.flat_road_max_speed.is_finite());
            if let Some(vmax) = result.max_safe_speed {
                assert!(vmax.is_finite());
            }
        }
    }

    #[test]
    fn test_degenerate_radius_at_rest_has_zero_required_angle() {
        let result = solve(&scene(0.0, 0.0, 10.0, 0.6));
        assert_eq!(result.required_angle_deg, 0.0);
    }

    #[test]
    fn test_overflowing_magnitudes_saturate_instead_of_leaking_infinity() {
        let result = solve(&scene(1e308, 20.0, 10.0, 0.6));
        assert!(result.required_angle_deg.is_finite());
        assert!(result.min_safe_speed.is_finite());
        assert!(result.flat_road_max_speed.is_finite());
        assert_eq!(result.max_safe_speed, Some(f64::MAX));
        assert_eq!(result.status, SafetyStatus::Inside);
    }

    #[test]
    fn test_non_finite_config_solves_like_zeroes() {
        let garbage = scene(f64::NAN, f64::INFINITY, f64::NAN, f64::NEG_INFINITY);
        let zeroed = scene(0.0, 0.0, 0.0, 0.0);
        assert_eq!(solve(&garbage), solve(&zeroed));
    }

    #[test]
    fn test_required_angle_reference_points() {
        assert_relative_eq!(
            required_angle_deg(20.0, 80.0, 9.81),
            27.007_211_290_791_42,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            required_angle_deg(21.0, 50.0, 9.81),
            41.958_157_843_381_63,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            required_angle_deg(20.0, 51.0, 9.81),
            38.642_486_323_495_156,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_envelope_reference_points() {
        let (min, max) = safe_speed_envelope(60.0, 15.0, 0.5, 9.81);
        assert_eq!(min, 0.0);
        assert_relative_eq!(
            max.expect("bounded ceiling"),
            22.846_046_533_811_24,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_classification_tolerance_absorbs_edge_dust() {
        let (_, max) = safe_speed_envelope(50.0, 10.0, 0.6, 9.81);
        let vmax = max.expect("bounded ceiling");
        // Exactly on the edge counts as inside.
        let result = solve(&scene(50.0, vmax, 10.0, 0.6));
        assert_eq!(result.status, SafetyStatus::Inside);
        // Clearly past the tolerance does not.
        let result = solve(&scene(50.0, vmax + 1e-3, 10.0, 0.6));
        assert_eq!(result.status, SafetyStatus::TooFast);
    }
}
