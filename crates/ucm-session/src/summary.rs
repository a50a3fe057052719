//! Plain-text readout of a solve.

use ucm_model::{CurveConfig, SafetyStatus, SolverResult};

/// Render a multi-line report of a solve, with speeds and lengths shown in
/// the configured display unit.
///
/// Angles stay in degrees regardless of the unit system, and conversion
/// never feeds back into the solve.
#[must_use]
pub fn render(config: &CurveConfig, result: &SolverResult) -> String {
    let unit = config.display_unit;
    let mut lines = Vec::new();

    lines.push("=== Banked Curve Report ===".to_string());
    lines.push(format!(
        "Radius: {:.1} {}",
        unit.display_length(config.radius_m),
        unit.length_suffix()
    ));
    lines.push(format!("Bank angle: {:.1}°", config.bank_angle_deg));
    lines.push(format!(
        "Friction coefficient: {:.2}",
        config.friction_coefficient
    ));
    lines.push(format!("Gravity: {} m/s²", config.gravity_mps2));
    lines.push(format!(
        "Speed: {:.1} {}",
        unit.display_speed(config.speed_mps),
        unit.speed_suffix()
    ));

    lines.push(String::new());
    lines.push(format!(
        "Required angle (no friction): {:.1}°",
        result.required_angle_deg
    ));
    match result.max_safe_speed {
        Some(max) => lines.push(format!(
            "Safe speed range: {:.1} to {:.1} {}",
            unit.display_speed(result.min_safe_speed),
            unit.display_speed(max),
            unit.speed_suffix()
        )),
        None => {
            lines.push(format!(
                "Safe speed range: {:.1} {} and up",
                unit.display_speed(result.min_safe_speed),
                unit.speed_suffix()
            ));
            lines.push(
                "No upper limit: bank and friction hold the vehicle at any speed.".to_string(),
            );
        }
    }
    lines.push(format!(
        "Flat-road ceiling: {:.1} {}",
        unit.display_speed(result.flat_road_max_speed),
        unit.speed_suffix()
    ));
    lines.push(format!(
        "Status: {} ({})",
        status_word(result.status),
        result.status.description()
    ));

    lines.join("\n")
}

fn status_word(status: SafetyStatus) -> &'static str {
    match status {
        SafetyStatus::Inside => "OK",
        SafetyStatus::TooSlow => "TOO SLOW",
        SafetyStatus::TooFast => "TOO FAST",
    }
}
