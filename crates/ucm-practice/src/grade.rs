//! Tolerance-based grading against solver-derived authoritative answers.
//!
//! Angle answers grade on an absolute half-degree tolerance. Range edges
//! grade on a 5% relative tolerance, switching to an absolute half
//! metre-per-second window when the authoritative edge is zero so no
//! division by a vanishing value occurs. An open ceiling is matched only
//! by the explicit no-upper-bound claim.

use ucm_model::{Answer, ExpectedAnswer, GradeOutcome, Question, RangeClaim};
use ucm_solver::{required_angle_deg, safe_speed_envelope};

/// Absolute tolerance for angle answers, in degrees.
pub const ANGLE_TOLERANCE_DEG: f64 = 0.5;

/// Relative tolerance for range-edge answers.
pub const RANGE_RELATIVE_TOLERANCE: f64 = 0.05;

/// Absolute window for edges whose authoritative value is zero, in m/s.
pub const ZERO_EDGE_TOLERANCE: f64 = 0.5;

/// Authoritative answer for a question, derived through the solver's own
/// formulas rather than a parallel implementation.
pub fn correct_answer(question: &Question, gravity_mps2: f64) -> ExpectedAnswer {
    match *question {
        Question::FindAngle { radius_m, speed_mps } => ExpectedAnswer::Angle {
            degrees: required_angle_deg(speed_mps, radius_m, gravity_mps2),
        },
        Question::FindRange {
            radius_m,
            bank_angle_deg,
            friction_coefficient,
        } => {
            let (min, max) =
                safe_speed_envelope(radius_m, bank_angle_deg, friction_coefficient, gravity_mps2);
            ExpectedAnswer::Range { min, max }
        }
    }
}

/// Grade a submitted answer against the authoritative values.
///
/// Pure and repeatable: nothing is mutated and grading the same answer
/// twice gives the same outcome. A mismatched answer shape (an angle for a
/// range question, or vice versa) is rejected outright. Rejections always
/// carry the authoritative values.
pub fn grade(question: &Question, gravity_mps2: f64, answer: &Answer) -> GradeOutcome {
    let expected = correct_answer(question, gravity_mps2);
    let accepted = match (expected, *answer) {
        (ExpectedAnswer::Angle { degrees }, Answer::Angle(user)) => {
            (user - degrees).abs() <= ANGLE_TOLERANCE_DEG
        }
        (
            ExpectedAnswer::Range { min, max },
            Answer::Range {
                min: user_min,
                max: user_max,
            },
        ) => edge_accepted(user_min, min) && ceiling_accepted(user_max, max),
        _ => false,
    };
    if accepted {
        GradeOutcome::Accepted
    } else {
        GradeOutcome::Rejected { expected }
    }
}

/// A claimed edge matches a positive authoritative edge within the
/// relative tolerance, or a zero edge within the absolute window.
fn edge_accepted(user: f64, correct: f64) -> bool {
    if correct > 0.0 {
        (user - correct).abs() / correct < RANGE_RELATIVE_TOLERANCE
    } else {
        user.abs() <= ZERO_EDGE_TOLERANCE
    }
}

fn ceiling_accepted(user: RangeClaim, correct: Option<f64>) -> bool {
    match (correct, user) {
        (Some(vmax), RangeClaim::Bounded(value)) => edge_accepted(value, vmax),
        // An open ceiling is only matched by the explicit claim; a number,
        // however large, is not the same statement.
        (None, RangeClaim::NoUpperBound) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.81;

    #[test]
    fn test_exact_angle_is_accepted() {
        let question = Question::FindAngle {
            radius_m: 80.0,
            speed_mps: 20.0,
        };
        let ExpectedAnswer::Angle { degrees } = correct_answer(&question, G) else {
            panic!("wrong expected shape");
        };
        assert!(grade(&question, G, &Answer::Angle(degrees)).is_accepted());
    }

    #[test]
    fn test_angle_tolerance_is_half_a_degree() {
        // Correct angle for r=80, v=20 is about 27.007 degrees.
        let question = Question::FindAngle {
            radius_m: 80.0,
            speed_mps: 20.0,
        };
        assert!(grade(&question, G, &Answer::Angle(27.1)).is_accepted());
        assert!(grade(&question, G, &Answer::Angle(27.5)).is_accepted());
        assert!(!grade(&question, G, &Answer::Angle(29.0)).is_accepted());
        assert!(!grade(&question, G, &Answer::Angle(26.0)).is_accepted());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let question = Question::FindRange {
            radius_m: 60.0,
            bank_angle_deg: 15.0,
            friction_coefficient: 0.5,
        };
        let outcome = grade(&question, G, &Answer::Angle(22.8));
        assert!(!outcome.is_accepted());
        let GradeOutcome::Rejected { expected } = outcome else {
            panic!("expected a rejection");
        };
        assert!(matches!(expected, ExpectedAnswer::Range { .. }));
    }

    #[test]
    fn test_garbage_answer_values_never_panic() {
        let question = Question::FindRange {
            radius_m: 60.0,
            bank_angle_deg: 15.0,
            friction_coefficient: 0.5,
        };
        let answer = Answer::Range {
            min: f64::NAN,
            max: RangeClaim::Bounded(f64::INFINITY),
        };
        assert!(!grade(&question, G, &answer).is_accepted());
    }

    #[test]
    fn test_grading_is_repeatable() {
        let question = Question::FindAngle {
            radius_m: 80.0,
            speed_mps: 20.0,
        };
        let answer = Answer::Angle(27.1);
        assert_eq!(grade(&question, G, &answer), grade(&question, G, &answer));
    }
}
