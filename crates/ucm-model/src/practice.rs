//! Practice-question types shared by the generator, grader, and session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question archetype selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Given radius and speed, find the bank angle that needs no friction.
    FindAngle,
    /// Given radius, bank angle, and friction, find the safe-speed range.
    FindRange,
}

impl QuestionKind {
    /// All archetypes.
    pub const fn all() -> &'static [QuestionKind] {
        &[Self::FindAngle, Self::FindRange]
    }

    /// Canonical snake_case name (matches the serialized form).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FindAngle => "find_angle",
            Self::FindRange => "find_range",
        }
    }

    /// Display name for UI pickers.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FindAngle => "Find the ideal bank angle",
            Self::FindRange => "Find the safe-speed range",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "find_angle" => Ok(Self::FindAngle),
            "find_range" => Ok(Self::FindRange),
            _ => Err(format!("Unknown question kind: {s}")),
        }
    }
}

/// An active practice question.
///
/// Questions are ephemeral: a function of the random source only, never of
/// the live configuration, and discarded when a new one is generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Given radius and speed, find the bank angle that needs no friction.
    FindAngle {
        /// Curve radius in metres.
        radius_m: f64,
        /// Vehicle speed in m/s.
        speed_mps: f64,
    },
    /// Given geometry and friction, find the safe-speed envelope.
    FindRange {
        /// Curve radius in metres.
        radius_m: f64,
        /// Bank angle in degrees.
        bank_angle_deg: f64,
        /// Coefficient of static friction.
        friction_coefficient: f64,
    },
}

impl Question {
    /// Archetype of this question.
    pub const fn kind(&self) -> QuestionKind {
        match self {
            Self::FindAngle { .. } => QuestionKind::FindAngle,
            Self::FindRange { .. } => QuestionKind::FindRange,
        }
    }
}

/// A learner's claim about the upper edge of the safe-speed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeClaim {
    /// A finite ceiling in m/s.
    Bounded(f64),
    /// The claim that no finite ceiling exists for this geometry.
    NoUpperBound,
}

/// A submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Bank angle in degrees, answering a find-angle question.
    Angle(f64),
    /// Safe-speed envelope, answering a find-range question.
    Range {
        /// Claimed minimum safe speed in m/s.
        min: f64,
        /// Claimed ceiling.
        max: RangeClaim,
    },
}

/// Authoritative values for a question, in the shape the solver produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedAnswer {
    /// The bank angle that needs no friction.
    Angle {
        /// Degrees.
        degrees: f64,
    },
    /// The safe-speed envelope; `max` is `None` when no finite ceiling
    /// exists.
    Range {
        /// Minimum safe speed in m/s.
        min: f64,
        /// Maximum safe speed in m/s, when one exists.
        max: Option<f64>,
    },
}

/// Result of grading a submitted answer.
///
/// Grading never mutates the question; grading the same answer twice gives
/// the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeOutcome {
    /// Every graded component fell inside tolerance.
    Accepted,
    /// At least one component missed; carries the authoritative values.
    Rejected {
        /// What the solver says the answer is.
        expected: ExpectedAnswer,
    },
}

impl GradeOutcome {
    /// True when the answer was accepted.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_canonical_name() {
        for kind in QuestionKind::all() {
            assert_eq!(kind.as_str().parse::<QuestionKind>(), Ok(*kind));
        }
        assert!("essay".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn question_reports_its_kind() {
        let angle = Question::FindAngle {
            radius_m: 80.0,
            speed_mps: 20.0,
        };
        let range = Question::FindRange {
            radius_m: 60.0,
            bank_angle_deg: 15.0,
            friction_coefficient: 0.5,
        };
        assert_eq!(angle.kind(), QuestionKind::FindAngle);
        assert_eq!(range.kind(), QuestionKind::FindRange);
    }

    #[test]
    fn question_serializes_with_kind_tag() {
        let question = Question::FindAngle {
            radius_m: 80.0,
            speed_mps: 20.0,
        };
        let json = serde_json::to_string(&question).expect("serialize question");
        assert!(json.contains("\"kind\":\"find_angle\""));
        let round: Question = serde_json::from_str(&json).expect("deserialize question");
        assert_eq!(round, question);
    }

    #[test]
    fn outcome_reports_acceptance() {
        assert!(GradeOutcome::Accepted.is_accepted());
        let rejected = GradeOutcome::Rejected {
            expected: ExpectedAnswer::Angle { degrees: 27.0 },
        };
        assert!(!rejected.is_accepted());
    }
}
