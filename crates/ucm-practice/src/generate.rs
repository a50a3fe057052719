//! Randomized question generation.
//!
//! Parameters are drawn on one-decimal steps (two decimals for friction) so
//! prompts read like textbook numbers. All ranges are half-open:
//!
//! - find_angle: radius in `[40, 120)` m, speed in `[12, 34)` m/s
//! - find_range: radius in `[30, 120)` m, bank in `[5, 30)` degrees,
//!   friction in `[0.30, 0.80)`

use rand::Rng;
use ucm_model::{Question, QuestionKind};

/// Draw a question of the requested kind from `rng`.
///
/// The generator reads nothing but the random source; in particular it
/// never looks at the live configuration.
pub fn generate(kind: QuestionKind, rng: &mut impl Rng) -> Question {
    match kind {
        QuestionKind::FindAngle => Question::FindAngle {
            radius_m: tenths(rng, 400, 1200),
            speed_mps: tenths(rng, 120, 340),
        },
        QuestionKind::FindRange => Question::FindRange {
            radius_m: tenths(rng, 300, 1200),
            bank_angle_deg: tenths(rng, 50, 300),
            friction_coefficient: hundredths(rng, 30, 80),
        },
    }
}

/// Draw a question of the requested kind from the thread-local generator.
pub fn generate_default(kind: QuestionKind) -> Question {
    generate(kind, &mut rand::rng())
}

/// Sample a one-decimal value from `[lo/10, hi/10)`.
fn tenths(rng: &mut impl Rng, lo: i32, hi: i32) -> f64 {
    f64::from(rng.random_range(lo..hi)) / 10.0
}

/// Sample a two-decimal value from `[lo/100, hi/100)`.
fn hundredths(rng: &mut impl Rng, lo: i32, hi: i32) -> f64 {
    f64::from(rng.random_range(lo..hi)) / 100.0
}
