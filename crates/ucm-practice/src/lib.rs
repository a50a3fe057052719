//! Practice engine for the banked-curve lab: randomized question
//! generation and tolerance-based answer grading.

pub mod generate;
pub mod grade;

pub use generate::{generate, generate_default};
pub use grade::{
    ANGLE_TOLERANCE_DEG, RANGE_RELATIVE_TOLERANCE, ZERO_EDGE_TOLERANCE, correct_answer, grade,
};
