pub mod config;
pub mod display;
pub mod practice;
pub mod solution;

pub use config::CurveConfig;
pub use display::{DisplayUnit, M_TO_FT, MPS_TO_MPH};
pub use practice::{Answer, ExpectedAnswer, GradeOutcome, Question, QuestionKind, RangeClaim};
pub use solution::{FrictionDirection, SafetyStatus, SolverResult};
