//! The interactive session: one configuration, its live solve, and the
//! practice state layered on top.

use rand::Rng;
use tracing::{debug, warn};

use ucm_model::{Answer, CurveConfig, GradeOutcome, Question, QuestionKind, SolverResult};
use ucm_practice::{generate, grade};
use ucm_solver::solve;
use ucm_store::ConfigStore;

use crate::edit::ConfigEdit;
use crate::summary;

/// An interactive banked-curve session over a configuration store.
///
/// Owns the three state families and keeps them coherent: the persisted
/// [`CurveConfig`], the [`SolverResult`] derived from it after every edit,
/// and the ephemeral practice state (active question plus its latest grade).
pub struct Session<S: ConfigStore> {
    store: S,
    key: String,
    config: CurveConfig,
    result: SolverResult,
    question: Option<Question>,
    last_grade: Option<GradeOutcome>,
}

impl<S: ConfigStore> Session<S> {
    /// Open a session, loading the configuration stored under `key` (or the
    /// defaults) and solving it immediately.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let config = store.load(&key);
        let result = solve(&config);
        Self {
            store,
            key,
            config,
            result,
            question: None,
            last_grade: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Solve derived from the current configuration.
    pub fn result(&self) -> &SolverResult {
        &self.result
    }

    /// Store key this session persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one edit: normalize it, re-solve, and persist.
    ///
    /// The solve is synchronous, so the returned result is already in sync
    /// with the edited configuration. Persistence is fire-and-forget: a
    /// failed save is logged and the in-memory state stays authoritative.
    pub fn apply(&mut self, edit: ConfigEdit) -> &SolverResult {
        let field = edit.field();
        edit.apply_to(&mut self.config);
        self.result = solve(&self.config);
        debug!("Edited {field}, status now {}", self.result.status);
        if let Err(error) = self.store.save(&self.key, &self.config) {
            warn!("Failed to persist configuration: {error}");
        }
        &self.result
    }

    /// Generate a fresh practice question, replacing any active question and
    /// discarding its grade.
    ///
    /// Randomness comes from the caller, so tests can drive generation with
    /// a seeded source.
    pub fn generate_question(&mut self, kind: QuestionKind, rng: &mut impl Rng) -> &Question {
        debug!("Generating {kind} question");
        self.last_grade = None;
        self.question.insert(generate(kind, rng))
    }

    /// Grade an answer against the active question, using the session's
    /// configured gravity.
    ///
    /// Returns `None` when no question is active. The question stays active
    /// afterwards, so another attempt can be graded.
    pub fn grade(&mut self, answer: &Answer) -> Option<&GradeOutcome> {
        let question = self.question.as_ref()?;
        let outcome = grade(question, self.config.gravity_mps2, answer);
        debug!(
            "Graded {} answer: {}",
            question.kind(),
            if outcome.is_accepted() {
                "accepted"
            } else {
                "rejected"
            }
        );
        Some(self.last_grade.insert(outcome))
    }

    /// Active practice question, if any.
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Grade of the latest attempt at the active question.
    pub fn last_grade(&self) -> Option<&GradeOutcome> {
        self.last_grade.as_ref()
    }

    /// Plain-text report of the current solve.
    #[must_use]
    pub fn summary(&self) -> String {
        summary::render(&self.config, &self.result)
    }
}
