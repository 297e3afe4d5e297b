//! Scored attempts
//!
//! An attempt pairs a submitted answer key with the number of questions it
//! got right. Attempts are append-only: once recorded they are never edited
//! or removed.

use super::error::{Result, SolverError};
use super::{AnswerKey, QuestionSpace};
use tracing::debug;

/// A submitted answer key together with its reported score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    key: AnswerKey,
    score: usize,
}

impl Attempt {
    /// Create an attempt without validating it against a question space
    ///
    /// Use [`record_attempt`] to validate and append in one step.
    #[must_use]
    pub fn new(key: impl Into<AnswerKey>, score: usize) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }

    /// The submitted answer key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// Number of positions the submitted key got right
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// True when `candidate` would have produced exactly this score
    #[inline]
    #[must_use]
    pub fn is_satisfied_by(&self, candidate: &AnswerKey) -> bool {
        self.key.score(candidate) == self.score
    }

    /// Check the attempt against a question space
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidAttempt`] if the key does not fit the
    /// space or the score lies outside `0..=num_questions`.
    pub fn validate(&self, space: &QuestionSpace) -> Result<()> {
        self.key.validate(space)?;

        if self.score > space.num_questions() {
            return Err(SolverError::invalid_attempt(format!(
                "score {} exceeds the {} questions in the quiz",
                self.score,
                space.num_questions()
            )));
        }

        Ok(())
    }
}

/// Validate an attempt and append it to the history
///
/// # Errors
/// Returns [`SolverError::InvalidAttempt`] if the key length differs from the
/// number of questions, an answer is outside its question's options, or the
/// score is greater than the number of questions. The history is left
/// untouched on error.
///
/// # Examples
/// ```
/// use answer_key_solver::core::{QuestionSpace, record_attempt};
///
/// let space = QuestionSpace::new(4, 4).unwrap();
/// let mut attempts = Vec::new();
///
/// record_attempt(&space, &mut attempts, vec![1, 2, 3, 4], 2).unwrap();
/// assert_eq!(attempts.len(), 1);
///
/// assert!(record_attempt(&space, &mut attempts, vec![1, 2, 3, 4], 5).is_err());
/// assert_eq!(attempts.len(), 1);
/// ```
pub fn record_attempt(
    space: &QuestionSpace,
    attempts: &mut Vec<Attempt>,
    key: impl Into<AnswerKey>,
    score: usize,
) -> Result<()> {
    let attempt = Attempt::new(key, score);
    attempt.validate(space)?;

    debug!(key = %attempt.key(), score, total = attempts.len() + 1, "recorded attempt");
    attempts.push(attempt);
    Ok(())
}
