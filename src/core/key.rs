//! Answer key representation
//!
//! An answer key holds one 1-based option value per question. The same type
//! is used for submitted attempts, enumerated candidates and recommended
//! probes.

use super::QuestionSpace;
use super::error::{Result, SolverError};
use std::fmt;

/// One fully-assigned answer per question
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerKey(Vec<u32>);

impl AnswerKey {
    /// Create a key from option values in question order
    #[inline]
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    /// Option values in question order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Number of questions covered by the key
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a key with no questions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Option value chosen for a question (0-based index)
    ///
    /// # Panics
    /// Panics if `question >= len()`
    #[inline]
    #[must_use]
    pub fn value_at(&self, question: usize) -> u32 {
        self.0[question]
    }

    /// Count the positions where two keys agree
    ///
    /// This is the score a quiz reports when `self` is submitted and `other`
    /// is the true key (and vice versa, the relation is symmetric).
    ///
    /// # Examples
    /// ```
    /// use answer_key_solver::core::AnswerKey;
    ///
    /// let attempt = AnswerKey::from(vec![1, 2, 3, 4]);
    /// let truth = AnswerKey::from(vec![1, 3, 3, 1]);
    /// assert_eq!(attempt.score(&truth), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn score(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(&other.0)
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Check that the key fits a question space
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidAttempt`] if the length differs from the
    /// number of questions or a value lies outside its question's options.
    pub fn validate(&self, space: &QuestionSpace) -> Result<()> {
        if self.len() != space.num_questions() {
            return Err(SolverError::invalid_attempt(format!(
                "key has {} answers but the quiz has {} questions",
                self.len(),
                space.num_questions()
            )));
        }

        for (question, &value) in self.0.iter().enumerate() {
            if !space.contains_option(question, value) {
                return Err(SolverError::invalid_attempt(format!(
                    "question {} answer {value} is outside 1..={}",
                    question + 1,
                    space.options_for(question)
                )));
            }
        }

        Ok(())
    }
}

impl From<Vec<u32>> for AnswerKey {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

impl From<&[u32]> for AnswerKey {
    fn from(values: &[u32]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for AnswerKey {
    fn from(values: [u32; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "[{}]", parts.join(","))
    }
}
