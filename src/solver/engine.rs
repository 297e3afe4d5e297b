//! Main answer-key solver interface

use super::analysis::{possible_answers_per_question, uncertain_questions};
use super::config::SolverConfig;
use super::enumerate::{Enumeration, enumerate};
use super::recommend::{Recommendation, recommend};
use crate::core::{AnswerKey, Attempt, QuestionSpace, Result, SolverError, record_attempt};
use std::collections::BTreeSet;
use tracing::info;

/// Snapshot of what the recorded attempts reveal
#[derive(Debug, Clone)]
pub struct SolutionStatus {
    /// Consistent keys (possibly capped)
    pub enumeration: Enumeration,
    /// Values each question can still take
    pub possible_answers: Vec<BTreeSet<u32>>,
    /// Questions (0-based) with more than one possible value
    pub uncertain: Vec<usize>,
}

impl SolutionStatus {
    /// The answer key, if exactly one candidate remains
    #[must_use]
    pub fn unique_solution(&self) -> Option<&AnswerKey> {
        match self.enumeration.candidates.as_slice() {
            [only] if !self.enumeration.truncated => Some(only),
            _ => None,
        }
    }
}

/// Main answer-key solver
///
/// Owns the question space and the append-only attempt history. Candidates
/// are recomputed from the full history on every query.
#[derive(Debug, Clone)]
pub struct Solver {
    space: QuestionSpace,
    attempts: Vec<Attempt>,
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with no attempts recorded
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidSpec`] if `config.max_solutions` is 0.
    pub fn new(space: QuestionSpace, config: SolverConfig) -> Result<Self> {
        if config.max_solutions == 0 {
            return Err(SolverError::invalid_spec(
                "maximum number of stored solutions must be at least 1",
            ));
        }

        info!(
            %space,
            max_solutions = config.max_solutions,
            exhaustive_threshold = config.exhaustive_threshold,
            "solver initialized"
        );

        Ok(Self {
            space,
            attempts: Vec::new(),
            config,
        })
    }

    #[inline]
    #[must_use]
    pub fn space(&self) -> &QuestionSpace {
        &self.space
    }

    /// Attempts in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate and append a scored attempt
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidAttempt`] if the key does not fit the
    /// question space or the score exceeds the number of questions.
    pub fn record_attempt(&mut self, key: impl Into<AnswerKey>, score: usize) -> Result<()> {
        record_attempt(&self.space, &mut self.attempts, key, score)
    }

    /// Enumerate the keys consistent with every recorded attempt
    ///
    /// # Errors
    /// Propagates [`enumerate`] validation errors.
    pub fn candidates(&self) -> Result<Enumeration> {
        enumerate(&self.space, &self.attempts, self.config.max_solutions)
    }

    /// Count of consistent keys (capped at `max_solutions`)
    ///
    /// # Errors
    /// Propagates [`enumerate`] validation errors.
    pub fn count_candidates(&self) -> Result<usize> {
        self.candidates().map(|enumeration| enumeration.len())
    }

    /// Candidates plus per-question summaries
    ///
    /// # Errors
    /// Propagates [`enumerate`] validation errors.
    pub fn status(&self) -> Result<SolutionStatus> {
        let enumeration = self.candidates()?;
        let possible_answers = possible_answers_per_question(&enumeration.candidates);
        let uncertain = uncertain_questions(&possible_answers);

        Ok(SolutionStatus {
            enumeration,
            possible_answers,
            uncertain,
        })
    }

    /// Recommend the next probe from the current candidates
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidateSet`] if the recorded attempts
    /// contradict each other.
    pub fn recommend(&self) -> Result<Recommendation> {
        let enumeration = self.candidates()?;
        recommend(
            &enumeration.candidates,
            None,
            self.config.exhaustive_threshold,
        )
    }

    /// Recommend the next probe from an external pool
    ///
    /// Every pool key is scored against the candidates whatever their count,
    /// so the result is always a pool member.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidAttempt`] if a pool probe does not fit
    /// the question space, and [`SolverError::EmptyCandidateSet`] if no
    /// candidates remain.
    pub fn recommend_from(&self, probe_pool: &[AnswerKey]) -> Result<Recommendation> {
        for probe in probe_pool {
            probe.validate(&self.space)?;
        }

        let enumeration = self.candidates()?;
        recommend(
            &enumeration.candidates,
            Some(probe_pool),
            self.config.exhaustive_threshold,
        )
    }
}
