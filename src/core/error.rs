//! Error taxonomy for the solver core
//!
//! All variants are validation failures detected before any search work
//! begins. None of them are retried.

use thiserror::Error;

/// Failure raised by a core operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed question space or enumeration parameters
    #[error("invalid question space: {reason}")]
    InvalidSpec { reason: String },

    /// Malformed attempt (wrong length, out-of-range option or score)
    #[error("invalid attempt: {reason}")]
    InvalidAttempt { reason: String },

    /// Recommendation requested with no consistent candidates
    #[error("no candidate answer keys remain; the recorded scores contradict each other")]
    EmptyCandidateSet,
}

impl SolverError {
    pub(crate) fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_attempt(reason: impl Into<String>) -> Self {
        Self::InvalidAttempt {
            reason: reason.into(),
        }
    }
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_reason() {
        let err = SolverError::invalid_spec("question 2 has 0 options");
        assert_eq!(
            err.to_string(),
            "invalid question space: question 2 has 0 options"
        );

        let err = SolverError::invalid_attempt("score 5 exceeds 4 questions");
        assert!(err.to_string().contains("score 5 exceeds 4 questions"));
    }

    #[test]
    fn empty_candidate_set_message() {
        assert!(
            SolverError::EmptyCandidateSet
                .to_string()
                .contains("no candidate")
        );
    }
}
