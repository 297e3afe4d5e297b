//! Core domain types for answer-key solving
//!
//! Question spaces, answer keys and scored attempts, plus the error type
//! shared by every core operation. Everything here is pure and
//! side-effect free.

mod attempt;
mod error;
mod key;
mod space;

pub use attempt::{Attempt, record_attempt};
pub use error::{Result, SolverError};
pub use key::AnswerKey;
pub use space::{MAX_QUESTIONS, OptionCounts, QuestionSpace};
