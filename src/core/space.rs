//! Question space definition
//!
//! A question space fixes the number of questions and how many options each
//! question offers. Option values are 1-based: a question with 4 options
//! accepts the values 1, 2, 3 and 4.

use super::error::{Result, SolverError};
use std::fmt;
use std::str::FromStr;

/// Option counts as supplied by the caller
///
/// Either one count shared by every question or an explicit count per
/// question. [`QuestionSpace::new`] normalizes both forms into a
/// per-question sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionCounts {
    /// Every question has the same number of options
    Uniform(u32),
    /// One entry per question
    PerQuestion(Vec<u32>),
}

impl From<u32> for OptionCounts {
    fn from(count: u32) -> Self {
        Self::Uniform(count)
    }
}

impl From<Vec<u32>> for OptionCounts {
    fn from(counts: Vec<u32>) -> Self {
        Self::PerQuestion(counts)
    }
}

impl From<&[u32]> for OptionCounts {
    fn from(counts: &[u32]) -> Self {
        Self::PerQuestion(counts.to_vec())
    }
}

impl FromStr for OptionCounts {
    type Err = String;

    /// Parse `"4"` as uniform or `"4,5,4"` as per-question counts
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a valid option count", part.trim()))
        };

        if s.contains(',') {
            s.split(',')
                .map(parse)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Self::PerQuestion)
        } else {
            parse(s).map(Self::Uniform)
        }
    }
}

/// Largest supported number of questions
pub const MAX_QUESTIONS: usize = 10_000;

/// Immutable description of a quiz: question count and per-question options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSpace {
    option_counts: Vec<u32>,
}

impl QuestionSpace {
    /// Create a question space
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidSpec`] if:
    /// - `num_questions` is 0 or above [`MAX_QUESTIONS`]
    /// - a per-question sequence has a length other than `num_questions`
    /// - any option count is 0
    ///
    /// # Examples
    /// ```
    /// use answer_key_solver::core::QuestionSpace;
    ///
    /// let space = QuestionSpace::new(3, 4).unwrap();
    /// assert_eq!(space.option_counts(), &[4, 4, 4]);
    ///
    /// let mixed = QuestionSpace::new(3, vec![4, 5, 2]).unwrap();
    /// assert_eq!(mixed.options_for(1), 5);
    ///
    /// assert!(QuestionSpace::new(0, 4).is_err());
    /// ```
    pub fn new(num_questions: usize, option_counts: impl Into<OptionCounts>) -> Result<Self> {
        if num_questions == 0 {
            return Err(SolverError::invalid_spec(
                "number of questions must be at least 1",
            ));
        }
        if num_questions > MAX_QUESTIONS {
            return Err(SolverError::invalid_spec(format!(
                "{num_questions} questions exceeds the maximum of {MAX_QUESTIONS}"
            )));
        }

        let option_counts = match option_counts.into() {
            OptionCounts::Uniform(count) => vec![count; num_questions],
            OptionCounts::PerQuestion(counts) => {
                if counts.len() != num_questions {
                    return Err(SolverError::invalid_spec(format!(
                        "{} option counts given for {num_questions} questions",
                        counts.len()
                    )));
                }
                counts
            }
        };

        if let Some(question) = option_counts.iter().position(|&count| count == 0) {
            return Err(SolverError::invalid_spec(format!(
                "question {} must have at least 1 option",
                question + 1
            )));
        }

        Ok(Self { option_counts })
    }

    /// Number of questions in the quiz
    #[inline]
    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.option_counts.len()
    }

    /// Option count for every question, in question order
    #[inline]
    #[must_use]
    pub fn option_counts(&self) -> &[u32] {
        &self.option_counts
    }

    /// Option count for a single question (0-based index)
    ///
    /// # Panics
    /// Panics if `question >= num_questions()`
    #[inline]
    #[must_use]
    pub fn options_for(&self, question: usize) -> u32 {
        self.option_counts[question]
    }

    /// Total number of distinct answer keys, saturating at `u128::MAX`
    #[must_use]
    pub fn key_space_size(&self) -> u128 {
        self.option_counts
            .iter()
            .fold(1u128, |acc, &count| acc.saturating_mul(u128::from(count)))
    }

    /// Check that `value` is a valid option for `question`
    #[inline]
    #[must_use]
    pub fn contains_option(&self, question: usize, value: u32) -> bool {
        self.option_counts
            .get(question)
            .is_some_and(|&count| (1..=count).contains(&value))
    }
}

impl fmt::Display for QuestionSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<String> = self.option_counts.iter().map(u32::to_string).collect();
        write!(
            f,
            "{} questions (options: {})",
            self.num_questions(),
            counts.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_counts_are_expanded() {
        let space = QuestionSpace::new(4, 3).unwrap();
        assert_eq!(space.num_questions(), 4);
        assert_eq!(space.option_counts(), &[3, 3, 3, 3]);
    }

    #[test]
    fn per_question_counts_are_kept() {
        let space = QuestionSpace::new(3, vec![2, 5, 4]).unwrap();
        assert_eq!(space.option_counts(), &[2, 5, 4]);
        assert_eq!(space.options_for(1), 5);
    }

    #[test]
    fn zero_questions_rejected() {
        assert!(matches!(
            QuestionSpace::new(0, 4),
            Err(SolverError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn huge_question_count_rejected() {
        assert!(matches!(
            QuestionSpace::new(usize::MAX, 4),
            Err(SolverError::InvalidSpec { .. })
        ));
        assert!(QuestionSpace::new(MAX_QUESTIONS, 2).is_ok());
        assert!(QuestionSpace::new(MAX_QUESTIONS + 1, 2).is_err());
    }

    #[test]
    fn length_mismatch_rejected() {
        assert!(matches!(
            QuestionSpace::new(3, vec![4, 4]),
            Err(SolverError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn zero_option_count_rejected() {
        assert!(matches!(
            QuestionSpace::new(2, vec![4, 0]),
            Err(SolverError::InvalidSpec { .. })
        ));
        assert!(QuestionSpace::new(2, 0).is_err());
    }

    #[test]
    fn key_space_size_is_product() {
        let space = QuestionSpace::new(3, vec![2, 3, 4]).unwrap();
        assert_eq!(space.key_space_size(), 24);
    }

    #[test]
    fn key_space_size_saturates() {
        let space = QuestionSpace::new(200, u32::MAX).unwrap();
        assert_eq!(space.key_space_size(), u128::MAX);
    }

    #[test]
    fn contains_option_checks_range() {
        let space = QuestionSpace::new(2, vec![2, 3]).unwrap();
        assert!(space.contains_option(0, 1));
        assert!(space.contains_option(1, 3));
        assert!(!space.contains_option(0, 3));
        assert!(!space.contains_option(0, 0));
        assert!(!space.contains_option(5, 1));
    }

    #[test]
    fn option_counts_from_str() {
        assert_eq!("4".parse::<OptionCounts>(), Ok(OptionCounts::Uniform(4)));
        assert_eq!(
            "4, 5,4".parse::<OptionCounts>(),
            Ok(OptionCounts::PerQuestion(vec![4, 5, 4]))
        );
        assert!("four".parse::<OptionCounts>().is_err());
        assert!("4,,4".parse::<OptionCounts>().is_err());
    }

    #[test]
    fn display_lists_counts() {
        let space = QuestionSpace::new(3, vec![2, 5, 4]).unwrap();
        assert_eq!(space.to_string(), "3 questions (options: 2,5,4)");
    }
}
