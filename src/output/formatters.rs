//! Option notation and terminal formatting helpers
//!
//! Questions with at most 26 options are shown as letters (A = 1, B = 2, ...),
//! larger ones as plain numbers. Input accepts either form.

use crate::core::{AnswerKey, QuestionSpace, SolverError};
use thiserror::Error;

/// Largest option value that has a letter form
pub const LETTER_OPTIONS: u32 = 26;

/// Failure to parse user-entered option notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionParseError {
    #[error("'{0}' is not an option letter or digit")]
    InvalidOption(char),
    #[error("'{0}' is not a valid option")]
    InvalidToken(String),
    #[error("answer key is empty")]
    EmptyKey,
    #[error("'{0}' must look like KEY:SCORE, e.g. ABCD:2")]
    MissingScore(String),
    #[error("'{0}' is not a valid score")]
    InvalidScore(String),
    #[error(transparent)]
    OutOfSpace(#[from] SolverError),
}

/// Parse a single option character
///
/// Digits map to their value, letters to their alphabet position
/// (case-insensitive).
///
/// # Errors
/// Returns [`OptionParseError::InvalidOption`] for any other character.
///
/// # Examples
/// ```
/// use answer_key_solver::output::formatters::parse_option;
///
/// assert_eq!(parse_option('C'), Ok(3));
/// assert_eq!(parse_option('b'), Ok(2));
/// assert_eq!(parse_option('7'), Ok(7));
/// assert!(parse_option('?').is_err());
/// ```
pub fn parse_option(ch: char) -> Result<u32, OptionParseError> {
    if let Some(digit) = ch.to_digit(10) {
        return Ok(digit);
    }
    if ch.is_ascii_alphabetic() {
        return Ok(u32::from(ch.to_ascii_uppercase() as u8 - b'A') + 1);
    }
    Err(OptionParseError::InvalidOption(ch))
}

/// Parse an answer key for `space`
///
/// Either one character per question (`"ABCD"`, `"1234"`) or a
/// comma-separated list for questions with more than 9 options
/// (`"12,3,A"`). Whitespace is ignored.
///
/// # Errors
/// Returns an [`OptionParseError`] for empty input, unknown characters, or a
/// key whose length or values do not fit `space`.
///
/// # Examples
/// ```
/// use answer_key_solver::core::{AnswerKey, QuestionSpace};
/// use answer_key_solver::output::formatters::parse_key;
///
/// let space = QuestionSpace::new(3, vec![4, 12, 4]).unwrap();
/// assert_eq!(parse_key("b,12,d", &space).unwrap(), AnswerKey::from([2, 12, 4]));
/// assert!(parse_key("ABE", &space).is_err());
/// ```
pub fn parse_key(text: &str, space: &QuestionSpace) -> Result<AnswerKey, OptionParseError> {
    let key = parse_values(text)?;
    key.validate(space)?;
    Ok(key)
}

/// Parse option values without checking them against a space
fn parse_values(text: &str) -> Result<AnswerKey, OptionParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OptionParseError::EmptyKey);
    }

    let values = if text.contains(',') {
        text.split(',').map(parse_token).collect::<Result<Vec<_>, _>>()?
    } else {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(parse_option)
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(AnswerKey::new(values))
}

/// Parse one comma-separated token: a number or a single letter
fn parse_token(token: &str) -> Result<u32, OptionParseError> {
    let token = token.trim();
    if let Ok(value) = token.parse::<u32>() {
        return Ok(value);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => parse_option(ch),
        _ => Err(OptionParseError::InvalidToken(token.to_string())),
    }
}

/// Parse `KEY:SCORE` into an answer key and its score
///
/// The score itself is range-checked when the attempt is recorded.
///
/// # Errors
/// Returns an [`OptionParseError`] if the separator is missing or either
/// side fails to parse.
///
/// # Examples
/// ```
/// use answer_key_solver::core::{AnswerKey, QuestionSpace};
/// use answer_key_solver::output::formatters::parse_attempt;
///
/// let space = QuestionSpace::new(4, 4).unwrap();
/// let (key, score) = parse_attempt("ABCD:2", &space).unwrap();
/// assert_eq!(key, AnswerKey::from(vec![1, 2, 3, 4]));
/// assert_eq!(score, 2);
/// ```
pub fn parse_attempt(
    text: &str,
    space: &QuestionSpace,
) -> Result<(AnswerKey, usize), OptionParseError> {
    let (key, score) = text
        .rsplit_once(':')
        .ok_or_else(|| OptionParseError::MissingScore(text.to_string()))?;

    let score = score
        .trim()
        .parse::<usize>()
        .map_err(|_| OptionParseError::InvalidScore(score.trim().to_string()))?;

    Ok((parse_key(key, space)?, score))
}

/// Format one option value for a question with `option_count` options
#[must_use]
pub fn format_option(value: u32, option_count: u32) -> String {
    if option_count <= LETTER_OPTIONS && (1..=LETTER_OPTIONS).contains(&value) {
        char::from(b'A' + (value - 1) as u8).to_string()
    } else {
        value.to_string()
    }
}

/// Format a whole key for display
///
/// Keys over letter-only spaces render compactly (`"ABCD"`); any question
/// with more than 26 options switches to comma separation so the output can
/// be parsed back.
#[must_use]
pub fn format_key(key: &AnswerKey, space: &QuestionSpace) -> String {
    let parts: Vec<String> = key
        .values()
        .iter()
        .zip(space.option_counts())
        .map(|(&value, &count)| format_option(value, count))
        .collect();

    if space.option_counts().iter().all(|&c| c <= LETTER_OPTIONS) {
        parts.concat()
    } else {
        parts.join(",")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an elimination percentage as a bar
#[must_use]
pub fn efficiency_bar(percentage: f64, width: usize) -> String {
    create_progress_bar(percentage, 100.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_option_letters_and_digits() {
        assert_eq!(parse_option('A'), Ok(1));
        assert_eq!(parse_option('d'), Ok(4));
        assert_eq!(parse_option('Z'), Ok(26));
        assert_eq!(parse_option('5'), Ok(5));
        assert_eq!(parse_option('-'), Err(OptionParseError::InvalidOption('-')));
    }

    #[test]
    fn parse_key_compact_forms() {
        let space = QuestionSpace::new(4, 4).unwrap();
        assert_eq!(parse_key("ABCD", &space), Ok(AnswerKey::from([1, 2, 3, 4])));
        assert_eq!(parse_key("1234", &space), Ok(AnswerKey::from([1, 2, 3, 4])));
        assert_eq!(parse_key(" a b c d ", &space), Ok(AnswerKey::from([1, 2, 3, 4])));
    }

    #[test]
    fn parse_key_comma_separated() {
        let space = QuestionSpace::new(3, vec![12, 4, 4]).unwrap();
        assert_eq!(parse_key("12, 3,A", &space), Ok(AnswerKey::from([12, 3, 1])));
        assert!(matches!(
            parse_key("12,AB,1", &space),
            Err(OptionParseError::InvalidToken(_))
        ));
    }

    #[test]
    fn parse_key_rejects_empty() {
        let space = QuestionSpace::new(2, 2).unwrap();
        assert_eq!(parse_key("  ", &space), Err(OptionParseError::EmptyKey));
    }

    #[test]
    fn parse_key_checks_space() {
        let space = QuestionSpace::new(4, 4).unwrap();
        assert!(matches!(
            parse_key("ABC", &space),
            Err(OptionParseError::OutOfSpace(SolverError::InvalidAttempt { .. }))
        ));
        assert!(matches!(
            parse_key("ABCE", &space),
            Err(OptionParseError::OutOfSpace(_))
        ));
    }

    #[test]
    fn parse_attempt_splits_score() {
        let space = QuestionSpace::new(4, 4).unwrap();
        let (key, score) = parse_attempt("BADC:0", &space).unwrap();
        assert_eq!(key, AnswerKey::from([2, 1, 4, 3]));
        assert_eq!(score, 0);

        assert!(matches!(
            parse_attempt("ABCD", &space),
            Err(OptionParseError::MissingScore(_))
        ));
        assert!(matches!(
            parse_attempt("ABCD:x", &space),
            Err(OptionParseError::InvalidScore(_))
        ));
    }

    #[test]
    fn format_option_switches_on_count() {
        assert_eq!(format_option(1, 4), "A");
        assert_eq!(format_option(26, 26), "Z");
        assert_eq!(format_option(3, 30), "3");
    }

    #[test]
    fn format_key_round_trips_letters() {
        let space = QuestionSpace::new(4, 4).unwrap();
        let key = AnswerKey::from([2, 1, 4, 3]);

        let text = format_key(&key, &space);
        assert_eq!(text, "BADC");
        assert_eq!(parse_key(&text, &space), Ok(key));
    }

    #[test]
    fn format_key_uses_commas_for_large_questions() {
        let space = QuestionSpace::new(3, vec![4, 30, 4]).unwrap();
        let key = AnswerKey::from([2, 27, 1]);

        let text = format_key(&key, &space);
        assert_eq!(text, "B,27,A");
        assert_eq!(parse_key(&text, &space), Ok(key));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
