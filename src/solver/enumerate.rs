//! Candidate enumeration
//!
//! Finds every answer key consistent with all recorded attempts using a
//! depth-first search over questions in order. Each partial assignment is
//! checked against every attempt before descending:
//!
//! - no overshoot: matches so far must not exceed the attempt's score
//! - reachability: matches so far plus the unassigned questions must still
//!   reach the attempt's score
//!
//! Options are tried in increasing order at each question, so candidates
//! come out sorted lexicographically and the cap always keeps the same
//! prefix of that order.

use crate::core::{AnswerKey, Attempt, QuestionSpace, Result, SolverError};
use tracing::debug;

/// Output of an enumeration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Consistent keys in lexicographic order
    pub candidates: Vec<AnswerKey>,
    /// True when more consistent keys exist beyond the cap
    pub truncated: bool,
}

impl Enumeration {
    /// Number of candidates collected
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when no key satisfies every attempt
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Enumerate the answer keys consistent with every attempt
///
/// Collects at most `cap` keys. `truncated` is set only when at least one
/// further consistent key exists, so a set of exactly `cap` keys is reported
/// as complete.
///
/// # Errors
/// Returns [`SolverError::InvalidSpec`] if `cap` is 0, or if an attempt's
/// key does not fit the question space, or its score exceeds the number of
/// questions.
///
/// # Examples
/// ```
/// use answer_key_solver::core::{Attempt, QuestionSpace};
/// use answer_key_solver::solver::enumerate;
///
/// let space = QuestionSpace::new(4, 4).unwrap();
/// let attempts = vec![Attempt::new(vec![1, 2, 3, 4], 2)];
///
/// let result = enumerate(&space, &attempts, 1000).unwrap();
/// assert_eq!(result.candidates.len(), 54);
/// assert!(!result.truncated);
/// ```
pub fn enumerate(space: &QuestionSpace, attempts: &[Attempt], cap: usize) -> Result<Enumeration> {
    if cap == 0 {
        return Err(SolverError::invalid_spec(
            "enumeration cap must be at least 1",
        ));
    }
    for (index, attempt) in attempts.iter().enumerate() {
        attempt.validate(space).map_err(|e| {
            SolverError::invalid_spec(format!("attempt {} does not fit the quiz: {e}", index + 1))
        })?;
    }

    let mut search = Search::new(space, attempts);
    let mut candidates = Vec::new();
    let mut truncated = false;

    while let Some(key) = search.next_candidate() {
        if candidates.len() == cap {
            truncated = true;
            break;
        }
        candidates.push(key);
    }

    debug!(
        candidates = candidates.len(),
        truncated,
        nodes = search.nodes_visited,
        attempts = attempts.len(),
        "enumeration finished"
    );

    Ok(Enumeration {
        candidates,
        truncated,
    })
}

/// Explicit-stack depth-first search state
///
/// `tried[d]` is the last option value tried at question `d` (0 before the
/// first try). `matches[d][a]` counts the agreements with attempt `a` over
/// questions `0..d`, so `matches[0]` is all zeros.
struct Search<'a> {
    option_counts: &'a [u32],
    attempts: &'a [Attempt],
    assignment: Vec<u32>,
    tried: Vec<u32>,
    matches: Vec<Vec<usize>>,
    depth: usize,
    exhausted: bool,
    nodes_visited: u64,
}

impl<'a> Search<'a> {
    fn new(space: &'a QuestionSpace, attempts: &'a [Attempt]) -> Self {
        let num_questions = space.num_questions();
        Self {
            option_counts: space.option_counts(),
            attempts,
            assignment: vec![0; num_questions],
            tried: vec![0; num_questions],
            matches: vec![vec![0; attempts.len()]; num_questions + 1],
            depth: 0,
            exhausted: false,
            nodes_visited: 0,
        }
    }

    /// Advance to the next consistent full assignment
    fn next_candidate(&mut self) -> Option<AnswerKey> {
        let num_questions = self.option_counts.len();

        while !self.exhausted {
            let depth = self.depth;

            if self.tried[depth] >= self.option_counts[depth] {
                // Options exhausted at this level: backtrack
                self.tried[depth] = 0;
                if depth == 0 {
                    self.exhausted = true;
                } else {
                    self.depth -= 1;
                }
                continue;
            }

            self.tried[depth] += 1;
            let value = self.tried[depth];
            self.assignment[depth] = value;
            self.nodes_visited += 1;

            if !self.extend(depth, value) {
                continue;
            }

            if depth + 1 == num_questions {
                // With nothing left unassigned, both bounds force an exact match
                debug_assert!(
                    self.attempts
                        .iter()
                        .zip(&self.matches[num_questions])
                        .all(|(attempt, &m)| m == attempt.score())
                );
                return Some(AnswerKey::new(self.assignment.clone()));
            }

            self.depth += 1;
        }

        None
    }

    /// Fill `matches[depth + 1]` for `value` at `depth` and apply both bounds
    fn extend(&mut self, depth: usize, value: u32) -> bool {
        let remaining = self.option_counts.len() - (depth + 1);
        let (before, after) = self.matches.split_at_mut(depth + 1);
        let previous = &before[depth];
        let next = &mut after[0];

        for (a, attempt) in self.attempts.iter().enumerate() {
            let matched = previous[a] + usize::from(attempt.key().value_at(depth) == value);
            if matched > attempt.score() || matched + remaining < attempt.score() {
                return false;
            }
            next[a] = matched;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_satisfied(attempts: &[Attempt], candidates: &[AnswerKey]) -> bool {
        candidates
            .iter()
            .all(|c| attempts.iter().all(|a| a.is_satisfied_by(c)))
    }

    #[test]
    fn no_attempts_yields_whole_space() {
        let space = QuestionSpace::new(3, vec![2, 3, 2]).unwrap();
        let result = enumerate(&space, &[], 1000).unwrap();

        assert_eq!(result.len(), 12);
        assert!(!result.truncated);
        assert_eq!(result.candidates[0], AnswerKey::from([1, 1, 1]));
        assert_eq!(result.candidates[11], AnswerKey::from([2, 3, 2]));
    }

    #[test]
    fn output_is_sorted() {
        let space = QuestionSpace::new(3, 3).unwrap();
        let attempts = vec![Attempt::new([1, 2, 3], 1)];
        let result = enumerate(&space, &attempts, 1000).unwrap();

        let mut sorted = result.candidates.clone();
        sorted.sort();
        assert_eq!(result.candidates, sorted);
    }

    #[test]
    fn cap_truncates_when_more_exist() {
        let space = QuestionSpace::new(4, 4).unwrap();
        let result = enumerate(&space, &[], 100).unwrap();

        assert_eq!(result.len(), 100);
        assert!(result.truncated);
    }

    #[test]
    fn cap_equal_to_count_is_not_truncated() {
        let space = QuestionSpace::new(2, 3).unwrap();
        let result = enumerate(&space, &[], 9).unwrap();

        assert_eq!(result.len(), 9);
        assert!(!result.truncated);
    }

    #[test]
    fn truncated_prefix_matches_full_run() {
        let space = QuestionSpace::new(4, 3).unwrap();
        let attempts = vec![Attempt::new([1, 1, 1, 1], 1)];

        let full = enumerate(&space, &attempts, 1000).unwrap();
        let capped = enumerate(&space, &attempts, 5).unwrap();

        assert!(capped.truncated);
        assert_eq!(capped.candidates[..], full.candidates[..5]);
    }

    #[test]
    fn huge_space_terminates_through_cap() {
        let space = QuestionSpace::new(60, 26).unwrap();
        let result = enumerate(&space, &[], 1000).unwrap();

        assert_eq!(result.len(), 1000);
        assert!(result.truncated);
    }

    #[test]
    fn single_attempt_count() {
        // C(4,2) * 3^2 keys agree with [1,2,3,4] in exactly two places
        let space = QuestionSpace::new(4, 4).unwrap();
        let attempts = vec![Attempt::new([1, 2, 3, 4], 2)];
        let result = enumerate(&space, &attempts, 1000).unwrap();

        assert_eq!(result.len(), 54);
        assert!(all_satisfied(&attempts, &result.candidates));
    }

    #[test]
    fn multiple_attempts_all_satisfied() {
        let space = QuestionSpace::new(5, 3).unwrap();
        let truth = AnswerKey::from([2, 1, 3, 3, 1]);
        let probes: [[u32; 5]; 3] = [[1, 1, 1, 1, 1], [2, 2, 2, 2, 2], [1, 2, 3, 1, 2]];
        let attempts: Vec<Attempt> = probes
            .iter()
            .map(|p| {
                let key = AnswerKey::from(*p);
                let score = key.score(&truth);
                Attempt::new(key, score)
            })
            .collect();

        let result = enumerate(&space, &attempts, 1000).unwrap();

        assert!(!result.is_empty());
        assert!(result.candidates.contains(&truth));
        assert!(all_satisfied(&attempts, &result.candidates));
    }

    #[test]
    fn matches_brute_force_filter() {
        let space = QuestionSpace::new(4, vec![2, 3, 3, 2]).unwrap();
        let attempts = vec![
            Attempt::new([1, 2, 3, 1], 2),
            Attempt::new([2, 2, 1, 2], 1),
        ];

        let everything = enumerate(&space, &[], 1000).unwrap();
        let expected: Vec<AnswerKey> = everything
            .candidates
            .into_iter()
            .filter(|c| attempts.iter().all(|a| a.is_satisfied_by(c)))
            .collect();

        let result = enumerate(&space, &attempts, 1000).unwrap();
        assert_eq!(result.candidates, expected);
    }

    #[test]
    fn contradictory_attempts_yield_nothing() {
        let space = QuestionSpace::new(3, 3).unwrap();
        let attempts = vec![
            Attempt::new([1, 1, 1], 3),
            Attempt::new([1, 1, 1], 0),
        ];
        let result = enumerate(&space, &attempts, 1000).unwrap();

        assert!(result.is_empty());
        assert!(!result.truncated);
    }

    #[test]
    fn perfect_score_pins_the_key() {
        let space = QuestionSpace::new(3, 4).unwrap();
        let attempts = vec![Attempt::new([4, 2, 1], 3)];
        let result = enumerate(&space, &attempts, 1000).unwrap();

        assert_eq!(result.candidates, vec![AnswerKey::from([4, 2, 1])]);
    }

    #[test]
    fn idempotent() {
        let space = QuestionSpace::new(4, 4).unwrap();
        let attempts = vec![Attempt::new([1, 2, 3, 4], 1)];

        let first = enumerate(&space, &attempts, 50).unwrap();
        let second = enumerate(&space, &attempts, 50).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_cap_rejected() {
        let space = QuestionSpace::new(2, 2).unwrap();
        assert!(matches!(
            enumerate(&space, &[], 0),
            Err(SolverError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn mismatched_attempt_rejected() {
        let space = QuestionSpace::new(3, 3).unwrap();
        let attempts = vec![Attempt::new([1, 2], 1)];
        assert!(matches!(
            enumerate(&space, &attempts, 10),
            Err(SolverError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn out_of_range_score_rejected() {
        let space = QuestionSpace::new(3, 3).unwrap();
        let attempts = vec![Attempt::new([1, 2, 3], 4)];
        assert!(matches!(
            enumerate(&space, &attempts, 10),
            Err(SolverError::InvalidSpec { .. })
        ));
    }
}
