//! Per-question summaries of a candidate set

use crate::core::AnswerKey;
use std::collections::BTreeSet;

/// Collect the values each question takes across all candidates
///
/// Returns one sorted set per question. An empty candidate set yields an
/// empty vector.
///
/// # Examples
/// ```
/// use answer_key_solver::core::AnswerKey;
/// use answer_key_solver::solver::possible_answers_per_question;
///
/// let candidates = vec![AnswerKey::from(vec![1, 2]), AnswerKey::from(vec![3, 2])];
/// let possible = possible_answers_per_question(&candidates);
///
/// assert_eq!(possible[0].iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(possible[1].len(), 1);
/// ```
#[must_use]
pub fn possible_answers_per_question(candidates: &[AnswerKey]) -> Vec<BTreeSet<u32>> {
    let Some(first) = candidates.first() else {
        return Vec::new();
    };

    let mut possible = vec![BTreeSet::new(); first.len()];
    for candidate in candidates {
        for (set, &value) in possible.iter_mut().zip(candidate.values()) {
            set.insert(value);
        }
    }

    possible
}

/// Indices (0-based) of questions with more than one possible value
#[must_use]
pub fn uncertain_questions(possible_answers: &[BTreeSet<u32>]) -> Vec<usize> {
    possible_answers
        .iter()
        .enumerate()
        .filter(|(_, values)| values.len() > 1)
        .map(|(question, _)| question)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[[u32; 3]]) -> Vec<AnswerKey> {
        raw.iter().map(|k| AnswerKey::from(*k)).collect()
    }

    #[test]
    fn unions_values_per_question() {
        let candidates = keys(&[[1, 2, 3], [1, 3, 3], [2, 2, 3]]);
        let possible = possible_answers_per_question(&candidates);

        assert_eq!(possible.len(), 3);
        assert_eq!(possible[0], BTreeSet::from([1, 2]));
        assert_eq!(possible[1], BTreeSet::from([2, 3]));
        assert_eq!(possible[2], BTreeSet::from([3]));
    }

    #[test]
    fn uncertain_lists_multi_valued_questions() {
        let candidates = keys(&[[1, 2, 3], [1, 3, 3], [2, 2, 3]]);
        let possible = possible_answers_per_question(&candidates);

        assert_eq!(uncertain_questions(&possible), vec![0, 1]);
    }

    #[test]
    fn single_candidate_has_no_uncertainty() {
        let candidates = keys(&[[4, 1, 2]]);
        let possible = possible_answers_per_question(&candidates);

        assert!(possible.iter().all(|set| set.len() == 1));
        assert!(uncertain_questions(&possible).is_empty());
    }

    #[test]
    fn empty_candidates() {
        let possible = possible_answers_per_question(&[]);
        assert!(possible.is_empty());
        assert!(uncertain_questions(&possible).is_empty());
    }
}
