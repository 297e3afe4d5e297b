//! Balanced probe construction for large candidate sets
//!
//! Evaluating every probe is quadratic in the candidate count. Above the
//! exhaustive threshold a single probe is built instead: for each question
//! independently, pick the value held by as close to half of the candidates
//! as possible. Each question then splits the candidates roughly in two,
//! which maximizes per-question information under an independence
//! assumption. The probe need not be a candidate itself.

use crate::core::AnswerKey;
use rustc_hash::FxHashMap;

/// Build a probe whose per-question values split the candidates most evenly
///
/// Per question, the value whose frequency is closest to `len / 2` wins;
/// ties go to the smaller value. Only values held by at least one candidate
/// are considered, so a question every candidate agrees on keeps that value
/// even though an unseen smaller value would split the candidates equally
/// badly. Returns `None` for an empty candidate set.
///
/// # Examples
/// ```
/// use answer_key_solver::core::AnswerKey;
/// use answer_key_solver::solver::balanced_probe;
///
/// let candidates = vec![
///     AnswerKey::from(vec![1, 3]),
///     AnswerKey::from(vec![1, 5]),
///     AnswerKey::from(vec![2, 4]),
///     AnswerKey::from(vec![2, 4]),
/// ];
///
/// let probe = balanced_probe(&candidates).unwrap();
/// assert_eq!(probe, AnswerKey::from(vec![1, 4]));
/// ```
#[must_use]
pub fn balanced_probe(candidates: &[AnswerKey]) -> Option<AnswerKey> {
    let num_questions = candidates.first()?.len();
    let total = candidates.len();

    let values = (0..num_questions)
        .map(|question| {
            let frequencies = value_frequencies(candidates, question);
            most_balanced_value(&frequencies, total)
        })
        .collect::<Option<Vec<u32>>>()?;

    Some(AnswerKey::new(values))
}

/// Count how many candidates hold each value at `question`
fn value_frequencies(candidates: &[AnswerKey], question: usize) -> FxHashMap<u32, usize> {
    let mut frequencies = FxHashMap::default();

    for candidate in candidates {
        *frequencies.entry(candidate.value_at(question)).or_insert(0) += 1;
    }

    frequencies
}

/// Value whose frequency is nearest `total / 2`, smallest value on ties
///
/// Distances are compared as `|2 * frequency - total|` to stay in integers.
fn most_balanced_value(frequencies: &FxHashMap<u32, usize>, total: usize) -> Option<u32> {
    frequencies
        .iter()
        .min_by_key(|&(&value, &frequency)| ((2 * frequency).abs_diff(total), value))
        .map(|(&value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_value_nearest_half() {
        // Question 0: value 1 held by 3 of 6, the exact half
        let candidates: Vec<AnswerKey> = [[1, 1], [1, 1], [1, 2], [2, 2], [2, 2], [3, 2]]
            .iter()
            .map(|k| AnswerKey::from(*k))
            .collect();

        let probe = balanced_probe(&candidates).unwrap();
        assert_eq!(probe.value_at(0), 1);
        // Question 1: value 1 held by 2 of 6, value 2 by 4 of 6, equally far from 3
        assert_eq!(probe.value_at(1), 1);
    }

    #[test]
    fn ties_go_to_smaller_value() {
        let candidates: Vec<AnswerKey> = [[3], [2], [1], [4]]
            .iter()
            .map(|k| AnswerKey::from(*k))
            .collect();

        assert_eq!(balanced_probe(&candidates), Some(AnswerKey::from([1])));
    }

    #[test]
    fn unanimous_question_keeps_its_value() {
        let candidates: Vec<AnswerKey> = [[2, 1], [2, 2], [2, 3]]
            .iter()
            .map(|k| AnswerKey::from(*k))
            .collect();

        let probe = balanced_probe(&candidates).unwrap();
        assert_eq!(probe.value_at(0), 2);
    }

    #[test]
    fn settled_questions_match_every_candidate() {
        // Questions 0 and 2 are settled on values above 1
        let candidates: Vec<AnswerKey> = [[4, 1, 3], [4, 2, 3], [4, 3, 3], [4, 1, 3]]
            .iter()
            .map(|k| AnswerKey::from(*k))
            .collect();

        let probe = balanced_probe(&candidates).unwrap();
        assert_eq!(probe.value_at(0), 4);
        assert_eq!(probe.value_at(2), 3);
        assert!(candidates.iter().all(|c| c.score(&probe) >= 2));
    }

    #[test]
    fn probe_may_lie_outside_candidates() {
        let candidates: Vec<AnswerKey> = [[1, 3], [1, 5], [2, 4], [2, 4]]
            .iter()
            .map(|k| AnswerKey::from(*k))
            .collect();

        let probe = balanced_probe(&candidates).unwrap();
        assert_eq!(probe, AnswerKey::from([1, 4]));
        assert!(!candidates.contains(&probe));
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(balanced_probe(&[]).is_none());
    }

    #[test]
    fn frequencies_count_every_candidate() {
        let candidates: Vec<AnswerKey> = [[1, 2], [1, 3], [2, 3]]
            .iter()
            .map(|k| AnswerKey::from(*k))
            .collect();

        let frequencies = value_frequencies(&candidates, 1);
        assert_eq!(frequencies.get(&3), Some(&2));
        assert_eq!(frequencies.get(&2), Some(&1));
        assert_eq!(frequencies.values().sum::<usize>(), 3);
    }
}
