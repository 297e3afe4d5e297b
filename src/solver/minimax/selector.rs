//! Minimax probe selection
//!
//! Evaluates every probe in a pool and keeps the one with the smallest
//! worst-case partition.

use super::calculator::ScoreDistribution;
use crate::core::AnswerKey;

/// Select the probe minimizing worst-case remaining candidates
///
/// Returns the winning probe with its score distribution, or `None` if the
/// pool is empty. Ties go to the probe that appears first in `probe_pool`.
///
/// # Examples
/// ```
/// use answer_key_solver::core::AnswerKey;
/// use answer_key_solver::solver::minimax::select_best_probe;
///
/// let candidates = vec![
///     AnswerKey::from(vec![1, 1]),
///     AnswerKey::from(vec![1, 2]),
///     AnswerKey::from(vec![2, 2]),
/// ];
///
/// let (best, distribution) = select_best_probe(&candidates, &candidates).unwrap();
/// // [1,1] scores 2, 1 and 0: every outcome pins the key
/// assert_eq!(best, &AnswerKey::from(vec![1, 1]));
/// assert_eq!(distribution.worst_case(), 1);
/// ```
#[must_use]
pub fn select_best_probe<'a>(
    probe_pool: &'a [AnswerKey],
    candidates: &[AnswerKey],
) -> Option<(&'a AnswerKey, ScoreDistribution)> {
    let mut best: Option<(&'a AnswerKey, ScoreDistribution)> = None;

    for probe in probe_pool {
        let distribution = ScoreDistribution::calculate(probe, candidates);

        let improves = best
            .as_ref()
            .is_none_or(|(_, current)| distribution.worst_case() < current.worst_case());
        if improves {
            // A worst case of 1 cannot be beaten
            let optimal = distribution.worst_case() <= 1;
            best = Some((probe, distribution));
            if optimal {
                break;
            }
        }
    }

    best
}
