//! Score distribution and worst-case calculation
//!
//! Given a probe and a set of candidates, partitions the candidates by the
//! score the probe would receive if each one were the true key.

use crate::core::AnswerKey;
use std::collections::BTreeMap;

/// Number of candidates per score outcome for one probe
///
/// Only scores that at least one candidate produces are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDistribution(BTreeMap<usize, usize>);

impl ScoreDistribution {
    /// Partition `candidates` by their score against `probe`
    ///
    /// # Examples
    /// ```
    /// use answer_key_solver::core::AnswerKey;
    /// use answer_key_solver::solver::minimax::ScoreDistribution;
    ///
    /// let probe = AnswerKey::from(vec![1, 1]);
    /// let candidates = vec![
    ///     AnswerKey::from(vec![1, 1]),
    ///     AnswerKey::from(vec![1, 2]),
    ///     AnswerKey::from(vec![2, 1]),
    /// ];
    ///
    /// let distribution = ScoreDistribution::calculate(&probe, &candidates);
    /// assert_eq!(distribution.count(2), 1);
    /// assert_eq!(distribution.count(1), 2);
    /// assert_eq!(distribution.worst_case(), 2);
    /// ```
    #[must_use]
    pub fn calculate(probe: &AnswerKey, candidates: &[AnswerKey]) -> Self {
        let mut counts = BTreeMap::new();

        for candidate in candidates {
            *counts.entry(probe.score(candidate)).or_insert(0) += 1;
        }

        Self(counts)
    }

    /// Candidates that would remain if `score` were revealed
    #[inline]
    #[must_use]
    pub fn count(&self, score: usize) -> usize {
        self.0.get(&score).copied().unwrap_or(0)
    }

    /// Size of the largest partition (0 for an empty distribution)
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.0.values().max().copied().unwrap_or(0)
    }

    /// Total number of candidates partitioned
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct score outcomes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(score, count)` pairs in increasing score order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&score, &count)| (score, count))
    }
}

/// Elimination percentage for each observed score
///
/// For every score in the distribution, `100 * (total - count) / total`: the
/// share of candidates ruled out if that score were revealed. Returns an
/// empty map when `total` is 0.
///
/// # Examples
/// ```
/// use answer_key_solver::core::AnswerKey;
/// use answer_key_solver::solver::minimax::{ScoreDistribution, elimination_efficiency};
///
/// let probe = AnswerKey::from(vec![1, 1]);
/// let candidates = vec![
///     AnswerKey::from(vec![1, 1]),
///     AnswerKey::from(vec![1, 2]),
///     AnswerKey::from(vec![2, 1]),
///     AnswerKey::from(vec![2, 2]),
/// ];
/// let distribution = ScoreDistribution::calculate(&probe, &candidates);
/// let efficiency = elimination_efficiency(&distribution, candidates.len());
///
/// assert!((efficiency[&1] - 50.0).abs() < 1e-9);
/// assert!((efficiency[&2] - 75.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn elimination_efficiency(distribution: &ScoreDistribution, total: usize) -> BTreeMap<usize, f64> {
    if total == 0 {
        return BTreeMap::new();
    }

    distribution
        .iter()
        .map(|(score, count)| {
            let eliminated = total.saturating_sub(count) as f64;
            (score, 100.0 * eliminated / total as f64)
        })
        .collect()
}
