//! Next-probe recommendation
//!
//! Picks the probe that guarantees the most eliminations whatever score
//! comes back, and reports how the candidates would split.

use super::minimax::ScoreDistribution;
use super::strategy::{AdaptiveStrategy, MinimaxStrategy, SelectionMode, Strategy};
use crate::core::{AnswerKey, Result, SolverError};
use tracing::debug;

/// A recommended probe and its evaluation against the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Key to submit next
    pub probe: AnswerKey,
    /// Candidates per possible score for this probe
    pub distribution: ScoreDistribution,
    /// Largest partition: candidates left after the least helpful score
    pub worst_case_remaining: usize,
    /// Candidates ruled out whatever score is revealed
    pub eliminated: usize,
    /// How the probe was chosen
    pub mode: SelectionMode,
}

/// Recommend the next probe
///
/// With a single candidate that candidate is returned directly. A non-empty
/// `probe_pool` is always evaluated probe by probe, so the result is one of
/// its members. Without a pool the candidates themselves are evaluated while
/// their count is at most `exhaustive_threshold`; above it one balanced
/// probe is built from the candidates instead.
///
/// # Errors
/// - [`SolverError::EmptyCandidateSet`] if `candidates` is empty
/// - [`SolverError::InvalidAttempt`] if a pool probe's length differs from
///   the candidates'
///
/// # Examples
/// ```
/// use answer_key_solver::core::AnswerKey;
/// use answer_key_solver::solver::recommend;
///
/// let candidates = vec![
///     AnswerKey::from(vec![1, 2, 3, 4]),
///     AnswerKey::from(vec![1, 2, 4, 3]),
///     AnswerKey::from(vec![2, 2, 3, 4]),
///     AnswerKey::from(vec![2, 1, 3, 4]),
/// ];
///
/// let recommendation = recommend(&candidates, None, 100).unwrap();
/// assert_eq!(recommendation.worst_case_remaining, 1);
/// assert_eq!(recommendation.eliminated, 3);
/// ```
pub fn recommend(
    candidates: &[AnswerKey],
    probe_pool: Option<&[AnswerKey]>,
    exhaustive_threshold: usize,
) -> Result<Recommendation> {
    recommend_with(
        &AdaptiveStrategy::new(exhaustive_threshold),
        candidates,
        probe_pool,
    )
}

/// Recommend the next probe using an explicit strategy
///
/// `strategy` only applies when no external pool is given.
///
/// # Errors
/// Same as [`recommend`].
pub fn recommend_with<S: Strategy>(
    strategy: &S,
    candidates: &[AnswerKey],
    probe_pool: Option<&[AnswerKey]>,
) -> Result<Recommendation> {
    let Some(first) = candidates.first() else {
        return Err(SolverError::EmptyCandidateSet);
    };

    if candidates.len() == 1 {
        return Ok(Recommendation {
            probe: first.clone(),
            distribution: ScoreDistribution::calculate(first, candidates),
            worst_case_remaining: 1,
            eliminated: 0,
            mode: SelectionMode::Solved,
        });
    }

    let external = probe_pool.filter(|pool| !pool.is_empty());
    let pool = external.unwrap_or(candidates);
    if let Some(bad) = pool.iter().find(|probe| probe.len() != first.len()) {
        return Err(SolverError::invalid_attempt(format!(
            "probe {bad} has {} answers but candidates have {}",
            bad.len(),
            first.len()
        )));
    }

    // A supplied pool is always scanned in full
    let (mode, probe) = if external.is_some() {
        (
            SelectionMode::Exhaustive,
            MinimaxStrategy.select_probe(pool, candidates),
        )
    } else {
        (
            strategy.mode_for(candidates.len()),
            strategy.select_probe(pool, candidates),
        )
    };
    let probe = probe.ok_or(SolverError::EmptyCandidateSet)?;

    let distribution = ScoreDistribution::calculate(&probe, candidates);
    let worst_case_remaining = distribution.worst_case();
    let eliminated = candidates.len() - worst_case_remaining;

    debug!(
        mode = mode.label(),
        candidates = candidates.len(),
        pool = pool.len(),
        probe = %probe,
        worst_case_remaining,
        eliminated,
        "recommended probe"
    );

    Ok(Recommendation {
        probe,
        distribution,
        worst_case_remaining,
        eliminated,
        mode,
    })
}
