//! Probe selection strategies
//!
//! Defines the Strategy trait and the concrete selectors used by
//! recommendation.

use super::heuristic::balanced_probe;
use super::minimax::select_best_probe;
use crate::core::AnswerKey;

/// How a probe was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly one candidate remained and was returned as-is
    Solved,
    /// Every probe in the pool was evaluated
    Exhaustive,
    /// A single balanced probe was built from value frequencies
    Heuristic,
}

impl SelectionMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Exhaustive => "exhaustive minimax",
            Self::Heuristic => "balanced heuristic",
        }
    }
}

/// A strategy for choosing the next probe
pub trait Strategy {
    /// Choose a probe given the pool of allowed probes and the candidates
    ///
    /// Returns `None` if no probe can be produced.
    fn select_probe(
        &self,
        probe_pool: &[AnswerKey],
        candidates: &[AnswerKey],
    ) -> Option<AnswerKey>;

    /// Mode reported for a candidate set of the given size
    fn mode_for(&self, candidate_count: usize) -> SelectionMode;
}

/// Pure minimax strategy
///
/// Always evaluates every probe in the pool.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_probe(
        &self,
        probe_pool: &[AnswerKey],
        candidates: &[AnswerKey],
    ) -> Option<AnswerKey> {
        select_best_probe(probe_pool, candidates).map(|(best, _)| best.clone())
    }

    fn mode_for(&self, _candidate_count: usize) -> SelectionMode {
        SelectionMode::Exhaustive
    }
}

/// Balanced-frequency strategy
///
/// Ignores the pool and builds one probe from the candidates.
pub struct BalancedStrategy;

impl Strategy for BalancedStrategy {
    fn select_probe(
        &self,
        _probe_pool: &[AnswerKey],
        candidates: &[AnswerKey],
    ) -> Option<AnswerKey> {
        balanced_probe(candidates)
    }

    fn mode_for(&self, _candidate_count: usize) -> SelectionMode {
        SelectionMode::Heuristic
    }
}

/// Threshold strategy combining minimax and the balanced heuristic
///
/// Uses minimax while few candidates remain and switches to the balanced
/// probe once evaluating every pair gets expensive.
pub struct AdaptiveStrategy {
    /// Use minimax when candidates <= this threshold
    pub exhaustive_threshold: usize,
}

impl AdaptiveStrategy {
    #[must_use]
    pub const fn new(exhaustive_threshold: usize) -> Self {
        Self {
            exhaustive_threshold,
        }
    }
}

impl Default for AdaptiveStrategy {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_EXHAUSTIVE_THRESHOLD)
    }
}

impl Strategy for AdaptiveStrategy {
    fn select_probe(
        &self,
        probe_pool: &[AnswerKey],
        candidates: &[AnswerKey],
    ) -> Option<AnswerKey> {
        match self.mode_for(candidates.len()) {
            SelectionMode::Heuristic => BalancedStrategy.select_probe(probe_pool, candidates),
            _ => MinimaxStrategy.select_probe(probe_pool, candidates),
        }
    }

    fn mode_for(&self, candidate_count: usize) -> SelectionMode {
        if candidate_count <= self.exhaustive_threshold {
            SelectionMode::Exhaustive
        } else {
            SelectionMode::Heuristic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[[u32; 3]]) -> Vec<AnswerKey> {
        raw.iter().map(|k| AnswerKey::from(*k)).collect()
    }

    #[test]
    fn minimax_strategy_selects_from_pool() {
        let candidates = keys(&[[1, 1, 1], [1, 2, 2], [2, 2, 1]]);
        let pool = keys(&[[3, 3, 3], [1, 1, 2]]);

        let probe = MinimaxStrategy.select_probe(&pool, &candidates).unwrap();
        assert_eq!(probe, AnswerKey::from([1, 1, 2]));
    }

    #[test]
    fn balanced_strategy_ignores_pool() {
        let candidates = keys(&[[1, 1, 1], [2, 2, 2]]);
        let pool = keys(&[[3, 3, 3]]);

        let probe = BalancedStrategy.select_probe(&pool, &candidates).unwrap();
        assert_eq!(probe, AnswerKey::from([1, 1, 1]));
    }

    #[test]
    fn adaptive_switches_on_threshold() {
        let strategy = AdaptiveStrategy::new(2);
        assert_eq!(strategy.mode_for(2), SelectionMode::Exhaustive);
        assert_eq!(strategy.mode_for(3), SelectionMode::Heuristic);
    }

    #[test]
    fn adaptive_uses_heuristic_above_threshold() {
        let candidates = keys(&[[1, 1, 1], [1, 2, 2], [2, 2, 1]]);
        let pool = keys(&[[3, 3, 3]]);

        // Threshold 2 < 3 candidates: the pool is not consulted
        let probe = AdaptiveStrategy::new(2)
            .select_probe(&pool, &candidates)
            .unwrap();
        assert_ne!(probe, AnswerKey::from([3, 3, 3]));
    }

    #[test]
    fn adaptive_default_threshold() {
        assert_eq!(AdaptiveStrategy::default().exhaustive_threshold, 100);
    }
}
