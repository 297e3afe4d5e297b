//! Minimax probe evaluation
//!
//! Score distributions, worst-case partition sizes and exhaustive selection
//! of the probe that minimizes the worst case.

mod calculator;
mod selector;

pub use calculator::{ScoreDistribution, elimination_efficiency};
pub use selector::select_best_probe;
