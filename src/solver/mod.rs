//! Answer-key solving algorithms
//!
//! Candidate enumeration, per-question analysis, and probe recommendation.

pub mod analysis;
pub mod config;
mod engine;
pub mod enumerate;
pub mod heuristic;
pub mod minimax;
pub mod recommend;
pub mod strategy;

pub use analysis::{possible_answers_per_question, uncertain_questions};
pub use config::SolverConfig;
pub use engine::{SolutionStatus, Solver};
pub use enumerate::{Enumeration, enumerate};
pub use heuristic::balanced_probe;
pub use minimax::{ScoreDistribution, elimination_efficiency};
pub use recommend::{Recommendation, recommend, recommend_with};
pub use strategy::{
    AdaptiveStrategy, BalancedStrategy, MinimaxStrategy, SelectionMode, Strategy,
};
