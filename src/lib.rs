//! Answer Key Solver
//!
//! Narrows down the answer key of a multiple-choice quiz from scored
//! attempts, and recommends the attempt that guarantees the most eliminations
//! whatever score comes back.
//!
//! # Quick Start
//!
//! ```rust
//! use answer_key_solver::core::QuestionSpace;
//! use answer_key_solver::solver::{Solver, SolverConfig};
//!
//! // Four questions with four options each
//! let space = QuestionSpace::new(4, 4)?;
//! let mut solver = Solver::new(space, SolverConfig::default())?;
//!
//! // Attempt A B C D scored 2 out of 4
//! solver.record_attempt([1, 2, 3, 4], 2)?;
//! assert_eq!(solver.count_candidates()?, 54);
//!
//! let recommendation = solver.recommend()?;
//! println!("Next attempt: {}", recommendation.probe);
//! # Ok::<(), answer_key_solver::core::SolverError>(())
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
