//! Solution status command
//!
//! Reports what the recorded attempts reveal about the answer key.

use crate::solver::{Recommendation, SolutionStatus, Solver, recommend};
use anyhow::{Context, Result};

/// Above this many candidates a next probe is suggested alongside the status
pub const SUGGEST_ABOVE: usize = 10;

/// Result of a status query
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub status: SolutionStatus,
    /// Suggested next probe when many candidates remain
    pub suggestion: Option<Recommendation>,
}

/// Enumerate the candidates and summarize them per question
///
/// # Errors
///
/// Returns an error if enumeration or the suggested recommendation fails.
pub fn solve_status(solver: &Solver) -> Result<SolveReport> {
    let status = solver.status().context("failed to enumerate candidate keys")?;

    let suggestion = if status.enumeration.len() > SUGGEST_ABOVE {
        Some(
            recommend(
                &status.enumeration.candidates,
                None,
                solver.config().exhaustive_threshold,
            )
            .context("failed to suggest the next probe")?,
        )
    } else {
        None
    };

    Ok(SolveReport { status, suggestion })
}
