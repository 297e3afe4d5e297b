//! Probe analysis command
//!
//! Scores a chosen probe (or the recommended one) against the current
//! candidates.

use crate::core::{AnswerKey, SolverError};
use crate::solver::{
    Recommendation, ScoreDistribution, SelectionMode, Solver, elimination_efficiency, recommend,
};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Result of analyzing a probe
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub probe: AnswerKey,
    pub total_candidates: usize,
    /// Candidate list hit the cap; figures cover the stored candidates only
    pub truncated: bool,
    pub distribution: ScoreDistribution,
    pub worst_case_remaining: usize,
    pub eliminated: usize,
    /// Score -> percentage of candidates ruled out by that score
    pub efficiency: BTreeMap<usize, f64>,
    /// Set when the probe came from the recommendation engine
    pub mode: Option<SelectionMode>,
}

impl AnalysisResult {
    fn new(
        probe: AnswerKey,
        distribution: ScoreDistribution,
        truncated: bool,
        mode: Option<SelectionMode>,
    ) -> Self {
        let total_candidates = distribution.total();
        let worst_case_remaining = distribution.worst_case();

        Self {
            efficiency: elimination_efficiency(&distribution, total_candidates),
            eliminated: total_candidates - worst_case_remaining,
            probe,
            total_candidates,
            truncated,
            distribution,
            worst_case_remaining,
            mode,
        }
    }
}

/// Analyze how `probe` would split the current candidates
///
/// # Errors
///
/// Returns an error if the probe does not fit the question space or no
/// candidates remain.
pub fn analyze_probe(solver: &Solver, probe: &AnswerKey) -> Result<AnalysisResult> {
    probe.validate(solver.space())?;

    let enumeration = solver
        .candidates()
        .context("failed to enumerate candidate keys")?;
    if enumeration.is_empty() {
        return Err(SolverError::EmptyCandidateSet.into());
    }

    let distribution = ScoreDistribution::calculate(probe, &enumeration.candidates);
    Ok(AnalysisResult::new(
        probe.clone(),
        distribution,
        enumeration.truncated,
        None,
    ))
}

/// Recommend the next probe and analyze it
///
/// An empty `probe_pool` lets the candidates themselves act as probes.
///
/// # Errors
///
/// Returns an error if a pool probe does not fit the question space or no
/// candidates remain.
pub fn analyze_recommendation(solver: &Solver, probe_pool: &[AnswerKey]) -> Result<AnalysisResult> {
    for probe in probe_pool {
        probe.validate(solver.space())?;
    }

    let enumeration = solver
        .candidates()
        .context("failed to enumerate candidate keys")?;
    let pool = (!probe_pool.is_empty()).then_some(probe_pool);

    let Recommendation {
        probe,
        distribution,
        mode,
        ..
    } = recommend(
        &enumeration.candidates,
        pool,
        solver.config().exhaustive_threshold,
    )?;

    Ok(AnalysisResult::new(
        probe,
        distribution,
        enumeration.truncated,
        Some(mode),
    ))
}
