//! Simulation command
//!
//! Plays the recommendation loop against a known secret key.

use crate::core::{AnswerKey, QuestionSpace};
use crate::solver::{SelectionMode, Solver, SolverConfig, recommend};
use anyhow::{Context, Result};
use tracing::debug;

/// Probe limit per question when none is given
pub const PROBES_PER_QUESTION: usize = 4;

/// Result of simulating one secret key
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub secret: AnswerKey,
    pub success: bool,
    pub steps: Vec<SimulationStep>,
}

impl SimulationResult {
    /// Number of probes submitted
    #[must_use]
    pub fn probes(&self) -> usize {
        self.steps.len()
    }
}

/// A single probe in the simulation
#[derive(Debug, Clone)]
pub struct SimulationStep {
    pub probe: AnswerKey,
    pub score: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Candidate list before this probe hit the cap
    pub truncated: bool,
    pub mode: SelectionMode,
}

/// Default probe limit for a question space
#[must_use]
pub fn default_probe_limit(space: &QuestionSpace) -> usize {
    space.num_questions() * PROBES_PER_QUESTION
}

/// Simulate with the default probe limit
///
/// # Errors
///
/// See [`simulate_key_with_limit`].
pub fn simulate_key(
    config: SolverConfig,
    space: &QuestionSpace,
    secret: &AnswerKey,
) -> Result<SimulationResult> {
    simulate_key_with_limit(config, space, secret, default_probe_limit(space))
}

/// Recommend, score against `secret`, record; repeat until the probe is the
/// secret or `max_probes` have been submitted
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the question space
/// - The configuration is rejected by the solver
/// - Recommendation fails
pub fn simulate_key_with_limit(
    config: SolverConfig,
    space: &QuestionSpace,
    secret: &AnswerKey,
    max_probes: usize,
) -> Result<SimulationResult> {
    secret
        .validate(space)
        .context("secret key does not fit the question space")?;

    let mut solver = Solver::new(space.clone(), config)?;
    let mut steps = Vec::new();
    let perfect = space.num_questions();

    for _ in 0..max_probes {
        let enumeration = solver.candidates()?;
        let candidates_before = enumeration.len();

        let recommendation = recommend(
            &enumeration.candidates,
            None,
            config.exhaustive_threshold,
        )?;
        let probe = recommendation.probe;
        let score = probe.score(secret);

        solver.record_attempt(probe.clone(), score)?;
        let candidates_after = solver.count_candidates()?;

        debug!(
            %probe,
            score,
            candidates_before,
            candidates_after,
            "simulated probe"
        );

        steps.push(SimulationStep {
            probe,
            score,
            candidates_before,
            candidates_after,
            truncated: enumeration.truncated,
            mode: recommendation.mode,
        });

        if score == perfect {
            return Ok(SimulationResult {
                secret: secret.clone(),
                success: true,
                steps,
            });
        }
    }

    Ok(SimulationResult {
        secret: secret.clone(),
        success: false,
        steps,
    })
}
