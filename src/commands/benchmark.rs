//! Benchmark command
//!
//! Tests solver performance across random secret keys.

use super::simulate::{default_probe_limit, simulate_key_with_limit};
use crate::core::{AnswerKey, QuestionSpace};
use crate::solver::SolverConfig;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_keys: usize,
    pub solved: usize,
    pub failed: usize,
    /// Average probes over solved keys
    pub average_probes: f64,
    pub min_probes: usize,
    pub max_probes: usize,
    /// Probe count -> solved keys needing that many
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub keys_per_second: f64,
    /// Seed the secrets were drawn with
    pub seed: u64,
}

/// Draw a uniformly random key from `space`
#[must_use]
pub fn random_key<R: Rng>(space: &QuestionSpace, rng: &mut R) -> AnswerKey {
    space
        .option_counts()
        .iter()
        .map(|&count| rng.random_range(1..=count))
        .collect::<Vec<_>>()
        .into()
}

/// Simulate `count` random secret keys
///
/// Without a `seed` one is drawn from the thread RNG and reported in the
/// result so the run can be repeated.
///
/// # Errors
///
/// Returns an error if the configuration is rejected or a simulation fails.
pub fn run_benchmark(
    config: SolverConfig,
    space: &QuestionSpace,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let max_probes = default_probe_limit(space);

    info!(%space, count, seed, "starting benchmark");

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress bar template")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_probes = 0;
    let mut min_probes = usize::MAX;
    let mut max_probes_used = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for idx in 0..count {
        let secret = random_key(space, &mut rng);
        let result = simulate_key_with_limit(config, space, &secret, max_probes)
            .with_context(|| format!("simulation failed for secret {secret}"))?;

        if result.success {
            let probes = result.probes();
            solved += 1;
            total_probes += probes;
            min_probes = min_probes.min(probes);
            max_probes_used = max_probes_used.max(probes);
            *distribution.entry(probes).or_insert(0) += 1;
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_probes as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_keys: count,
        solved,
        failed: count - solved,
        average_probes: if solved > 0 {
            total_probes as f64 / solved as f64
        } else {
            0.0
        },
        min_probes: if solved > 0 { min_probes } else { 0 },
        max_probes: max_probes_used,
        distribution,
        duration,
        keys_per_second: if secs > 0.0 { count as f64 / secs } else { 0.0 },
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> QuestionSpace {
        QuestionSpace::new(3, vec![2, 3, 4]).unwrap()
    }

    #[test]
    fn random_key_fits_space() {
        let space = space();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let key = random_key(&space, &mut rng);
            assert!(key.validate(&space).is_ok());
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(SolverConfig::default(), &space(), 10, Some(42)).unwrap();

        assert_eq!(result.total_keys, 10);
        assert_eq!(result.solved + result.failed, 10);
        assert_eq!(result.seed, 42);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(SolverConfig::default(), &space(), 10, Some(1)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(SolverConfig::default(), &space(), 12, Some(3)).unwrap();

        // 24 keys, all evaluated exhaustively: every secret is found
        assert_eq!(result.solved, 12);
        assert!(result.average_probes >= result.min_probes as f64);
        assert!(result.average_probes <= result.max_probes as f64);
        assert!(result.min_probes >= 1);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let a = run_benchmark(SolverConfig::default(), &space(), 8, Some(99)).unwrap();
        let b = run_benchmark(SolverConfig::default(), &space(), 8, Some(99)).unwrap();

        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_empty_run() {
        let result = run_benchmark(SolverConfig::default(), &space(), 0, Some(5)).unwrap();

        assert_eq!(result.total_keys, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.min_probes, 0);
    }
}
