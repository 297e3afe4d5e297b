//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_probe, analyze_recommendation};
pub use benchmark::{BenchmarkResult, random_key, run_benchmark};
pub use interactive::run_interactive;
pub use simulate::{SimulationResult, SimulationStep, simulate_key, simulate_key_with_limit};
pub use solve::{SolveReport, solve_status};
