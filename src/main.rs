//! Answer Key Solver - CLI
//!
//! Interactive menu and one-shot commands for narrowing down a quiz answer key.

use answer_key_solver::{
    commands::{
        analyze_probe, analyze_recommendation, run_benchmark, run_interactive, simulate_key,
        simulate_key_with_limit, solve_status,
    },
    core::{OptionCounts, QuestionSpace},
    output::{
        parse_attempt, parse_key, print_analysis_result, print_benchmark_result,
        print_simulation_result, print_solve_report,
    },
    solver::{Solver, SolverConfig, config},
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "answer_key_solver",
    about = "Narrow down a multiple-choice answer key from scored attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of candidate keys to store
    #[arg(long, global = true, default_value_t = config::DEFAULT_MAX_SOLUTIONS)]
    cap: usize,

    /// Evaluate every probe while at most this many candidates remain
    #[arg(long, global = true, default_value_t = config::DEFAULT_EXHAUSTIVE_THRESHOLD)]
    exhaustive_threshold: usize,

    /// Debug logging and per-step details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct SpaceArgs {
    /// Number of questions
    #[arg(short = 'n', long)]
    questions: usize,

    /// Options per question: one count for all (4) or one per question (4,5,4)
    #[arg(short, long)]
    options: OptionCounts,
}

#[derive(Args)]
struct QuizArgs {
    #[command(flatten)]
    space: SpaceArgs,

    /// Scored attempt as KEY:SCORE, e.g. ABCD:2 (repeatable)
    #[arg(short, long = "attempt")]
    attempts: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive,

    /// List what the recorded attempts reveal
    Solve {
        #[command(flatten)]
        quiz: QuizArgs,
    },

    /// Recommend the next attempt
    Recommend {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Restrict recommendations to these keys (repeatable)
        #[arg(short, long = "probe")]
        probes: Vec<String>,
    },

    /// Show how a specific attempt would split the candidates
    Analyze {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Key to analyze
        probe: String,
    },

    /// Play the recommendation loop against a known key
    Simulate {
        #[command(flatten)]
        space: SpaceArgs,

        /// The secret answer key
        #[arg(short, long)]
        secret: String,

        /// Give up after this many probes (default: 4 per question)
        #[arg(short, long)]
        max_probes: Option<usize>,
    },

    /// Benchmark solver performance on random keys
    Benchmark {
        #[command(flatten)]
        space: SpaceArgs,

        /// Number of random keys to test
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SolverConfig::new(cli.cap, cli.exhaustive_threshold);

    // Default to the interactive menu if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&mut io::stdin().lock(), config),
        Commands::Solve { quiz } => run_solve_command(&quiz, config),
        Commands::Recommend { quiz, probes } => run_recommend_command(&quiz, &probes, config),
        Commands::Analyze { quiz, probe } => run_analyze_command(&quiz, &probe, config),
        Commands::Simulate {
            space,
            secret,
            max_probes,
        } => run_simulate_command(&space, &secret, max_probes, config, cli.verbose),
        Commands::Benchmark { space, count, seed } => {
            run_benchmark_command(&space, count, seed, config)
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default = if verbose {
        "answer_key_solver=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_space(args: &SpaceArgs) -> Result<QuestionSpace> {
    QuestionSpace::new(args.questions, args.options.clone()).context("invalid question space")
}

/// Create a solver and record every `--attempt`
fn build_solver(quiz: &QuizArgs, config: SolverConfig) -> Result<Solver> {
    let space = build_space(&quiz.space)?;
    let mut solver = Solver::new(space, config)?;

    for text in &quiz.attempts {
        let (key, score) = parse_attempt(text, solver.space())
            .with_context(|| format!("invalid attempt '{text}'"))?;
        solver
            .record_attempt(key, score)
            .with_context(|| format!("invalid attempt '{text}'"))?;
    }

    Ok(solver)
}

fn run_solve_command(quiz: &QuizArgs, config: SolverConfig) -> Result<()> {
    let solver = build_solver(quiz, config)?;
    let report = solve_status(&solver)?;
    print_solve_report(&report, solver.space());
    Ok(())
}

fn run_recommend_command(quiz: &QuizArgs, probes: &[String], config: SolverConfig) -> Result<()> {
    let solver = build_solver(quiz, config)?;
    let pool = probes
        .iter()
        .map(|text| {
            parse_key(text, solver.space()).with_context(|| format!("invalid probe '{text}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let result = analyze_recommendation(&solver, &pool)?;
    print_analysis_result(&result, solver.space());
    Ok(())
}

fn run_analyze_command(quiz: &QuizArgs, probe: &str, config: SolverConfig) -> Result<()> {
    let solver = build_solver(quiz, config)?;
    let probe =
        parse_key(probe, solver.space()).with_context(|| format!("invalid probe '{probe}'"))?;

    let result = analyze_probe(&solver, &probe)?;
    print_analysis_result(&result, solver.space());
    Ok(())
}

fn run_simulate_command(
    space: &SpaceArgs,
    secret: &str,
    max_probes: Option<usize>,
    config: SolverConfig,
    verbose: bool,
) -> Result<()> {
    let space = build_space(space)?;
    let secret =
        parse_key(secret, &space).with_context(|| format!("invalid secret key '{secret}'"))?;

    let result = match max_probes {
        Some(limit) => simulate_key_with_limit(config, &space, &secret, limit)?,
        None => simulate_key(config, &space, &secret)?,
    };
    print_simulation_result(&result, &space, verbose);
    Ok(())
}

fn run_benchmark_command(
    space: &SpaceArgs,
    count: usize,
    seed: Option<u64>,
    config: SolverConfig,
) -> Result<()> {
    let space = build_space(space)?;
    println!("Running benchmark on {count} random keys over {space}...");

    let result = run_benchmark(config, &space, count, seed)?;
    print_benchmark_result(&result);
    Ok(())
}
