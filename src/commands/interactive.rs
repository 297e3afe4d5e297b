//! Interactive menu mode
//!
//! Text-based menu for entering attempts and querying the solver.

use super::analyze::analyze_recommendation;
use super::solve::solve_status;
use crate::core::{OptionCounts, QuestionSpace};
use crate::output::formatters::parse_key;
use crate::output::{print_analysis_result, print_solve_report};
use crate::solver::{Solver, SolverConfig};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive menu mode
///
/// Prompts for the question space, then loops over the menu until the user
/// exits or `input` is exhausted.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive<R: BufRead>(input: &mut R, config: SolverConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Answer Key Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Record scored attempts and I'll narrow down the answer key.");
    println!("Options can be typed as letters (A = 1, B = 2, ...) or digits.");
    println!("Use commas between options for questions with more than 9 options.\n");

    let Some(space) = read_space(input)? else {
        return Ok(());
    };
    println!(
        "\n✓ Quiz set up: {space}, {} possible answer keys",
        space.key_space_size()
    );

    let mut solver = Solver::new(space, config)?;
    run_menu(input, &mut solver)
}

/// Prompt for the question count and option counts until they form a valid
/// space
///
/// Returns `None` if input ends first.
///
/// # Errors
///
/// Returns an error on an I/O failure.
pub fn read_space<R: BufRead>(input: &mut R) -> Result<Option<QuestionSpace>> {
    loop {
        let Some(text) = get_user_input(input, "Number of questions")? else {
            return Ok(None);
        };
        let Ok(num_questions) = text.parse::<usize>() else {
            println!("{}", "❌ Enter a whole number of questions\n".red());
            continue;
        };

        let Some(text) = get_user_input(input, "Options per question (e.g. 4 or 4,5,4)")? else {
            return Ok(None);
        };
        let counts = match text.parse::<OptionCounts>() {
            Ok(counts) => counts,
            Err(e) => {
                println!("{}", format!("❌ {e}\n").red());
                continue;
            }
        };

        match QuestionSpace::new(num_questions, counts) {
            Ok(space) => return Ok(Some(space)),
            Err(e) => println!("{}", format!("❌ {e}\n").red()),
        }
    }
}

/// Menu loop over an existing solver
///
/// # Errors
///
/// Returns an error on an I/O failure. Solver errors are reported and the
/// loop continues.
pub fn run_menu<R: BufRead>(input: &mut R, solver: &mut Solver) -> Result<()> {
    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Attempts recorded: {}",
            solver.attempts().len().to_string().bright_cyan()
        );
        println!("  1. Add an attempt with its score");
        println!("  2. Find possible solutions");
        println!("  3. Recommend the next attempt");
        println!("  4. Exit");
        println!("────────────────────────────────────────────────────────────");

        let Some(choice) = get_user_input(input, "Choose")? else {
            return Ok(());
        };

        match choice.to_lowercase().as_str() {
            "1" => {
                if !add_attempt(input, solver)? {
                    return Ok(());
                }
            }
            "2" => match solve_status(solver) {
                Ok(report) => print_solve_report(&report, solver.space()),
                Err(e) => println!("{}", format!("❌ {e:#}\n").red()),
            },
            "3" => match analyze_recommendation(solver, &[]) {
                Ok(result) => print_analysis_result(&result, solver.space()),
                Err(e) => println!("{}", format!("❌ {e:#}\n").red()),
            },
            "4" | "q" | "quit" | "exit" => {
                println!("\n👋 Goodbye!\n");
                return Ok(());
            }
            _ => println!("❌ Choose 1, 2, 3 or 4\n"),
        }
    }
}

/// Read one attempt and record it
///
/// Returns `false` if input ended.
fn add_attempt<R: BufRead>(input: &mut R, solver: &mut Solver) -> Result<bool> {
    let Some(text) = get_user_input(input, "Answer key (e.g. ABCD)")? else {
        return Ok(false);
    };
    let key = match parse_key(&text, solver.space()) {
        Ok(key) => key,
        Err(e) => {
            println!("{}", format!("❌ {e}\n").red());
            return Ok(true);
        }
    };

    let Some(text) = get_user_input(input, "Score (correct answers)")? else {
        return Ok(false);
    };
    let Ok(score) = text.parse::<usize>() else {
        println!("{}", format!("❌ '{text}' is not a valid score\n").red());
        return Ok(true);
    };

    match solver.record_attempt(key, score) {
        Ok(()) => println!("{}", "✓ Attempt recorded\n".green()),
        Err(e) => println!("{}", format!("❌ {e}\n").red()),
    }
    Ok(true)
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read user input")?;

    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
