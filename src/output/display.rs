//! Display functions for command results

use super::formatters::{efficiency_bar, format_key, format_option};
use crate::commands::{AnalysisResult, BenchmarkResult, SimulationResult, SolveReport};
use crate::core::QuestionSpace;
use colored::Colorize;

/// Candidate lists at or below this size are printed in full
const LIST_CANDIDATES: usize = 10;

/// Print the possible solutions for the recorded attempts
pub fn print_solve_report(report: &SolveReport, space: &QuestionSpace) {
    let status = &report.status;
    let count = status.enumeration.len();

    println!("\n{}", "─".repeat(60).cyan());
    if status.enumeration.truncated {
        println!(
            "Possible solutions: {} {}",
            format!("{count}+").bright_yellow().bold(),
            "(stopped at the storage cap)".bright_black()
        );
    } else {
        println!(
            "Possible solutions: {}",
            count.to_string().bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    if count == 0 {
        println!(
            "\n{}",
            "❌ No answer key fits the recorded attempts. Check the scores."
                .red()
                .bold()
        );
        return;
    }

    if let Some(key) = status.unique_solution() {
        println!(
            "\n{} {}",
            "✅ Unique solution:".green().bold(),
            format_key(key, space).bright_white().bold()
        );
        return;
    }

    println!("\n📋 {}", "Possible options per question:".bright_cyan().bold());
    for (question, values) in status.possible_answers.iter().enumerate() {
        let options: Vec<String> = values
            .iter()
            .map(|&v| format_option(v, space.options_for(question)))
            .collect();
        let line = format!("   Q{:<3} {}", question + 1, options.join(" "));
        if values.len() == 1 {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    let uncertain: Vec<String> = status
        .uncertain
        .iter()
        .map(|q| format!("Q{}", q + 1))
        .collect();
    println!("\n❓ Uncertain questions: {}", uncertain.join(", ").yellow());

    if count <= LIST_CANDIDATES {
        println!("\nRemaining candidates:");
        for candidate in &status.enumeration.candidates {
            println!("  • {}", format_key(candidate, space));
        }
    }

    if let Some(suggestion) = &report.suggestion {
        println!(
            "\n💡 Suggested next attempt: {} {}",
            format_key(&suggestion.probe, space).bright_yellow().bold(),
            format!(
                "(at most {} remain afterwards, {})",
                suggestion.worst_case_remaining,
                suggestion.mode.label()
            )
            .bright_black()
        );
    }
    println!();
}

/// Print how a probe splits the candidates
pub fn print_analysis_result(result: &AnalysisResult, space: &QuestionSpace) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PROBE ANALYSIS:".bright_cyan().bold(),
        format_key(&result.probe, space).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let suffix = if result.truncated { "+" } else { "" };
    println!(
        "\n📊 Against {}{suffix} possible answer keys:",
        result.total_candidates
    );
    if let Some(mode) = result.mode {
        println!("   Selection:   {}", mode.label());
    }
    println!(
        "   Worst case:  {} remain",
        result.worst_case_remaining.to_string().bright_yellow()
    );
    println!(
        "   Guaranteed:  {} eliminated",
        result.eliminated.to_string().green()
    );

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    for (score, count) in result.distribution.iter() {
        let pct = result.efficiency.get(&score).copied().unwrap_or(0.0);
        println!(
            "   Score {score:>3}: {count:>6} remain  [{}] {}",
            efficiency_bar(pct, 30).green(),
            format!("{pct:5.1}% eliminated").bright_yellow()
        );
    }
    println!();
}

/// Print the result of simulating a secret key
pub fn print_simulation_result(result: &SimulationResult, space: &QuestionSpace, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Simulating: {}",
        format_key(&result.secret, space).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nProbe {}: {} scored {}/{}",
            i + 1,
            format_key(&step.probe, space),
            step.score,
            space.num_questions()
        );

        if verbose {
            let before = if step.truncated {
                format!("{}+", step.candidates_before)
            } else {
                step.candidates_before.to_string()
            };
            println!("  Candidates: {before} → {}", step.candidates_after);
            println!("  Selection:  {}", step.mode.label());
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Found the key in {} probes!", result.probes())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Key not found after {} probes", result.probes())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Keys tested:      {}", result.total_keys);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!(
        "   Average probes:   {}",
        format!("{:.2}", result.average_probes)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_probes).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_probes).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Keys/second:      {:.1}", result.keys_per_second);
    println!("   Seed:             {}", result.seed);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&probes, &count) in &result.distribution {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {probes:>3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
