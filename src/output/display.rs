//! Display functions for command results

use super::formatters::{pool_bar, render_hint_cells};
use crate::commands::{BenchmarkResult, ReplayResult};
use crate::game::GameStatus;
use colored::Colorize;

/// Print the result of replaying a guess sequence
pub fn print_replay_result(result: &ReplayResult, dictionary_size: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        print!(
            "Turn {}: {}  {}",
            i + 1,
            render_hint_cells(&turn.guess, &turn.hint),
            turn.hint.to_emoji()
        );
        if verbose {
            print!(
                "  [{}] {} → {}",
                pool_bar(turn.pool_after, dictionary_size, 20),
                turn.pool_before,
                turn.pool_after
            );
        }
        println!();
    }

    println!("{}", "─".repeat(60).cyan());

    match result.status {
        GameStatus::Won { turns } => println!(
            "{}",
            format!("✅ Cornered in {turns} guesses!").green().bold()
        ),
        GameStatus::Lost => {
            println!("{}", "❌ Out of guesses".red().bold());
            if let Some(answer) = &result.answer {
                println!("   Answer: {}", answer.to_uppercase().bright_yellow().bold());
            }
        }
        GameStatus::InProgress => println!(
            "{} candidates remaining",
            result.remaining.to_string().bright_yellow()
        ),
    }

    if result.skipped > 0 {
        println!(
            "{}",
            format!("{} guesses not played (game over)", result.skipped).dimmed()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Adversary:".bright_cyan().bold());
    println!("   Guesses tested:   {}", result.guesses_tested);
    println!("   Pool size:        {}", result.pool_size);
    println!("   Hints per guess:  {}", result.hint_count);
    println!(
        "   Mode:             {}",
        if result.parallel {
            "parallel"
        } else {
            "sequential"
        }
    );

    println!("\n📈 {}", "Surviving candidates:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.1}", result.average_survivors)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Smallest:         {}",
        format!("{}", result.min_survivors).green()
    );
    println!(
        "   Largest:          {}",
        format!("{}", result.max_survivors).yellow()
    );

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Guesses/second:   {:.1}", result.guesses_per_second);
}
