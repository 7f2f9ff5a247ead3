//! Benchmark command
//!
//! Times the adversary over many opening guesses against the full dictionary.

use crate::core::Word;
use crate::solver::Adversary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub guesses_tested: usize,
    pub pool_size: usize,
    pub hint_count: usize,
    pub parallel: bool,
    pub average_survivors: f64,
    pub min_survivors: usize,
    pub max_survivors: usize,
    pub duration: Duration,
    pub guesses_per_second: f64,
}

/// Run the adversary for the first `count` dictionary words as guesses
///
/// Each guess is evaluated against the whole dictionary, as on turn one.
pub fn run_benchmark(
    adversary: &Adversary,
    dictionary: &[Word],
    count: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pool: Vec<&Word> = dictionary.iter().collect();
    let guesses: Vec<&Word> = dictionary.iter().take(count).collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(guesses.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_survivors = 0;
    let mut min_survivors = usize::MAX;
    let mut max_survivors = 0;

    for (idx, guess) in guesses.iter().enumerate() {
        let survivors = adversary.respond(guess, &pool).survivors.len();

        total_survivors += survivors;
        min_survivors = min_survivors.min(survivors);
        max_survivors = max_survivors.max(survivors);

        if idx % 10 == 0 {
            pb.set_message(format!("{}: {survivors} left", guess.text()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let guesses_tested = guesses.len();

    BenchmarkResult {
        guesses_tested,
        pool_size: pool.len(),
        hint_count: adversary.hints().len(),
        parallel: adversary.is_parallel(),
        average_survivors: if guesses_tested > 0 {
            total_survivors as f64 / guesses_tested as f64
        } else {
            0.0
        },
        min_survivors: if guesses_tested > 0 { min_survivors } else { 0 },
        max_survivors,
        duration,
        guesses_per_second: guesses_tested as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
