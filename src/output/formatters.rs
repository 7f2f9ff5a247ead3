//! Formatting utilities for terminal output

use crate::core::{Hint, Judgment, Word};
use colored::{ColoredString, Colorize};

/// Colour one guess letter according to its judgment
///
/// Exact cells get a green background, present cells yellow, absent cells a
/// gray background with black text.
#[must_use]
pub fn judgment_cell(letter: char, judgment: Judgment) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match judgment {
        Judgment::Exact => cell.black().on_green(),
        Judgment::Present => cell.black().on_yellow(),
        Judgment::Absent => cell.black().on_white(),
    }
}

/// Render a guess with its hint as a row of coloured cells
#[must_use]
pub fn render_hint_cells(guess: &Word, hint: &Hint) -> String {
    guess
        .letters()
        .iter()
        .zip(hint.judgments())
        .map(|(&letter, &judgment)| judgment_cell(char::from(letter), judgment).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the dictionary is still in play
#[must_use]
pub fn pool_bar(remaining: usize, total: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, total as f64, width)
}
