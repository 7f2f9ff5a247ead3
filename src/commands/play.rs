//! Line-based interactive game
//!
//! Prompts for guesses on a reader, prints coloured hints to a writer, and
//! stops on a win, a loss, or end of input.

use crate::game::{Game, GameStatus};
use crate::output::formatters::{pool_bar, render_hint_cells};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play a game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_play(game: &mut Game, verbose: bool) -> Result<GameStatus> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(game, &mut stdin.lock(), &mut stdout.lock(), verbose)
}

/// Play a game over arbitrary input and output streams
///
/// Invalid guesses print `Not in word list` and do not use a turn. End of
/// input ends the session and returns the status reached so far.
///
/// # Errors
///
/// Returns an error on any I/O failure.
pub fn run_play_with<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
    verbose: bool,
) -> Result<GameStatus> {
    let total = game.dictionary().len();

    writeln!(
        out,
        "{}",
        format!(
            "Absurdle: {} letters, {} guesses. The word changes to dodge you.",
            game.config().word_length,
            game.config().max_turns
        )
        .bright_cyan()
        .bold()
    )?;

    while !game.status().is_over() {
        write!(out, "Input your guess > ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(game.status());
        }

        let turn = match game.submit(&line) {
            Ok(turn) => turn,
            Err(err) => {
                writeln!(out, "{}", "Not in word list".red())?;
                if verbose {
                    writeln!(out, "  {}", err.to_string().dimmed())?;
                }
                continue;
            }
        };

        writeln!(out, "{}", render_hint_cells(&turn.guess, &turn.hint))?;

        if verbose {
            writeln!(
                out,
                "  {}",
                format!(
                    "[{}] {} → {} candidates, {} turns left",
                    pool_bar(turn.pool_after, total, 20),
                    turn.pool_before,
                    turn.pool_after,
                    game.turns_left()
                )
                .dimmed()
            )?;
        }
    }

    match game.status() {
        GameStatus::Won { turns } => {
            let guesses = if turns == 1 { "guess" } else { "guesses" };
            writeln!(
                out,
                "{}",
                format!("You win! Cornered in {turns} {guesses}.")
                    .green()
                    .bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "{}", "You lose!".red().bold())?;
            match game.answer() {
                Some(answer) => writeln!(
                    out,
                    "Answer: {}",
                    answer.text().to_uppercase().bright_yellow().bold()
                )?,
                None => writeln!(out, "No answer could be determined")?,
            }
        }
        GameStatus::InProgress => {}
    }

    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{HintSpace, Word};
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn play(words: &[Word], config: GameConfig, input: &str) -> (GameStatus, String) {
        let hints = HintSpace::new(config.word_length);
        let mut game = Game::new(words, &hints, config).unwrap();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();

        let status = run_play_with(&mut game, &mut reader, &mut out, true).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn invalid_guess_is_reported_and_retried() {
        let words = words_from_slice(&["apple", "angle", "ample"], 5);
        let (status, output) = play(&words, GameConfig::default(), "pear\nqwert\napple\n");

        assert_eq!(status, GameStatus::Won { turns: 1 });
        assert_eq!(output.matches("Not in word list").count(), 2);
        assert!(output.contains("You win!"));
    }

    #[test]
    fn loss_reveals_answer() {
        let words = words_from_slice(&["zzzzz", "yyyyy", "abcde"], 5);
        let config = GameConfig {
            max_turns: 2,
            ..GameConfig::default()
        };
        let (status, output) = play(&words, config, "abcde\nabcde\n");

        assert_eq!(status, GameStatus::Lost);
        assert!(output.contains("You lose!"));
        assert!(output.contains("ZZZZZ"));
    }

    #[test]
    fn end_of_input_stops_the_game() {
        let words = words_from_slice(&["zzzzz", "yyyyy", "abcde"], 5);
        let (status, output) = play(&words, GameConfig::default(), "abcde\n");

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(output.matches("Input your guess > ").count(), 2);
    }

    #[test]
    fn verbose_shows_pool_sizes() {
        let words = words_from_slice(&["zzzzz", "yyyyy", "abcde"], 5);
        let (_, output) = play(&words, GameConfig::default(), "abcde\n");
        assert!(output.contains("3 → 2 candidates"));
    }
}
