//! Replay command
//!
//! Feeds a fixed list of guesses to a game without prompting.

use crate::game::{Game, GameStatus, GuessError, Turn};

/// Result of replaying a guess sequence
pub struct ReplayResult {
    pub turns: Vec<Turn>,
    pub status: GameStatus,
    pub remaining: usize,
    pub answer: Option<String>,
    /// Guesses left unplayed because the game ended first
    pub skipped: usize,
}

/// Play `guesses` in order until they run out or the game ends
///
/// # Errors
///
/// Returns the first `GuessError` raised by an invalid guess. Turns played
/// before it are discarded along with the game state.
pub fn replay<S: AsRef<str>>(game: &mut Game, guesses: &[S]) -> Result<ReplayResult, GuessError> {
    let mut turns = Vec::with_capacity(guesses.len());

    for guess in guesses {
        if game.status().is_over() {
            break;
        }
        turns.push(game.submit(guess.as_ref())?);
    }

    Ok(ReplayResult {
        skipped: guesses.len() - turns.len(),
        turns,
        status: game.status(),
        remaining: game.remaining().len(),
        answer: game.answer().map(|w| w.text().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::HintSpace;
    use crate::wordlists::WORDLIST;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn replay_records_each_turn() {
        let words = words_from_slice(WORDLIST, 5);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        let result = replay(&mut game, &["crane", "spoil"]).unwrap();

        assert!(result.turns.len() <= 2);
        assert_eq!(result.turns[0].pool_before, words.len());
        assert_eq!(result.remaining, game.remaining().len());
        assert_eq!(result.answer.as_deref(), game.answer().map(|w| w.text()));
        assert_eq!(result.turns.len() + result.skipped, 2);
    }

    #[test]
    fn replay_stops_when_game_ends() {
        let words = words_from_slice(&["apple", "angle", "ample"], 5);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        let result = replay(&mut game, &["apple", "angle", "ample"]).unwrap();

        assert_eq!(result.turns.len(), 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.status, GameStatus::Won { turns: 1 });
        assert_eq!(result.answer.as_deref(), Some("apple"));
    }

    #[test]
    fn replay_propagates_invalid_guess() {
        let words = words_from_slice(&["apple", "angle"], 5);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        let result = replay(&mut game, &["zzzzz"]);
        assert!(matches!(result, Err(GuessError::NotInDictionary(_))));
    }

    #[test]
    fn replay_nothing() {
        let words = words_from_slice(&["apple"], 5);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        let result = replay::<&str>(&mut game, &[]).unwrap();
        assert!(result.turns.is_empty());
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(result.remaining, 1);
    }
}
