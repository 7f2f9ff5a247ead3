//! One game against the adversary
//!
//! Validates guesses, asks the adversary for a hint, shrinks the candidate
//! pool and tracks win/loss.

use crate::config::{ConfigError, GameConfig};
use crate::core::{Hint, HintSpace, Word, WordError};
use crate::solver::Adversary;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for rejected guesses
///
/// A rejected guess never consumes a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    LengthMismatch { expected: usize, actual: usize },
    InvalidWord(WordError),
    NotInDictionary(String),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::InvalidWord(err) => write!(f, "Invalid guess: {err}"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the word list"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::LengthMismatch { expected, actual } => {
                Self::LengthMismatch { expected, actual }
            }
            other => Self::InvalidWord(other),
        }
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { turns: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single played turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub hint: Hint,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Game state over a borrowed dictionary
pub struct Game<'a> {
    dictionary: &'a [Word],
    lookup: FxHashSet<&'a str>,
    adversary: Adversary<'a>,
    config: GameConfig,
    pool: Vec<&'a Word>,
    history: Vec<Turn>,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game with the whole dictionary as the candidate pool
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid, the hint
    /// space was built for another word length, the dictionary is empty, or
    /// a dictionary word has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use absurdle::config::GameConfig;
    /// use absurdle::core::HintSpace;
    /// use absurdle::game::{Game, GameStatus};
    /// use absurdle::wordlists::{WORDLIST, loader::words_from_slice};
    ///
    /// let dictionary = words_from_slice(WORDLIST, 5);
    /// let hints = HintSpace::new(5);
    /// let mut game = Game::new(&dictionary, &hints, GameConfig::default()).unwrap();
    ///
    /// let turn = game.submit("crane").unwrap();
    /// assert_eq!(turn.pool_before, dictionary.len());
    /// assert!(turn.pool_after <= turn.pool_before);
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn new(
        dictionary: &'a [Word],
        hints: &'a HintSpace,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if hints.word_length() != config.word_length {
            return Err(ConfigError::HintSpaceMismatch {
                expected: config.word_length,
                actual: hints.word_length(),
            });
        }

        if dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }

        if let Some(word) = dictionary.iter().find(|w| w.len() != config.word_length) {
            return Err(ConfigError::DictionaryWordLength {
                word: word.text().to_string(),
                expected: config.word_length,
            });
        }

        Ok(Self {
            dictionary,
            lookup: dictionary.iter().map(Word::text).collect(),
            adversary: Adversary::from_config(hints, &config),
            config,
            pool: dictionary.iter().collect(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Play one guess
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` if the game is over, the guess is not a valid
    /// word of the configured length, or it is not in the dictionary.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(input.trim(), self.config.word_length)?;
        if !self.lookup.contains(guess.text()) {
            return Err(GuessError::NotInDictionary(guess.text().to_string()));
        }

        let pool_before = self.pool.len();
        let verdict = self.adversary.respond(&guess, &self.pool);
        let solved = verdict.is_solved();
        self.pool = verdict.survivors;

        let turn = Turn {
            guess,
            hint: verdict.hint,
            pool_before,
            pool_after: self.pool.len(),
        };
        self.history.push(turn.clone());

        if solved {
            self.status = GameStatus::Won {
                turns: self.history.len(),
            };
        } else if self.history.len() >= self.config.max_turns {
            self.status = GameStatus::Lost;
        }

        Ok(turn)
    }

    /// Start over with the full dictionary
    pub fn reset(&mut self) {
        self.pool = self.dictionary.iter().collect();
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The word the adversary would settle on now
    ///
    /// First remaining candidate in dictionary order, or `None` if the pool
    /// is empty.
    #[must_use]
    pub fn answer(&self) -> Option<&'a Word> {
        self.pool.first().copied()
    }

    /// Candidates still consistent with every revealed hint
    #[must_use]
    pub fn remaining(&self) -> &[&'a Word] {
        &self.pool
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        self.config.max_turns.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Check a word against the dictionary without playing it
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Judgment;
    use crate::solver::ScoringRule;
    use crate::wordlists::WORDLIST;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary(texts: &[&str]) -> Vec<Word> {
        words_from_slice(texts, 5)
    }

    #[test]
    fn new_game_starts_with_whole_dictionary() {
        let words = words_from_slice(WORDLIST, 5);
        let hints = HintSpace::new(5);
        let game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        assert_eq!(game.remaining().len(), words.len());
        assert_eq!(game.answer(), words.first());
        assert_eq!(game.turns_left(), 6);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn new_rejects_mismatched_hint_space() {
        let words = dictionary(&["apple"]);
        let hints = HintSpace::new(4);
        assert!(matches!(
            Game::new(&words, &hints, GameConfig::default()),
            Err(ConfigError::HintSpaceMismatch {
                expected: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn new_rejects_empty_dictionary() {
        let hints = HintSpace::new(5);
        assert!(matches!(
            Game::new(&[], &hints, GameConfig::default()),
            Err(ConfigError::EmptyDictionary)
        ));
    }

    #[test]
    fn new_rejects_wrong_length_words() {
        let words = vec![Word::new("apple", 5).unwrap(), Word::new("cat", 3).unwrap()];
        let hints = HintSpace::new(5);
        assert!(matches!(
            Game::new(&words, &hints, GameConfig::default()),
            Err(ConfigError::DictionaryWordLength { .. })
        ));
    }

    #[test]
    fn invalid_guesses_do_not_use_turns() {
        let words = dictionary(&["apple", "angle", "ample"]);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        assert_eq!(
            game.submit("pear"),
            Err(GuessError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            game.submit("zzzzz"),
            Err(GuessError::NotInDictionary("zzzzz".to_string()))
        );
        assert!(matches!(game.submit("ap9le"), Err(GuessError::InvalidWord(_))));
        assert_eq!(game.turns_left(), 6);
        assert_eq!(game.remaining().len(), 3);
    }

    #[test]
    fn pool_only_shrinks() {
        let words = words_from_slice(WORDLIST, 5);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        for guess in ["crane", "spoil", "thumb"] {
            if game.status().is_over() {
                break;
            }
            let before: Vec<&Word> = game.remaining().to_vec();
            let turn = game.submit(guess).unwrap();

            assert_eq!(turn.pool_before, before.len());
            assert_eq!(turn.pool_after, game.remaining().len());
            assert!(game.remaining().iter().all(|w| before.contains(w)));
            // Every survivor agrees with the revealed hint
            assert!(game.remaining().iter().all(|w| {
                ScoringRule::Simplified.is_consistent(&turn.guess, w, &turn.hint)
            }));
        }
    }

    #[test]
    fn win_when_adversary_is_cornered() {
        let words = dictionary(&["apple", "angle", "ample"]);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        let turn = game.submit("apple").unwrap();
        assert!(turn.hint.is_solved());
        assert_eq!(game.status(), GameStatus::Won { turns: 1 });
        assert_eq!(game.answer().map(Word::text), Some("apple"));
        assert_eq!(game.submit("angle"), Err(GuessError::GameOver));
    }

    #[test]
    fn lose_after_max_turns() {
        let words = dictionary(&["zzzzz", "yyyyy", "xxxxx", "abcde"]);
        let hints = HintSpace::new(5);
        let config = GameConfig {
            max_turns: 1,
            ..GameConfig::default()
        };
        let mut game = Game::new(&words, &hints, config).unwrap();

        let turn = game.submit("abcde").unwrap();
        assert_eq!(turn.hint, Hint::uniform(Judgment::Absent, 5));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.turns_left(), 0);
        assert_eq!(game.answer().map(Word::text), Some("zzzzz"));
    }

    #[test]
    fn reset_restores_dictionary() {
        let words = dictionary(&["apple", "angle", "ample"]);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        game.submit("apple").unwrap();
        game.reset();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining().len(), 3);
        assert!(game.history().is_empty());
    }

    #[test]
    fn guesses_are_normalized() {
        let words = dictionary(&["apple", "angle"]);
        let hints = HintSpace::new(5);
        let mut game = Game::new(&words, &hints, GameConfig::default()).unwrap();

        assert!(game.contains("apple"));
        let turn = game.submit("  ANGLE\n").unwrap();
        assert_eq!(turn.guess.text(), "angle");
    }

    #[test]
    fn guess_error_messages() {
        assert_eq!(
            GuessError::NotInDictionary("qwert".to_string()).to_string(),
            "'qwert' is not in the word list"
        );
        assert!(GuessError::GameOver.to_string().contains("over"));
    }
}
