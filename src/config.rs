//! Game configuration
//!
//! Every tunable of a game lives in [`GameConfig`] and is threaded explicitly
//! through the engine rather than read from globals.

use crate::solver::ScoringRule;
use std::fmt;

/// Word length used when none is given
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Longest supported word length (3^10 = 59,049 hints)
pub const MAX_WORD_LENGTH: usize = 10;

/// Turns the player gets before losing
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Length of every word in the dictionary and every guess
    pub word_length: usize,
    /// Number of guesses before the game is lost
    pub max_turns: usize,
    /// Rule used to judge guesses against candidates
    pub scoring: ScoringRule,
    /// Evaluate hints on the rayon thread pool
    pub parallel: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_turns: DEFAULT_MAX_TURNS,
            scoring: ScoringRule::default(),
            parallel: true,
        }
    }
}

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWordLength(usize),
    ZeroTurns,
    UnknownScoringRule(String),
    HintSpaceMismatch { expected: usize, actual: usize },
    DictionaryWordLength { word: String, expected: usize },
    EmptyDictionary,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordLength(len) => write!(
                f,
                "Word length must be between 1 and {MAX_WORD_LENGTH}, got {len}"
            ),
            Self::ZeroTurns => write!(f, "A game needs at least one turn"),
            Self::UnknownScoringRule(name) => write!(
                f,
                "Unknown scoring rule '{name}' (expected 'simplified' or 'canonical')"
            ),
            Self::HintSpaceMismatch { expected, actual } => write!(
                f,
                "Hint space built for {actual}-letter words, game uses {expected}"
            ),
            Self::DictionaryWordLength { word, expected } => write!(
                f,
                "Dictionary word '{word}' is not {expected} letters long"
            ),
            Self::EmptyDictionary => write!(f, "Dictionary contains no usable words"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Build a configuration from raw CLI values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownScoringRule` for an unrecognized rule
    /// name, or any error from [`GameConfig::validate`].
    pub fn from_parts(
        word_length: usize,
        max_turns: usize,
        scoring: &str,
        parallel: bool,
    ) -> Result<Self, ConfigError> {
        let scoring = ScoringRule::from_name(scoring)
            .ok_or_else(|| ConfigError::UnknownScoringRule(scoring.to_string()))?;

        let config = Self {
            word_length,
            max_turns,
            scoring,
            parallel,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is playable
    ///
    /// # Errors
    ///
    /// Returns an error if the word length is outside `1..=MAX_WORD_LENGTH`
    /// or `max_turns` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::InvalidWordLength(self.word_length));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        Ok(())
    }
}
