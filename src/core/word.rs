//! Word representation
//!
//! A Word stores a fixed-length lowercase ASCII word along with a letter
//! presence mask for constant-time membership checks.

use rustc_hash::FxHashMap;
use std::fmt;

/// A fixed-length word
///
/// Equality is by letter sequence. The length is chosen by the caller at
/// construction time; every word in one game shares the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
    mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    LengthMismatch { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Bit for a lowercase ASCII letter in a presence mask
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl Word {
    /// Create a new Word of the given length
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Length is not exactly `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Word, WordError};
    ///
    /// let word = Word::new("Apple", 5).unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert_eq!(
    ///     Word::new("pear", 5),
    ///     Err(WordError::LengthMismatch { expected: 5, actual: 4 })
    /// );
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::LengthMismatch {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Box<[u8]> = text.as_bytes().into();
        let mask = letters.iter().fold(0, |acc, &b| acc | letter_bit(b));

        Ok(Self {
            text,
            letters,
            mask,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Presence mask with bit `letter - b'a'` set for each letter in the word
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.mask
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.mask & letter_bit(letter) != 0
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters.iter() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
