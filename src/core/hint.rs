//! Hints and the hint space
//!
//! A hint is the full row of feedback for one guess: one [`Judgment`] per
//! letter position. The hint space is every possible hint for a given word
//! length, enumerated once in a fixed order.

use super::Judgment;
use std::fmt;
use std::str::FromStr;

/// Feedback row for a guess
///
/// Immutable once constructed. Its length always equals the word length of
/// the guess it was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hint(Box<[Judgment]>);

impl Hint {
    /// Create a hint from a sequence of judgments
    #[must_use]
    pub fn new(judgments: impl Into<Box<[Judgment]>>) -> Self {
        Self(judgments.into())
    }

    /// A hint with the same judgment at every position
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Hint, Judgment};
    ///
    /// let hint = Hint::uniform(Judgment::Exact, 5);
    /// assert!(hint.is_solved());
    /// assert_eq!(hint.to_string(), "GGGGG");
    /// ```
    #[must_use]
    pub fn uniform(judgment: Judgment, length: usize) -> Self {
        Self(vec![judgment; length].into_boxed_slice())
    }

    #[inline]
    #[must_use]
    pub fn judgments(&self) -> &[Judgment] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is [`Judgment::Exact`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&j| j == Judgment::Exact)
    }

    /// Count the positions holding a given judgment
    #[must_use]
    pub fn count(&self, judgment: Judgment) -> usize {
        self.0.iter().filter(|&&j| j == judgment).count()
    }

    /// Parse a hint from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Returns `None` if any character is not a recognized judgment. Length
    /// is not checked here; callers compare it against their word length.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .map(Judgment::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Convert the hint to a string of coloured squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|j| j.emoji()).collect()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for judgment in self.0.iter() {
            write!(f, "{judgment}")?;
        }
        Ok(())
    }
}

impl FromStr for Hint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid hint string: {s}"))
    }
}

/// Number of distinct hints for a word length (3^L)
#[must_use]
pub fn hint_count(word_length: usize) -> usize {
    let exponent = u32::try_from(word_length).unwrap_or(u32::MAX);
    3usize.saturating_pow(exponent)
}

/// Enumerate every hint for a word length
///
/// Hints are produced as an odometer over [`Judgment::ALL`] with the last
/// position varying fastest, so the first hint is all-`Exact` and the last is
/// all-`Absent`. The order is stable across runs; adversary tie-breaks depend
/// on it.
///
/// `word_length` is expected to be validated by `GameConfig` first; the
/// result holds 3^`word_length` hints.
///
/// # Examples
/// ```
/// use absurdle::core::enumerate_hints;
///
/// let hints = enumerate_hints(2);
/// assert_eq!(hints.len(), 9);
/// assert_eq!(hints[0].to_string(), "GG");
/// assert_eq!(hints[1].to_string(), "GY");
/// assert_eq!(hints[8].to_string(), "--");
/// ```
#[must_use]
pub fn enumerate_hints(word_length: usize) -> Vec<Hint> {
    let mut hints = Vec::with_capacity(hint_count(word_length));
    let mut digits = vec![0usize; word_length];

    loop {
        hints.push(Hint::new(
            digits.iter().map(|&d| Judgment::ALL[d]).collect::<Vec<_>>(),
        ));

        // Advance the odometer, carrying towards position 0
        let mut position = word_length;
        loop {
            if position == 0 {
                return hints;
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < Judgment::ALL.len() {
                break;
            }
            digits[position] = 0;
        }
    }
}

/// Every possible hint for one word length
///
/// Built once per process and shared by reference into every adversary
/// evaluation. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct HintSpace {
    word_length: usize,
    hints: Vec<Hint>,
}

impl HintSpace {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            hints: enumerate_hints(word_length),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All hints in enumeration order
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// The first enumerated hint (all-`Exact`)
    ///
    /// The enumeration always holds at least one hint, even for length zero.
    #[must_use]
    pub fn first(&self) -> &Hint {
        &self.hints[0]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Hint> {
        self.hints.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hint> {
        self.hints.iter()
    }
}

impl<'a> IntoIterator for &'a HintSpace {
    type Item = &'a Hint;
    type IntoIter = std::slice::Iter<'a, Hint>;

    fn into_iter(self) -> Self::IntoIter {
        self.hints.iter()
    }
}
