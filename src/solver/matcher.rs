//! Hint consistency checks
//!
//! Decides whether a candidate target word could have produced a given hint
//! for a guess. Two scoring rules are supported:
//! - `Simplified`: per-letter existence checks, repeated letters are not
//!   counted. This is the default game behaviour.
//! - `Canonical`: standard Wordle scoring with multiplicity-aware yellows.

use crate::core::{Hint, Judgment, Word, letter_bit};
use std::fmt;

/// Rule used to judge a guess against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringRule {
    /// Existence-only `Present`/`Absent` checks
    #[default]
    Simplified,
    /// Exact matches first, then yellows limited by remaining letter counts
    Canonical,
}

impl ScoringRule {
    /// Look up a rule by name
    ///
    /// Supported names: "simplified", "simple", "canonical", "wordle"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "simplified" | "simple" => Some(Self::Simplified),
            "canonical" | "wordle" => Some(Self::Canonical),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simplified => "simplified",
            Self::Canonical => "canonical",
        }
    }

    /// Check `hint` against `target` for `guess` under this rule
    #[inline]
    #[must_use]
    pub fn is_consistent(self, guess: &Word, target: &Word, hint: &Hint) -> bool {
        match self {
            Self::Simplified => is_consistent(guess, target, hint),
            Self::Canonical => is_consistent_canonical(guess, target, hint),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether scoring `guess` against `target` would yield `hint`
///
/// Simplified rule:
/// 1. An `Exact` position requires the target letter to equal the guess letter.
/// 2. A `Present` position requires the target letter to differ.
/// 3. Every `Present` letter must occur somewhere in the target.
/// 4. No `Absent` letter may occur anywhere in the target.
///
/// Letters are checked for existence only, so repeated letters are not
/// counted. Guess, target and hint must share one length; this is not
/// re-validated.
///
/// # Examples
/// ```
/// use absurdle::core::{Hint, Word};
/// use absurdle::solver::is_consistent;
///
/// let guess = Word::new("apple", 5).unwrap();
/// let target = Word::new("angle", 5).unwrap();
///
/// assert!(is_consistent(&guess, &target, &Hint::parse("G--GG").unwrap()));
/// assert!(!is_consistent(&guess, &target, &Hint::parse("GGGGG").unwrap()));
/// ```
#[must_use]
pub fn is_consistent(guess: &Word, target: &Word, hint: &Hint) -> bool {
    debug_assert_eq!(guess.len(), target.len());
    debug_assert_eq!(guess.len(), hint.len());

    let mut required = 0u32;
    let mut excluded = 0u32;

    for ((&g, &t), &judgment) in guess
        .letters()
        .iter()
        .zip(target.letters())
        .zip(hint.judgments())
    {
        match judgment {
            Judgment::Exact => {
                if t != g {
                    return false;
                }
            }
            Judgment::Present => {
                if t == g {
                    return false;
                }
                required |= letter_bit(g);
            }
            Judgment::Absent => excluded |= letter_bit(g),
        }
    }

    let present = target.letter_mask();
    present & required == required && present & excluded == 0
}

/// Score `guess` against `target` with standard Wordle rules
///
/// Exact matches are marked first and consume their letter. Remaining
/// positions are marked `Present` left to right while unmatched copies of
/// the letter remain in the target; everything else is `Absent`.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::solver::score;
///
/// let guess = Word::new("robot", 5).unwrap();
/// let target = Word::new("floor", 5).unwrap();
/// assert_eq!(score(&guess, &target).to_string(), "YY-G-");
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Hint {
    let mut result = vec![Judgment::Absent; guess.len()];
    let mut available = target.char_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            result[i] = Judgment::Exact;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, limited by what is left
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Judgment::Absent
            && let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Judgment::Present;
            *count -= 1;
        }
    }

    Hint::new(result)
}

/// Canonical-rule counterpart of [`is_consistent`]
#[must_use]
pub fn is_consistent_canonical(guess: &Word, target: &Word, hint: &Hint) -> bool {
    // Exact positions veto before the full score is computed
    let exact_ok = guess
        .letters()
        .iter()
        .zip(target.letters())
        .zip(hint.judgments())
        .all(|((g, t), &j)| (j == Judgment::Exact) == (g == t));

    exact_ok && score(guess, target) == *hint
}
