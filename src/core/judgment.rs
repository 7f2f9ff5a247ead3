//! Per-letter judgment
//!
//! The three values a single hint cell can take.

use std::fmt;

/// Feedback for one letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    /// Letter is correct and in the correct position
    Exact,
    /// Letter occurs in the target word, but not at this position
    Present,
    /// Letter does not occur in the target word
    Absent,
}

impl Judgment {
    /// All judgments in hint enumeration order
    pub const ALL: [Self; 3] = [Self::Exact, Self::Present, Self::Absent];

    /// Parse a single hint cell
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// ASCII symbol used when printing hints as text
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order_is_exact_present_absent() {
        assert_eq!(
            Judgment::ALL,
            [Judgment::Exact, Judgment::Present, Judgment::Absent]
        );
    }

    #[test]
    fn from_char_accepts_letters_and_emoji() {
        assert_eq!(Judgment::from_char('g'), Some(Judgment::Exact));
        assert_eq!(Judgment::from_char('🟨'), Some(Judgment::Present));
        assert_eq!(Judgment::from_char('_'), Some(Judgment::Absent));
        assert_eq!(Judgment::from_char('x'), None);
    }

    #[test]
    fn symbol_round_trips_through_from_char() {
        for judgment in Judgment::ALL {
            assert_eq!(Judgment::from_char(judgment.symbol()), Some(judgment));
            assert_eq!(Judgment::from_char(judgment.emoji()), Some(judgment));
        }
    }
}
