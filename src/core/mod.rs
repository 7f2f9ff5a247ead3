//! Core domain types
//!
//! Words, per-letter judgments, hints and the hint space. Everything here is
//! immutable once built and safe to share across threads.

mod hint;
mod judgment;
mod word;

pub use hint::{Hint, HintSpace, enumerate_hints, hint_count};
pub use judgment::Judgment;
pub use word::{Word, WordError, letter_bit};
