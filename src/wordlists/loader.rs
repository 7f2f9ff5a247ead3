//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or embedded constants.
//! Both keep the source order, skip entries that are not valid words of the
//! requested length and drop repeats after their first occurrence.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a line-delimited file
///
/// Each line is trimmed; blank lines and invalid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(content.lines(), word_length))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use absurdle::wordlists::loader::words_from_slice;
/// use absurdle::wordlists::WORDLIST;
///
/// let words = words_from_slice(WORDLIST, 5);
/// assert_eq!(words.len(), WORDLIST.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    parse_words(slice.iter().copied(), word_length)
}

fn parse_words<'s>(lines: impl Iterator<Item = &'s str>, word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line, word_length).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
