//! Candidate filtering
//!
//! Narrows a candidate pool to the words that agree with one hint.

use super::ScoringRule;
use crate::core::{Hint, Word};

/// Keep every candidate consistent with `hint` for `guess`
///
/// Relative order of the pool is preserved and the pool itself is left
/// untouched. An empty pool yields an empty result.
///
/// # Examples
/// ```
/// use absurdle::core::{Hint, Word};
/// use absurdle::solver::{ScoringRule, filter_candidates};
///
/// let words = vec![
///     Word::new("apple", 5).unwrap(),
///     Word::new("angle", 5).unwrap(),
///     Word::new("ample", 5).unwrap(),
/// ];
/// let pool: Vec<&Word> = words.iter().collect();
/// let guess = Word::new("apple", 5).unwrap();
///
/// let solved = Hint::parse("GGGGG").unwrap();
/// let survivors = filter_candidates(&guess, &solved, &pool, ScoringRule::Simplified);
/// assert_eq!(survivors, vec![&words[0]]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    guess: &Word,
    hint: &Hint,
    pool: &[&'a Word],
    rule: ScoringRule,
) -> Vec<&'a Word> {
    pool.iter()
        .copied()
        .filter(|candidate| rule.is_consistent(guess, candidate, hint))
        .collect()
}

/// Count the candidates that [`filter_candidates`] would keep
#[must_use]
pub fn count_candidates(guess: &Word, hint: &Hint, pool: &[&Word], rule: ScoringRule) -> usize {
    pool.iter()
        .filter(|candidate| rule.is_consistent(guess, candidate, hint))
        .count()
}
