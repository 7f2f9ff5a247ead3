//! Adversarial hint selection
//!
//! For a guess, reveal the hint that keeps the most candidates alive. Ties go
//! to the hint that comes first in hint-space enumeration order.

use super::ScoringRule;
use super::filter::{count_candidates, filter_candidates};
use crate::config::GameConfig;
use crate::core::{Hint, HintSpace, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Outcome of one adversarial selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict<'a> {
    /// The revealed hint
    pub hint: Hint,
    /// Candidates consistent with the hint, in pool order
    pub survivors: Vec<&'a Word>,
}

impl<'a> Verdict<'a> {
    /// True when no candidate survived (only possible for an empty pool)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }

    /// First surviving candidate, if any
    ///
    /// Callers must handle `None` rather than index into `survivors`.
    #[must_use]
    pub fn answer(&self) -> Option<&'a Word> {
        self.survivors.first().copied()
    }

    /// The guess was forced to be the answer
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.hint.is_solved() && !self.survivors.is_empty()
    }
}

/// Select the hint with the largest surviving candidate set
///
/// Walks `hints` in enumeration order and keeps a hint only if its survivor
/// count is strictly greater than the best so far, so the earliest hint wins
/// every tie. An empty pool returns the first hint with no survivors.
///
/// # Examples
/// ```
/// use absurdle::core::{HintSpace, Word};
/// use absurdle::solver::{ScoringRule, select_worst_hint};
///
/// let hints = HintSpace::new(5);
/// let words = vec![
///     Word::new("zzzzz", 5).unwrap(),
///     Word::new("yyyyy", 5).unwrap(),
///     Word::new("apple", 5).unwrap(),
/// ];
/// let pool: Vec<&Word> = words.iter().collect();
/// let guess = Word::new("aaaaa", 5).unwrap();
///
/// let verdict = select_worst_hint(&guess, &pool, &hints, ScoringRule::Simplified);
/// assert_eq!(verdict.hint.to_string(), "-----");
/// assert_eq!(verdict.survivors.len(), 2);
/// ```
#[must_use]
pub fn select_worst_hint<'a>(
    guess: &Word,
    pool: &[&'a Word],
    hints: &HintSpace,
    rule: ScoringRule,
) -> Verdict<'a> {
    let mut worst = hints.first();
    let mut survivors = Vec::new();

    if pool.is_empty() {
        return Verdict {
            hint: worst.clone(),
            survivors,
        };
    }

    for hint in hints {
        let candidates = filter_candidates(guess, hint, pool, rule);
        if candidates.len() > survivors.len() {
            worst = hint;
            survivors = candidates;

            // Nothing can beat the whole pool
            if survivors.len() == pool.len() {
                break;
            }
        }
    }

    Verdict {
        hint: worst.clone(),
        survivors,
    }
}

/// Parallel version of [`select_worst_hint`]
///
/// Hints are counted on the rayon pool and reduced by `(count, earliest
/// index)`, so the result is identical to the sequential walk regardless of
/// scheduling. Only the winning hint's survivors are materialized.
#[must_use]
pub fn select_worst_hint_parallel<'a>(
    guess: &Word,
    pool: &[&'a Word],
    hints: &HintSpace,
    rule: ScoringRule,
) -> Verdict<'a> {
    let (index, _) = hints
        .hints()
        .par_iter()
        .enumerate()
        .map(|(index, hint)| (index, count_candidates(guess, hint, pool, rule)))
        .reduce(|| (0, 0), prefer_larger);

    let hint = hints.get(index).unwrap_or_else(|| hints.first());

    Verdict {
        hint: hint.clone(),
        survivors: filter_candidates(guess, hint, pool, rule),
    }
}

/// Reduction step: larger count wins, equal counts keep the earlier index
fn prefer_larger(a: (usize, usize), b: (usize, usize)) -> (usize, usize) {
    match a.1.cmp(&b.1) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
    }
}

/// The game's opponent
///
/// Holds a shared reference to the process-wide hint space along with the
/// scoring rule and evaluation mode. Keeps no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct Adversary<'h> {
    hints: &'h HintSpace,
    rule: ScoringRule,
    parallel: bool,
}

impl<'h> Adversary<'h> {
    #[must_use]
    pub const fn new(hints: &'h HintSpace, rule: ScoringRule, parallel: bool) -> Self {
        Self {
            hints,
            rule,
            parallel,
        }
    }

    #[must_use]
    pub const fn from_config(hints: &'h HintSpace, config: &GameConfig) -> Self {
        Self::new(hints, config.scoring, config.parallel)
    }

    /// Choose the hint to reveal for `guess` and the pool that survives it
    #[must_use]
    pub fn respond<'a>(&self, guess: &Word, pool: &[&'a Word]) -> Verdict<'a> {
        if self.parallel {
            select_worst_hint_parallel(guess, pool, self.hints, self.rule)
        } else {
            select_worst_hint(guess, pool, self.hints, self.rule)
        }
    }

    #[must_use]
    pub const fn hints(&self) -> &'h HintSpace {
        self.hints
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDLIST;
    use crate::wordlists::loader::words_from_slice;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t, 5).unwrap()).collect()
    }

    fn texts<'a>(survivors: &[&'a Word]) -> Vec<&'a str> {
        survivors.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn apple_scenario() {
        let hints = HintSpace::new(5);
        let pool_words = words(&["apple", "angle", "ample"]);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let guess = Word::new("apple", 5).unwrap();

        // The all-Exact hint keeps exactly the guess
        let solved = filter_candidates(&guess, hints.first(), &pool, ScoringRule::Simplified);
        assert_eq!(texts(&solved), ["apple"]);

        // Every word lands on its own hint, so the earliest one (all-Exact) wins
        let verdict = select_worst_hint(&guess, &pool, &hints, ScoringRule::Simplified);
        assert!(verdict.hint.is_solved());
        assert_eq!(texts(&verdict.survivors), ["apple"]);
        assert!(verdict.is_solved());
    }

    #[test]
    fn tie_goes_to_earliest_hint() {
        let hints = HintSpace::new(5);
        // angle -> G--GG, ample -> GYGGG; Y enumerates before -
        let pool_words = words(&["angle", "ample"]);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let guess = Word::new("apple", 5).unwrap();

        let sequential = select_worst_hint(&guess, &pool, &hints, ScoringRule::Simplified);
        assert_eq!(sequential.hint.to_string(), "GYGGG");
        assert_eq!(texts(&sequential.survivors), ["ample"]);

        let parallel = select_worst_hint_parallel(&guess, &pool, &hints, ScoringRule::Simplified);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn empty_pool_returns_first_hint() {
        let hints = HintSpace::new(5);
        let guess = Word::new("apple", 5).unwrap();

        let verdict = select_worst_hint(&guess, &[], &hints, ScoringRule::Simplified);
        assert_eq!(&verdict.hint, hints.first());
        assert!(verdict.is_empty());
        assert_eq!(verdict.answer(), None);
        assert!(!verdict.is_solved());

        let parallel = select_worst_hint_parallel(&guess, &[], &hints, ScoringRule::Simplified);
        assert_eq!(parallel, verdict);
    }

    #[test]
    fn disjoint_letters_keep_all_absent() {
        let hints = HintSpace::new(5);
        let pool_words = words(&["zzzzz"]);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let guess = Word::new("aaaaa", 5).unwrap();

        let verdict = select_worst_hint(&guess, &pool, &hints, ScoringRule::Simplified);
        assert_eq!(verdict.hint.to_string(), "-----");
        assert_eq!(texts(&verdict.survivors), ["zzzzz"]);

        for hint in &hints {
            let kept = count_candidates(&guess, hint, &pool, ScoringRule::Simplified);
            let all_absent = hint.count(crate::core::Judgment::Absent) == 5;
            assert_eq!(kept == 1, all_absent, "{hint}");
        }
    }

    #[test]
    fn result_is_maximal() {
        let hints = HintSpace::new(5);
        let pool_words = words_from_slice(&WORDLIST[..200], 5);
        let pool: Vec<&Word> = pool_words.iter().collect();

        for guess in pool_words.iter().take(5) {
            for rule in [ScoringRule::Simplified, ScoringRule::Canonical] {
                let verdict = select_worst_hint(guess, &pool, &hints, rule);
                for hint in &hints {
                    assert!(count_candidates(guess, hint, &pool, rule) <= verdict.survivors.len());
                }
            }
        }
    }

    #[test]
    fn selection_is_idempotent() {
        let hints = HintSpace::new(5);
        let pool_words = words_from_slice(&WORDLIST[..200], 5);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let guess = &pool_words[17];

        let first = select_worst_hint(guess, &pool, &hints, ScoringRule::Simplified);
        let second = select_worst_hint(guess, &pool, &hints, ScoringRule::Simplified);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential() {
        let hints = HintSpace::new(5);
        let pool_words = words_from_slice(WORDLIST, 5);
        let pool: Vec<&Word> = pool_words.iter().collect();

        for guess in pool_words.iter().step_by(37).take(10) {
            for rule in [ScoringRule::Simplified, ScoringRule::Canonical] {
                assert_eq!(
                    select_worst_hint_parallel(guess, &pool, &hints, rule),
                    select_worst_hint(guess, &pool, &hints, rule),
                    "{guess} {rule}"
                );
            }
        }
    }

    #[test]
    fn whole_pool_on_one_hint_stops_early() {
        let hints = HintSpace::new(5);
        let pool_words = words(&["zzzzz", "yyyyy", "xxxxx"]);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let guess = Word::new("abcde", 5).unwrap();

        let verdict = select_worst_hint(&guess, &pool, &hints, ScoringRule::Simplified);
        assert_eq!(verdict.survivors.len(), 3);
        assert_eq!(verdict.hint.to_string(), "-----");
    }

    #[test]
    fn prefer_larger_is_order_independent() {
        assert_eq!(prefer_larger((3, 5), (1, 5)), (1, 5));
        assert_eq!(prefer_larger((1, 5), (3, 5)), (1, 5));
        assert_eq!(prefer_larger((1, 2), (3, 5)), (3, 5));
        assert_eq!(prefer_larger((0, 0), (4, 0)), (0, 0));
    }

    #[test]
    fn adversary_modes_agree() {
        let hints = HintSpace::new(5);
        let pool_words = words_from_slice(&WORDLIST[..300], 5);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let guess = &pool_words[0];

        let sequential = Adversary::new(&hints, ScoringRule::Simplified, false);
        let parallel = Adversary::new(&hints, ScoringRule::Simplified, true);
        assert!(!sequential.is_parallel());
        assert!(parallel.is_parallel());
        assert_eq!(sequential.respond(guess, &pool), parallel.respond(guess, &pool));
    }

    #[test]
    fn adversary_from_config() {
        let hints = HintSpace::new(5);
        let config = GameConfig {
            scoring: ScoringRule::Canonical,
            parallel: false,
            ..GameConfig::default()
        };
        let adversary = Adversary::from_config(&hints, &config);
        assert_eq!(adversary.rule(), ScoringRule::Canonical);
        assert!(!adversary.is_parallel());
        assert_eq!(adversary.hints().len(), 243);
    }
}
