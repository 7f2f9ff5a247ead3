//! Adversarial hint engine
//!
//! Consistency checks, candidate filtering and worst-hint selection. Every
//! function here is pure over borrowed inputs.

pub mod adversary;
pub mod filter;
pub mod matcher;

pub use adversary::{Adversary, Verdict, select_worst_hint, select_worst_hint_parallel};
pub use filter::{count_candidates, filter_candidates};
pub use matcher::{ScoringRule, is_consistent, is_consistent_canonical, score};
