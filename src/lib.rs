//! Absurdle
//!
//! An adversarial word-guessing game. There is no secret word: after every
//! guess the adversary picks the hint that keeps the most dictionary words
//! alive, and the player wins only by leaving it a single candidate that
//! they then name exactly.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::core::{HintSpace, Word};
//! use absurdle::solver::{ScoringRule, select_worst_hint};
//!
//! let pool = vec![
//!     Word::new("apple", 5).unwrap(),
//!     Word::new("angle", 5).unwrap(),
//!     Word::new("ample", 5).unwrap(),
//! ];
//! let refs: Vec<&Word> = pool.iter().collect();
//! let hints = HintSpace::new(5);
//!
//! let guess = Word::new("apple", 5).unwrap();
//! let verdict = select_worst_hint(&guess, &refs, &hints, ScoringRule::Simplified);
//! println!("{} leaves {} word(s)", verdict.hint, verdict.survivors.len());
//! ```

// Game settings
pub mod config;

// Core domain types
pub mod core;

// Hint matching and the adversary
pub mod solver;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
