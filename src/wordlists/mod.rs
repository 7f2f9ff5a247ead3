//! Word lists
//!
//! Provides the embedded default dictionary and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{WORDLIST, WORDLIST_COUNT};
