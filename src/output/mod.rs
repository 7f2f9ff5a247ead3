//! Terminal output formatting
//!
//! Display utilities for CLI results and coloured hint rendering.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_replay_result};
