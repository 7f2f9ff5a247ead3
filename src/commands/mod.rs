//! Command implementations

pub mod benchmark;
pub mod play;
pub mod replay;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{run_play, run_play_with};
pub use replay::{ReplayResult, replay};
