//! Game session
//!
//! Turn-by-turn state of one game against the adversary.

mod session;

pub use session::{Game, GameStatus, GuessError, Turn};
