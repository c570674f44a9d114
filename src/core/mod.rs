//! Core domain types for hangman
//!
//! The round state machine and its value types. Nothing here touches threads,
//! clocks or I/O; the engine in `game` adds those around a `Round`.

mod guess;
mod level;
mod round;

pub use guess::{GuessError, GuessOutcome, normalize_guess};
pub use level::{GameState, Level};
pub use round::{PLACEHOLDER, Round, STARTING_LIVES};
