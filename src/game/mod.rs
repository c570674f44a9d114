//! Running game: the guess engine and its countdown
//!
//! Adds threads and clocks around the pure `core::Round` state machine.

mod engine;
pub mod timer;

pub use engine::{DEFAULT_GUESS_TIMEOUT, GameConfig, GuessEngine};
pub use timer::{RoundTimer, TimeoutHandler};
