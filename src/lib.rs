//! Hangman
//!
//! A timed word-guessing game: reveal the hidden word or phrase one letter at a
//! time before your six lives run out. Every guess races a countdown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman::game::{GameConfig, GuessEngine};
//! use hangman::wordlists::Dictionary;
//!
//! let engine = GuessEngine::new(Dictionary::embedded(), GameConfig::default());
//! engine.start_guess_timer();
//!
//! let (correct, message) = engine.submit_guess("e").into_pair();
//! println!("{correct}: {message} -> {}", engine.render_progress());
//! ```

// Core domain types
pub mod core;

// Guess engine and countdown
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
