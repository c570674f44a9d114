//! Word lists for hangman answers
//!
//! Provides the `WordSource` seam the engine draws answers from, and the
//! `Dictionary` implementation backed by embedded or file-loaded lists.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, FALLBACK_PHRASE, FALLBACK_WORD};
pub use embedded::{PHRASES, PHRASES_COUNT, WORDS, WORDS_COUNT};

use crate::core::Level;

/// Source of answers for new rounds
///
/// Implementations must never return an empty answer.
pub trait WordSource {
    /// Uppercase single word
    fn random_word(&self) -> String;

    /// Uppercase phrase of at least two words
    fn random_phrase(&self) -> String;

    /// Case-insensitive membership check over words and phrases
    fn is_valid(&self, text: &str) -> bool;

    fn word_count(&self) -> usize;

    fn phrase_count(&self) -> usize;

    /// Answer appropriate for `level`
    fn random_answer(&self, level: Level) -> String {
        match level {
            Level::Basic => self.random_word(),
            Level::Intermediate => self.random_phrase(),
        }
    }
}
