//! Dictionary of answer words and phrases

use super::WordSource;
use super::embedded::{PHRASES, WORDS};
use super::loader::{entries_from_slice, normalize_entry};
use rand::prelude::IndexedRandom;

/// Answer used when the word list is empty
pub const FALLBACK_WORD: &str = "PYTHON";

/// Answer used when the phrase list is empty
pub const FALLBACK_PHRASE: &str = "UNIT TESTING";

/// Word and phrase lists for the two levels
///
/// Entries are stored lowercase; answers are handed out uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    phrases: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are normalized; entries without letters, words containing
    /// spaces and phrases without one are dropped.
    #[must_use]
    pub fn new(words: Vec<String>, phrases: Vec<String>) -> Self {
        let words = words
            .iter()
            .map(|w| normalize_entry(w))
            .filter(|w| has_letter(w) && !w.contains(' '))
            .collect();
        let phrases = phrases
            .iter()
            .map(|p| normalize_entry(p))
            .filter(|p| has_letter(p) && p.contains(' '))
            .collect();

        Self { words, phrases }
    }

    /// Dictionary over the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(entries_from_slice(WORDS), entries_from_slice(PHRASES))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

fn has_letter(entry: &str) -> bool {
    entry.chars().any(char::is_alphabetic)
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl WordSource for Dictionary {
    fn random_word(&self) -> String {
        self.words
            .choose(&mut rand::rng())
            .map_or_else(|| FALLBACK_WORD.to_string(), |w| w.to_uppercase())
    }

    fn random_phrase(&self) -> String {
        self.phrases
            .choose(&mut rand::rng())
            .map_or_else(|| FALLBACK_PHRASE.to_string(), |p| p.to_uppercase())
    }

    fn is_valid(&self, text: &str) -> bool {
        let needle = normalize_entry(text);
        if needle.is_empty() {
            return false;
        }

        self.words.contains(&needle) || self.phrases.contains(&needle)
    }

    fn word_count(&self) -> usize {
        self.words.len()
    }

    fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
