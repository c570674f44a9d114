//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a file, one per line
///
/// Blank lines, `#` comments and entries without any letter are skipped.
/// Entries are trimmed and lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_lines(content.lines()))
}

/// Convert embedded string slice to owned entries
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::entries_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = entries_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[&str]) -> Vec<String> {
    entries_from_lines(slice.iter().copied())
}

fn entries_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter(|line| line.chars().any(char::is_alphabetic))
        .map(normalize_entry)
        .collect()
}

/// Lowercase and collapse inner whitespace to single spaces
#[must_use]
pub fn normalize_entry(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
