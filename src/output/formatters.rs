//! Formatting utilities for terminal output

use crate::core::STARTING_LIVES;

/// Space out progress characters for readability ("T__T" -> "T _ _ T")
///
/// Word gaps become three spaces so phrases stay readable.
#[must_use]
pub fn spaced_progress(progress: &str) -> String {
    progress
        .split(' ')
        .map(|word| {
            word.chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Hearts for remaining lives, hollow hearts for lost ones
#[must_use]
pub fn lives_bar(lives: u8) -> String {
    let lives = lives.min(STARTING_LIVES);
    format!(
        "{}{}",
        "♥".repeat(usize::from(lives)),
        "♡".repeat(usize::from(STARTING_LIVES - lives))
    )
}

/// Comma-separated letters, or a dash when there are none
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
