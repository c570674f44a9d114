//! Dictionary lookup command

use crate::wordlists::WordSource;

/// Result of checking a word or phrase against the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub text: String,
    pub valid: bool,
    pub word_count: usize,
    pub phrase_count: usize,
}

/// Look up `text` in the given word source
#[must_use]
pub fn check_entry<W: WordSource>(words: &W, text: &str) -> CheckResult {
    CheckResult {
        text: text.trim().to_string(),
        valid: words.is_valid(text),
        word_count: words.word_count(),
        phrase_count: words.phrase_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    #[test]
    fn check_known_word() {
        let dictionary = Dictionary::embedded();
        let result = check_entry(&dictionary, " Compiler ");

        assert!(result.valid);
        assert_eq!(result.text, "Compiler");
        assert_eq!(result.word_count, dictionary.word_count());
        assert_eq!(result.phrase_count, dictionary.phrase_count());
    }

    #[test]
    fn check_unknown_phrase() {
        let dictionary = Dictionary::embedded();
        assert!(!check_entry(&dictionary, "quantum basket weaving").valid);
    }
}
