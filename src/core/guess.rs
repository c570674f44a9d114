//! Guess validation and outcomes

use std::fmt;

/// Reason a guess was rejected without changing the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The round already reached a terminal state
    NotActive,
    Empty,
    /// More than one character after normalization (holds the character count)
    NotSingleLetter(usize),
    NotAlphabetic(char),
    AlreadyGuessed(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotActive => write!(f, "Game is not active"),
            Self::Empty => write!(f, "Please enter a letter"),
            Self::NotSingleLetter(_) => write!(f, "Please enter just one letter"),
            Self::NotAlphabetic(_) => {
                write!(f, "Please enter a letter, not a number or symbol")
            }
            Self::AlreadyGuessed(letter) => {
                write!(f, "You already guessed '{letter}'")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the answer, round continues
    Correct(char),
    /// Letter completed the answer
    Solved(char),
    /// Letter is not in the answer, round continues
    Wrong { letter: char, lives_left: u8 },
    /// Letter cost the last life
    GameOver(char),
    /// Guess was not accepted; nothing changed
    Rejected(GuessError),
}

impl GuessOutcome {
    /// Whether the guessed letter was in the answer
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct(_) | Self::Solved(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Split into the `(correct, message)` pair shown to the player
    #[must_use]
    pub fn into_pair(self) -> (bool, String) {
        (self.is_correct(), self.to_string())
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct(letter) => write!(f, "Good guess! '{letter}' is in the word."),
            Self::Solved(letter) => {
                write!(f, "Correct! '{letter}' is in the word. You won!")
            }
            Self::Wrong { letter, lives_left } => write!(
                f,
                "Sorry, '{letter}' is not in the word. {lives_left} {} left.",
                if *lives_left == 1 { "life" } else { "lives" }
            ),
            Self::GameOver(letter) => {
                write!(f, "Sorry, '{letter}' is not in the word. Game over!")
            }
            Self::Rejected(err) => write!(f, "{err}"),
        }
    }
}

impl From<GuessError> for GuessOutcome {
    fn from(err: GuessError) -> Self {
        Self::Rejected(err)
    }
}

/// Normalize raw input into a single uppercase letter
///
/// Trims surrounding whitespace and uppercases before checking, in order:
/// empty, more than one character, not alphabetic.
///
/// # Errors
/// Returns the first rule the input violates.
///
/// # Examples
/// ```
/// use hangman::core::{GuessError, normalize_guess};
///
/// assert_eq!(normalize_guess(" t "), Ok('T'));
/// assert_eq!(normalize_guess("ab"), Err(GuessError::NotSingleLetter(2)));
/// ```
pub fn normalize_guess(raw: &str) -> Result<char, GuessError> {
    let upper = raw.trim().to_uppercase();
    let Some(letter) = upper.chars().next() else {
        return Err(GuessError::Empty);
    };

    // Uppercasing can expand a character (e.g. 'ß' -> "SS")
    let count = upper.chars().count();
    if count != 1 {
        return Err(GuessError::NotSingleLetter(count));
    }

    if !letter.is_alphabetic() {
        return Err(GuessError::NotAlphabetic(letter));
    }

    Ok(letter)
}
