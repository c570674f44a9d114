//! Difficulty levels and round states

use std::fmt;

/// Difficulty level for a round
///
/// Basic rounds hide a single word, intermediate rounds hide a multi-word phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Basic,
    Intermediate,
}

impl Level {
    /// Create a level from its name
    ///
    /// Supported names: "basic" / "1", "intermediate" / "2" (case-insensitive).
    /// Returns `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "basic" | "b" | "1" => Some(Self::Basic),
            "intermediate" | "i" | "2" => Some(Self::Intermediate),
            _ => None,
        }
    }

    /// The other level
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Basic => Self::Intermediate,
            Self::Intermediate => Self::Basic,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a round
///
/// `Playing` is the only non-terminal state; no guesses are accepted in the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}
