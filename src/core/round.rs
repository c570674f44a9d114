//! Round state machine
//!
//! A `Round` owns the answer, the guessed letters and the remaining lives.
//! It is single-threaded; the engine serializes access to it.

use super::guess::{GuessError, GuessOutcome, normalize_guess};
use super::level::GameState;
use rustc_hash::FxHashSet;

/// Lives at the start of every round
pub const STARTING_LIVES: u8 = 6;

/// Placeholder shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// One play-through from answer selection to a terminal state
#[derive(Debug, Clone)]
pub struct Round {
    answer: String,
    guessed: FxHashSet<char>,
    wrong: FxHashSet<char>,
    lives: u8,
    state: GameState,
    timeouts: u32,
}

impl Round {
    /// Start a round for the given answer
    ///
    /// The answer is uppercased; it is never changed afterwards. An answer
    /// without letters has nothing left to guess and starts out won.
    #[must_use]
    pub fn new(answer: &str) -> Self {
        let mut round = Self {
            answer: answer.to_uppercase(),
            guessed: FxHashSet::default(),
            wrong: FxHashSet::default(),
            lives: STARTING_LIVES,
            state: GameState::Playing,
            timeouts: 0,
        };
        if round.is_solved() {
            round.state = GameState::Won;
        }
        round
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    /// Number of countdown expiries that cost a life this round
    #[inline]
    #[must_use]
    pub const fn timeouts(&self) -> u32 {
        self.timeouts
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// All accepted letters, sorted
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        sorted(&self.guessed)
    }

    /// Accepted letters missing from the answer, sorted
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        sorted(&self.wrong)
    }

    /// Accepted letters present in the answer, sorted
    #[must_use]
    pub fn correct_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.difference(&self.wrong).copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Answer with unguessed letters replaced by `_`
    ///
    /// Spaces and punctuation are always shown.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Round;
    ///
    /// let mut round = Round::new("UNIT TESTING");
    /// round.submit_guess("t");
    /// assert_eq!(round.render_progress(), "___T T__T___");
    /// ```
    #[must_use]
    pub fn render_progress(&self) -> String {
        self.answer
            .chars()
            .map(|c| {
                if !c.is_alphabetic() || self.guessed.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Process one raw guess
    ///
    /// Invalid input and guesses after the round ended are reported as
    /// `GuessOutcome::Rejected` and leave the round untouched.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        match self.accept(raw) {
            Ok(letter) => self.apply(letter),
            Err(err) => err.into(),
        }
    }

    fn accept(&self, raw: &str) -> Result<char, GuessError> {
        if !self.is_playing() {
            return Err(GuessError::NotActive);
        }

        let letter = normalize_guess(raw)?;
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        Ok(letter)
    }

    fn apply(&mut self, letter: char) -> GuessOutcome {
        self.guessed.insert(letter);

        if self.answer.contains(letter) {
            if self.is_solved() {
                self.state = GameState::Won;
                return GuessOutcome::Solved(letter);
            }
            return GuessOutcome::Correct(letter);
        }

        self.wrong.insert(letter);
        self.lose_life();

        if self.state == GameState::Lost {
            GuessOutcome::GameOver(letter)
        } else {
            GuessOutcome::Wrong {
                letter,
                lives_left: self.lives,
            }
        }
    }

    /// Deduct a life for an expired countdown
    ///
    /// Returns `false` (and does nothing) if the round already ended.
    pub fn on_timeout(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.timeouts += 1;
        self.lose_life();
        true
    }

    /// Abandon the round; idempotent
    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }

    /// Recomputed from the full letter set on every call
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.answer
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.guessed.contains(&c))
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.state = GameState::Lost;
        }
    }
}

fn sorted(set: &FxHashSet<char>) -> Vec<char> {
    let mut letters: Vec<char> = set.iter().copied().collect();
    letters.sort_unstable();
    letters
}
