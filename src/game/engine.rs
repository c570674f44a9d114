//! Guess engine: a round plus its per-guess countdown

use super::timer::{RoundTimer, TimeoutHandler};
use crate::core::{GameState, GuessError, GuessOutcome, Level, Round};
use crate::wordlists::WordSource;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Countdown for each guess unless configured otherwise
pub const DEFAULT_GUESS_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings the engine is started with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub level: Level,
    pub guess_timeout: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self {
            level,
            guess_timeout: DEFAULT_GUESS_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_guess_timeout(mut self, guess_timeout: Duration) -> Self {
        self.guess_timeout = guess_timeout;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

/// Owns the live round and coordinates it with the guess countdown
///
/// The round sits behind one lock shared with the timer's handler, so a
/// submitted guess and an expired countdown are applied one at a time.
/// The round lock is always taken before the timer lock.
pub struct GuessEngine<W: WordSource> {
    words: W,
    config: GameConfig,
    round: Arc<Mutex<Round>>,
    timer: RoundTimer,
}

impl<W: WordSource> GuessEngine<W> {
    /// Create an engine and start its first round
    pub fn new(words: W, config: GameConfig) -> Self {
        let answer = words.random_answer(config.level);
        let round = Arc::new(Mutex::new(Round::new(&answer)));
        let timer = RoundTimer::new(timeout_handler(&round));

        info!(level = %config.level, "round started");
        Self {
            words,
            config,
            round,
            timer,
        }
    }

    /// Replace the live round with a fresh one at `level`
    pub fn start_round(&mut self, level: Level) {
        let answer = self.words.random_answer(level);
        let mut round = self.round.lock();
        self.timer.disarm();
        *round = Round::new(&answer);
        self.config.level = level;

        info!(%level, "round started");
    }

    /// Start over, optionally switching level
    pub fn new_game(&mut self, level: Option<Level>) {
        self.start_round(level.unwrap_or(self.config.level));
    }

    /// Arm the guess countdown; ignored once the round has ended
    pub fn start_guess_timer(&self) {
        let round = self.round.lock();
        if round.is_playing() {
            self.timer.arm(self.config.guess_timeout);
        }
    }

    /// Submit one raw guess
    ///
    /// The countdown is disarmed before the guess is evaluated, so an expiry
    /// that has not been dispatched yet cannot also cost a life.
    pub fn submit_guess(&self, raw: &str) -> GuessOutcome {
        let mut round = self.round.lock();
        if !round.is_playing() {
            return GuessOutcome::Rejected(GuessError::NotActive);
        }

        self.timer.disarm();
        let outcome = round.submit_guess(raw);
        debug!(
            input = raw,
            %outcome,
            lives = round.lives(),
            state = ?round.state(),
            "guess submitted"
        );
        outcome
    }

    /// Apply an expired countdown: costs one life while the round is live
    ///
    /// Returns whether a life was deducted.
    pub fn on_guess_timeout(&self) -> bool {
        apply_timeout(&self.round)
    }

    /// Abandon the round; idempotent
    pub fn quit(&self) {
        let mut round = self.round.lock();
        self.timer.disarm();
        round.quit();
        info!(answer = round.answer(), "round quit");
    }

    /// Consistent copy of the live round for rendering
    #[must_use]
    pub fn snapshot(&self) -> Round {
        self.round.lock().clone()
    }

    #[must_use]
    pub fn render_progress(&self) -> String {
        self.round.lock().render_progress()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.round.lock().state()
    }

    #[must_use]
    pub fn lives(&self) -> u8 {
        self.round.lock().lives()
    }

    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.round.lock().guessed_letters()
    }

    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        self.round.lock().wrong_letters()
    }

    /// Only meaningful for the end-of-round reveal
    #[must_use]
    pub fn answer(&self) -> String {
        self.round.lock().answer().to_string()
    }

    #[must_use]
    pub fn timeouts(&self) -> u32 {
        self.round.lock().timeouts()
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.config.level
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    #[must_use]
    pub fn time_remaining(&self) -> u64 {
        self.timer.time_remaining()
    }

    #[must_use]
    pub fn timer_progress(&self) -> f64 {
        self.timer.progress_percent()
    }

    #[must_use]
    pub fn is_timer_active(&self) -> bool {
        self.timer.is_active()
    }
}

fn timeout_handler(round: &Arc<Mutex<Round>>) -> TimeoutHandler {
    let round = Arc::clone(round);
    Arc::new(move || {
        apply_timeout(&round);
    })
}

fn apply_timeout(round: &Mutex<Round>) -> bool {
    let mut round = round.lock();
    let applied = round.on_timeout();
    if applied {
        info!(lives = round.lives(), state = ?round.state(), "guess timed out");
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::STARTING_LIVES;
    use std::thread;

    /// Word source that always answers with the same text
    struct FixedWords(&'static str);

    impl WordSource for FixedWords {
        fn random_word(&self) -> String {
            self.0.to_string()
        }

        fn random_phrase(&self) -> String {
            format!("{} {}", self.0, self.0)
        }

        fn is_valid(&self, text: &str) -> bool {
            text.trim().eq_ignore_ascii_case(self.0)
        }

        fn word_count(&self) -> usize {
            1
        }

        fn phrase_count(&self) -> usize {
            1
        }
    }

    fn engine(answer: &'static str) -> GuessEngine<FixedWords> {
        GuessEngine::new(FixedWords(answer), GameConfig::default())
    }

    fn engine_with_timeout(answer: &'static str, timeout: Duration) -> GuessEngine<FixedWords> {
        GuessEngine::new(
            FixedWords(answer),
            GameConfig::default().with_guess_timeout(timeout),
        )
    }

    #[test]
    fn game_starts_properly() {
        let engine = engine("PYTHON");
        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.lives(), STARTING_LIVES);
        assert!(engine.guessed_letters().is_empty());
        assert_eq!(engine.render_progress(), "______");
        assert!(!engine.is_timer_active());
    }

    #[test]
    fn intermediate_level_uses_phrase() {
        let engine = GuessEngine::new(FixedWords("TEST"), GameConfig::new(Level::Intermediate));
        assert_eq!(engine.answer(), "TEST TEST");
        assert_eq!(engine.render_progress(), "____ ____");
        assert_eq!(engine.level(), Level::Intermediate);
    }

    #[test]
    fn complete_winning_game() {
        let engine = engine("TEST");
        let (ok, _) = engine.submit_guess("T").into_pair();
        assert!(ok);
        assert_eq!(engine.render_progress(), "T__T");

        let (ok, msg) = engine.submit_guess("X").into_pair();
        assert!(!ok);
        assert!(msg.contains("5 lives left"));
        assert_eq!(engine.lives(), 5);
        assert_eq!(engine.state(), GameState::Playing);

        engine.submit_guess("E");
        engine.submit_guess("S");
        assert_eq!(engine.render_progress(), "TEST");
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.wrong_letters(), vec!['X']);
    }

    #[test]
    fn complete_losing_game() {
        let engine = engine("TEST");
        for letter in ["A", "B", "C", "D", "F", "G"] {
            engine.submit_guess(letter);
        }
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.lives(), 0);

        let (ok, msg) = engine.submit_guess("T").into_pair();
        assert!(!ok);
        assert_eq!(msg, "Game is not active");
    }

    #[test]
    fn start_round_resets_everything() {
        let mut engine = engine("TEST");
        engine.submit_guess("T");
        engine.submit_guess("Z");
        engine.start_guess_timer();

        engine.start_round(Level::Basic);
        assert!(engine.guessed_letters().is_empty());
        assert!(engine.wrong_letters().is_empty());
        assert_eq!(engine.lives(), STARTING_LIVES);
        assert_eq!(engine.state(), GameState::Playing);
        assert!(!engine.is_timer_active());
    }

    #[test]
    fn new_game_keeps_or_switches_level() {
        let mut engine = engine("TEST");
        engine.quit();
        engine.new_game(None);
        assert_eq!(engine.level(), Level::Basic);
        assert_eq!(engine.state(), GameState::Playing);

        engine.new_game(Some(Level::Intermediate));
        assert_eq!(engine.level(), Level::Intermediate);
        assert_eq!(engine.answer(), "TEST TEST");
    }

    #[test]
    fn expired_countdown_costs_exactly_one_life() {
        let engine = engine_with_timeout("TEST", Duration::from_millis(50));
        engine.start_guess_timer();
        assert!(engine.is_timer_active());

        thread::sleep(Duration::from_millis(300));
        assert_eq!(engine.lives(), STARTING_LIVES - 1);
        assert_eq!(engine.timeouts(), 1);
        assert!(engine.guessed_letters().is_empty());
        assert!(!engine.is_timer_active());
    }

    #[test]
    fn guess_before_expiry_prevents_deduction() {
        let engine = engine_with_timeout("TEST", Duration::from_millis(150));
        engine.start_guess_timer();
        assert!(engine.submit_guess("T").is_correct());
        assert!(!engine.is_timer_active());

        thread::sleep(Duration::from_millis(400));
        assert_eq!(engine.lives(), STARTING_LIVES);
        assert_eq!(engine.timeouts(), 0);
    }

    #[test]
    fn rejected_guess_still_disarms() {
        let engine = engine_with_timeout("TEST", Duration::from_millis(150));
        engine.start_guess_timer();
        assert!(engine.submit_guess("12").is_rejected());
        assert!(!engine.is_timer_active());

        thread::sleep(Duration::from_millis(400));
        assert_eq!(engine.lives(), STARTING_LIVES);
    }

    #[test]
    fn quit_disarms_and_is_idempotent() {
        let engine = engine_with_timeout("TEST", Duration::from_millis(50));
        engine.start_guess_timer();
        engine.quit();
        assert_eq!(engine.state(), GameState::Quit);
        engine.quit();
        assert_eq!(engine.state(), GameState::Quit);

        thread::sleep(Duration::from_millis(250));
        assert_eq!(engine.lives(), STARTING_LIVES);
        assert!(!engine.is_timer_active());
    }

    #[test]
    fn timer_not_armed_after_round_ends() {
        let engine = engine("A");
        engine.submit_guess("A");
        engine.start_guess_timer();
        assert!(!engine.is_timer_active());
        assert_eq!(engine.time_remaining(), 0);
    }

    #[test]
    fn manual_timeout_ignored_after_round_ends() {
        let engine = engine("TEST");
        assert!(engine.on_guess_timeout());
        assert_eq!(engine.lives(), 5);

        engine.quit();
        assert!(!engine.on_guess_timeout());
        assert_eq!(engine.lives(), 5);
    }

    #[test]
    fn repeated_timeouts_lose_the_round() {
        let engine = engine_with_timeout("TEST", Duration::from_millis(20));
        for _ in 0..STARTING_LIVES {
            engine.start_guess_timer();
            thread::sleep(Duration::from_millis(150));
        }
        assert_eq!(engine.lives(), 0);
        assert_eq!(engine.state(), GameState::Lost);

        // No further countdowns once lost
        engine.start_guess_timer();
        assert!(!engine.is_timer_active());
    }

    #[test]
    fn timer_reports_progress_while_armed() {
        let engine = engine("TEST");
        assert!((engine.timer_progress() - 100.0).abs() < f64::EPSILON);

        engine.start_guess_timer();
        assert!(engine.time_remaining() >= 14);
        assert!(engine.timer_progress() < 100.0);
        engine.quit();
    }

    /// Run `timeouts` expiries on other threads while `guesses` are submitted
    fn race_timeouts_with_guesses(timeouts: usize, guesses: &[&str]) -> GuessEngine<FixedWords> {
        let engine = engine("TEST");
        thread::scope(|s| {
            for _ in 0..timeouts {
                s.spawn(|| engine.on_guess_timeout());
            }
            for guess in guesses {
                engine.submit_guess(guess);
            }
        });
        engine
    }

    fn assert_lives_accounted(engine: &GuessEngine<FixedWords>) {
        let round = engine.snapshot();
        let spent = round.timeouts() as usize + round.wrong_letters().len();
        assert_eq!(usize::from(round.lives()), usize::from(STARTING_LIVES) - spent);
        assert_eq!(round.state() == GameState::Lost, round.lives() == 0);
    }

    #[test]
    fn concurrent_timeouts_and_guesses_lose_no_update() {
        for _ in 0..200 {
            let engine = race_timeouts_with_guesses(3, &["Z"]);
            assert_lives_accounted(&engine);
            assert_eq!(engine.lives(), 2);
            assert_eq!(engine.timeouts(), 3);
            assert_eq!(engine.state(), GameState::Playing);
        }
    }

    #[test]
    fn concurrent_timeouts_and_guesses_stop_at_zero() {
        for _ in 0..200 {
            let engine = race_timeouts_with_guesses(4, &["Z", "Y", "X"]);
            assert_lives_accounted(&engine);
            assert_eq!(engine.lives(), 0);
            assert_eq!(engine.state(), GameState::Lost);
        }
    }

    #[test]
    fn snapshot_reflects_round() {
        let engine = engine("TEST");
        engine.submit_guess("T");
        engine.submit_guess("Q");

        let round = engine.snapshot();
        assert_eq!(round.correct_letters(), vec!['T']);
        assert_eq!(round.wrong_letters(), vec!['Q']);
        assert_eq!(round.lives(), 5);
    }
}
