//! TUI application state and logic

use crate::core::{GameState, GuessOutcome, Level};
use crate::game::GuessEngine;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the countdown is redrawn while waiting for keys
const TICK_RATE: Duration = Duration::from_millis(100);

/// Longest input kept in the buffer
const MAX_INPUT_LEN: usize = 8;

/// Application state
pub struct App<W: WordSource> {
    pub engine: GuessEngine<W>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    seen_timeouts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
    pub games_quit: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(engine: GuessEngine<W>) -> Self {
        let seen_timeouts = engine.timeouts();
        let level = engine.level();
        let secs = engine.config().guess_timeout.as_secs();

        Self {
            engine,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! Guess the hidden {} letter by letter.", noun(level)),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("You have {secs}s per guess. Esc gives up the round."),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            seen_timeouts,
        }
    }

    /// Arm the countdown for the next guess prompt
    pub fn begin_prompt(&self) {
        self.engine.start_guess_timer();
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let outcome = self.engine.submit_guess(&input);

        let style = match outcome {
            GuessOutcome::Correct(_) | GuessOutcome::Solved(_) => MessageStyle::Success,
            GuessOutcome::Rejected(_) => MessageStyle::Warning,
            GuessOutcome::Wrong { .. } | GuessOutcome::GameOver(_) => MessageStyle::Error,
        };
        self.add_message(&outcome.to_string(), style);

        if self.engine.state().is_terminal() {
            self.finish_round();
        } else {
            self.begin_prompt();
        }
    }

    /// Pick up countdowns that expired since the last tick
    pub fn tick(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let timeouts = self.engine.timeouts();
        if timeouts > self.seen_timeouts {
            self.seen_timeouts = timeouts;
            let lives = self.engine.lives();
            self.add_message(
                &format!("⏰ Time's up! That cost a life. {lives} left."),
                MessageStyle::Error,
            );

            if self.engine.state().is_terminal() {
                self.finish_round();
            } else {
                self.begin_prompt();
            }
        }
    }

    /// Give up the current round
    pub fn quit_round(&mut self) {
        self.engine.quit();
        self.finish_round();
    }

    fn finish_round(&mut self) {
        self.input_mode = InputMode::RoundOver;
        self.input_buffer.clear();
        self.stats.total_games += 1;

        let answer = self.engine.answer();
        match self.engine.state() {
            GameState::Won => {
                self.stats.games_won += 1;
                let lives = self.engine.lives();
                self.add_message(
                    &format!("🎉 You won with {lives} lives to spare!"),
                    MessageStyle::Success,
                );
            }
            GameState::Lost => {
                self.stats.games_lost += 1;
                self.add_message(
                    &format!("💀 Game over! The answer was {answer}"),
                    MessageStyle::Error,
                );
            }
            GameState::Quit => {
                self.stats.games_quit += 1;
                self.add_message(
                    &format!("👋 Round abandoned. The answer was {answer}"),
                    MessageStyle::Info,
                );
            }
            GameState::Playing => {}
        }
        self.add_message(
            "Press 'n' for a new game, 'l' to switch level or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Start a new round, optionally at another level
    pub fn new_game(&mut self, level: Option<Level>) {
        self.engine.new_game(level);
        self.seen_timeouts = self.engine.timeouts();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;

        let level = self.engine.level();
        self.add_message(
            &format!("New {level} game started! Find the {}.", noun(level)),
            MessageStyle::Info,
        );
        self.begin_prompt();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.input_mode == InputMode::Guessing {
                self.engine.quit();
            }
            self.should_quit = true;
            return;
        }

        // A countdown may have ended the round since the last tick; the key
        // was meant for that round and is dropped
        if self.input_mode == InputMode::Guessing {
            self.tick();
            if self.input_mode != InputMode::Guessing {
                return;
            }
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.quit_round(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(None),
                KeyCode::Char('l') => self.new_game(Some(self.engine.level().toggled())),
                _ => {}
            },
        }
    }
}

const fn noun(level: Level) -> &'static str {
    match level {
        Level::Basic => "word",
        Level::Intermediate => "phrase",
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    app.begin_prompt();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the countdown keeps redrawing without key presses
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
