//! TUI rendering with ratatui
//!
//! Layout for the hangman game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, Round};
use crate::output::formatters::{letter_list, lives_bar, spaced_progress};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Gallows drawing for each number of lives lost
const GALLOWS: [[&str; 5]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |"],
    ["  +---+", "  |   |", "  O   |", "      |", "      |"],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |"],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |"],
];

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    // One snapshot per frame keeps every panel consistent
    let round = app.engine.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and letters
            Constraint::Percentage(40), // Gallows and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, &round, main_chunks[0]);
    render_side_panel(f, app, &round, main_chunks[1]);

    render_countdown(f, app, &round, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN - Guess the word before time runs out")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Word
            Constraint::Percentage(45), // Letters
        ])
        .split(area);

    render_word(f, round, chunks[0]);
    render_letters(f, round, chunks[1]);
}

fn render_word(f: &mut Frame, round: &Round, area: Rect) {
    // Reveal the answer once the round is over
    let (text, color) = match round.state() {
        GameState::Playing => (round.render_progress(), Color::Yellow),
        GameState::Won => (round.answer().to_string(), Color::Green),
        GameState::Lost | GameState::Quit => (round.answer().to_string(), Color::Red),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_progress(&text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_letters(f: &mut Frame, round: &Round, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Lives:   "),
            Span::styled(lives_bar(round.lives()), Style::default().fg(Color::Red)),
            Span::raw(format!(" {}", round.lives())),
        ]),
        Line::from(vec![
            Span::raw("Correct: "),
            Span::styled(
                letter_list(&round.correct_letters()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Wrong:   "),
            Span::styled(
                letter_list(&round.wrong_letters()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(format!("Timeouts: {}", round.timeouts())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel<W: WordSource>(f: &mut Frame, app: &App<W>, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Gallows
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_gallows(f, round, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_gallows(f: &mut Frame, round: &Round, area: Rect) {
    let lost = usize::from(crate::core::STARTING_LIVES.saturating_sub(round.lives()));
    let drawing = GALLOWS[lost.min(GALLOWS.len() - 1)];

    let lines: Vec<Line> = drawing.iter().map(|row| Line::from(*row)).collect();
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_countdown<W: WordSource>(f: &mut Frame, app: &App<W>, round: &Round, area: Rect) {
    let remaining = app.engine.time_remaining();
    let left_pct = (100.0 - app.engine.timer_progress()).clamp(0.0, 100.0) as u16;

    let color = match left_pct {
        50.. => Color::Green,
        20..50 => Color::Yellow,
        _ => Color::Red,
    };
    let label = if round.is_playing() && app.engine.is_timer_active() {
        format!("{remaining}s left")
    } else {
        "--".to_string()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(left_pct)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_input<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | 'n' new game | 'l' switch level | 'q' quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a letter | Enter: submit | Esc: give up ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
        ])
        .split(area);

    let level = Paragraph::new(format!("Level: {}", app.engine.level())).alignment(Alignment::Center);
    f.render_widget(level, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Quit: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.games_quit
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words = app.engine.words();
    let words_text = format!("{} words | {} phrases", words.word_count(), words.phrase_count());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help = Paragraph::new("Ctrl-C: Exit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GuessEngine};
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_progress_and_reveal() {
        let dictionary = Dictionary::new(vec!["test".to_string()], Vec::new());
        let mut app = App::new(GuessEngine::new(dictionary, GameConfig::default()));
        app.engine.submit_guess("t");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let screen = buffer_text(&terminal);
        assert!(screen.contains("T _ _ T"));
        assert!(screen.contains("HANGMAN"));

        app.quit_round();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let screen = buffer_text(&terminal);
        assert!(screen.contains("T E S T"));
        assert!(screen.contains("Round over"));
        assert!(screen.contains("Games: 1 | Win Rate: 0% | Quit: 1"));
    }
}
