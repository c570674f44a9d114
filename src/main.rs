//! Hangman - CLI
//!
//! Timed hangman with TUI and simple console modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{check_entry, run_simple},
    core::Level,
    game::{GameConfig, GuessEngine},
    output::print_check_result,
    wordlists::{Dictionary, loader::load_from_file},
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Timed hangman: guess the word or phrase before your lives or the clock run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Level: basic (default, single words) or intermediate (phrases)
    #[arg(short, long, global = true, default_value = "basic")]
    level: String,

    /// Seconds allowed for each guess
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Custom word list for the basic level (one word per line)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Custom phrase list for the intermediate level (one phrase per line)
    #[arg(long, global = true)]
    phrases: Option<PathBuf>,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Check whether a word or phrase is in the dictionary
    Check {
        /// Word or phrase to look up
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let level = Level::from_name(&cli.level).ok_or_else(|| {
        anyhow!(
            "unknown level '{}' (expected 'basic' or 'intermediate')",
            cli.level
        )
    })?;
    let config = GameConfig::new(level).with_guess_timeout(Duration::from_secs(cli.timeout));
    let dictionary = load_dictionary(cli.words.as_deref(), cli.phrases.as_deref())?;
    debug!(?config, "configuration loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, config),
        Commands::Simple => run_simple_command(dictionary, config),
        Commands::Check { text } => {
            run_check_command(&dictionary, &text.join(" "));
            Ok(())
        }
    }
}

/// Install the global tracing subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to warnings from this crate.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hangman=warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(io::stderr).init();
    }

    Ok(())
}

/// Build the dictionary from custom files, falling back to the embedded lists
fn load_dictionary(words: Option<&Path>, phrases: Option<&Path>) -> Result<Dictionary> {
    let embedded = Dictionary::embedded();

    let words = match words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => embedded.words().to_vec(),
    };
    let phrases = match phrases {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read phrase list {}", path.display()))?,
        None => embedded.phrases().to_vec(),
    };

    Ok(Dictionary::new(words, phrases))
}

fn run_play_command(dictionary: Dictionary, config: GameConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(GuessEngine::new(dictionary, config));
    run_tui(app)
}

fn run_simple_command(dictionary: Dictionary, config: GameConfig) -> Result<()> {
    let mut engine = GuessEngine::new(dictionary, config);
    run_simple(&mut engine).map_err(|e| anyhow!(e))
}

fn run_check_command(dictionary: &Dictionary, text: &str) {
    let result = check_entry(dictionary, text);
    print_check_result(&result);
}
