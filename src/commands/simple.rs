//! Simple console mode
//!
//! Line-based game loop without TUI

use crate::core::{GameState, Level};
use crate::game::GuessEngine;
use crate::output::{
    print_guess_result, print_round_end, print_status, print_timeout_notice, print_welcome,
};
use crate::wordlists::WordSource;
use std::io::{self, Write};

/// Input that abandons the current round
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Run the simple console mode
///
/// Each guess prompt arms the engine's countdown; a countdown that expires
/// while the player is typing costs a life and is announced once the line is
/// entered. End of input quits the round.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing prompts.
pub fn run_simple<W: WordSource>(engine: &mut GuessEngine<W>) -> Result<(), String> {
    print_welcome(engine.config().guess_timeout);

    loop {
        let Some(level) = prompt_level(engine.level())? else {
            break;
        };
        engine.start_round(level);
        println!("\n🚀 Starting {level} level game...");

        while engine.state() == GameState::Playing {
            let timeouts_before = engine.timeouts();
            engine.start_guess_timer();
            print_status(
                &engine.snapshot(),
                engine.time_remaining(),
                engine.timer_progress(),
            );

            let input = get_user_input("🎯 Enter your guess (or 'quit' to exit)")?;

            if engine.timeouts() > timeouts_before {
                print_timeout_notice(engine.lives());
                if engine.state() != GameState::Playing {
                    break;
                }
            }

            match input {
                Some(guess) if !is_quit(&guess) => {
                    let outcome = engine.submit_guess(&guess);
                    print_guess_result(&outcome);
                }
                _ => {
                    engine.quit();
                    break;
                }
            }
        }

        print_round_end(&engine.snapshot());

        if !ask_play_again()? {
            break;
        }
    }

    println!("\n🎮 Thanks for playing Hangman! 👋\n");
    Ok(())
}

fn is_quit(input: &str) -> bool {
    QUIT_COMMANDS
        .iter()
        .any(|cmd| input.trim().eq_ignore_ascii_case(cmd))
}

/// Ask for a level; empty input keeps `current`, `None` means quit
fn prompt_level(current: Level) -> Result<Option<Level>, String> {
    loop {
        let prompt = format!("\nSelect difficulty (1=Basic, 2=Intermediate) [{current}]");
        let Some(choice) = get_user_input(&prompt)? else {
            return Ok(None);
        };

        if choice.is_empty() {
            return Ok(Some(current));
        }
        if is_quit(&choice) {
            return Ok(None);
        }
        if let Some(level) = Level::from_name(&choice) {
            println!("✅ {level} level selected!");
            return Ok(Some(level));
        }
        println!("❌ Please enter 1 or 2");
    }
}

fn ask_play_again() -> Result<bool, String> {
    loop {
        let Some(choice) = get_user_input("\n🔄 Play again? (y/n)")? else {
            return Ok(false);
        };

        match choice.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("❌ Please enter 'y' or 'n'"),
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
