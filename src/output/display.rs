//! Display functions for console mode

use super::formatters::{create_progress_bar, letter_list, lives_bar, spaced_progress};
use crate::commands::CheckResult;
use crate::core::{GameState, GuessOutcome, Round, STARTING_LIVES};
use colored::Colorize;
use std::time::Duration;

/// Print the welcome banner and rules
pub fn print_welcome(guess_timeout: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", "              🎯  H A N G M A N  🎯".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📋 {}", "Rules:".bright_cyan().bold());
    println!("   • Guess letters to find the hidden word or phrase");
    println!(
        "   • You have {} seconds for each guess",
        guess_timeout.as_secs()
    );
    println!("   • Wrong guesses and timeouts cost a life (you start with {STARTING_LIVES})");
    println!("   • Find the answer before your lives run out!");

    println!("\n🎮 {}", "Levels:".bright_cyan().bold());
    println!("   1. Basic        - single programming terms");
    println!("   2. Intermediate - technical phrases");
    println!("\nType 'quit' at any prompt to give up the round.");
}

/// Print the current round between guesses
pub fn print_status(round: &Round, time_left: u64, timer_progress: f64) {
    println!("\n{}", "─".repeat(50).bright_black());
    println!(
        "💖 Lives:  {} {}",
        lives_bar(round.lives()).red(),
        round.lives()
    );
    println!(
        "🎯 Word:   {}",
        spaced_progress(&round.render_progress())
            .bright_yellow()
            .bold()
    );

    if round.guessed_letters().is_empty() {
        println!("📝 No guesses yet");
    } else {
        println!("✅ Correct: {}", letter_list(&round.correct_letters()).green());
        println!("❌ Wrong:   {}", letter_list(&round.wrong_letters()).red());
    }

    if time_left > 0 {
        let elapsed = create_progress_bar(timer_progress, 100.0, 20);
        println!("⏰ Time:   [{}] {time_left}s left", elapsed.bright_black());
    }
    println!("{}", "─".repeat(50).bright_black());
}

/// Print the result of a guess
pub fn print_guess_result(outcome: &GuessOutcome) {
    if outcome.is_correct() {
        println!("{}", format!("✅ {outcome}").green());
    } else if outcome.is_rejected() {
        println!("{}", format!("⚠️  {outcome}").yellow());
    } else {
        println!("{}", format!("❌ {outcome}").red());
    }
}

/// Announce a countdown that expired while waiting for input
pub fn print_timeout_notice(lives: u8) {
    println!(
        "{}",
        format!("⏰ Time's up! That cost a life. {lives} left.")
            .bright_red()
            .bold()
    );
}

/// Print the end-of-round reveal
pub fn print_round_end(round: &Round) {
    println!("\n{}", "═".repeat(60).cyan());
    match round.state() {
        GameState::Won => {
            println!("{}", "🎉 CONGRATULATIONS! YOU WON! 🎉".bright_green().bold());
            println!(
                "✅ The answer was: {}",
                round.answer().bright_yellow().bold()
            );
            println!(
                "   Solved with {} {} to spare",
                round.lives(),
                if round.lives() == 1 { "life" } else { "lives" }
            );
        }
        GameState::Lost => {
            println!("{}", "💀 GAME OVER 💀".bright_red().bold());
            println!("💡 The answer was: {}", round.answer().bright_yellow().bold());
        }
        GameState::Quit => {
            println!("{}", "👋 Round abandoned".bright_white().bold());
            println!("💡 The answer was: {}", round.answer().bright_yellow().bold());
        }
        GameState::Playing => {}
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of a dictionary lookup
pub fn print_check_result(result: &CheckResult) {
    let text = result.text.bright_white();
    if result.valid {
        println!("{} '{text}' is in the dictionary", "✅".green());
    } else {
        println!("{} '{text}' is not in the dictionary", "❌".red());
    }
    println!(
        "   {} words, {} phrases",
        result.word_count.to_string().bright_cyan(),
        result.phrase_count.to_string().bright_cyan()
    );
}
