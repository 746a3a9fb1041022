use std::io::{self, BufRead, BufReader, Write};

use colored::Colorize;

use crate::core::{common::Direction, hint::HintTier};
use crate::ui;

use super::{GameEvent, InputError, Player, Prompt};

/// Interactive player reading from a line-oriented input and rendering every
/// event to stdout.
pub struct CliPlayer {
    input: Box<dyn BufRead + Send>,
}

impl CliPlayer {
    /// Player bound to the process stdin.
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// Player reading its lines from `reader`.
    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            input: Box::new(reader),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn join_guesses(guesses: &[i64]) -> String {
    guesses
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn hint_text(tier: HintTier) -> &'static str {
    match tier {
        HintTier::Hot => "🔥 Hot! Very close!",
        HintTier::Warm => "🌡️ Warm! Getting close",
        HintTier::Cool => "💧 Cool",
        HintTier::Cold => "❄️ Cold! Far away",
    }
}

impl Player for CliPlayer {
    fn read_token(&mut self, prompt: Prompt) -> Result<String, InputError> {
        match prompt {
            Prompt::Guess => print!("Enter your guess: "),
            Prompt::Replay => {
                println!("\n{}", "=".repeat(40));
                print!("Play again? (yes/no): ");
            }
        }
        io::stdout().flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(InputError::Io(e)),
        }
    }

    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Welcome(config) => ui::print_welcome(config),
            GameEvent::Stats { record, .. } => ui::print_stats(record),
            GameEvent::RoundStarted(_) => {
                println!("\n🔮 New game! Try to guess the number...");
            }
            GameEvent::AttemptStarted {
                attempt,
                max_attempts,
            } => {
                println!("\n{}", "=".repeat(40));
                println!("Attempt {} of {}", attempt, max_attempts);
            }
            GameEvent::InvalidGuess(e) => {
                println!("{}", format!("❌ Error: {}", e).red());
            }
            GameEvent::Correct {
                secret,
                attempts,
                history,
            } => {
                println!(
                    "{}",
                    format!("\n🎉 Congratulations! You guessed the number {}!", secret).green()
                );
                println!("{}", format!("Attempts used: {}", attempts).yellow());
                println!("\nYour guesses: {}", join_guesses(history));
            }
            GameEvent::Direction(Direction::TooLow) => {
                println!("{}", "Higher! Try a larger number.".blue());
            }
            GameEvent::Direction(Direction::TooHigh) => {
                println!("{}", "Lower! Try a smaller number.".blue());
            }
            GameEvent::Hint(tier) => println!("Hint: {}", hint_text(*tier)),
            GameEvent::AttemptsRemaining(n) => println!("Attempts left: {}", n),
            GameEvent::PreviousGuesses(guesses) => {
                println!("Your previous guesses: {}", join_guesses(guesses));
            }
            GameEvent::RoundLost { secret } => {
                println!(
                    "{}",
                    format!("\n😢 Sorry, you did not guess the number {}.", secret).red()
                );
                println!("Out of attempts!");
            }
            GameEvent::RoundAborted => println!("Game aborted by the user."),
            GameEvent::InvalidReplayAnswer => {
                println!("{}", "Please answer 'yes' or 'no'".red());
            }
            GameEvent::SaveFailed(message) => {
                println!(
                    "{}",
                    format!("Could not save statistics: {}", message).red()
                );
            }
            GameEvent::Farewell => {
                println!("{}", "\nThanks for playing! Goodbye!".green());
            }
            GameEvent::FinalStats { record, .. } => ui::print_final_stats(record),
        }
    }
}
