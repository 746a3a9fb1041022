
use crate::core::common::Direction;

use super::{GameEvent, InputError, Player, Prompt};

/// Automated player that always guesses the midpoint of the range still
/// consistent with the feedback received so far.
pub struct BisectPlayer {
    low: i64,
    high: i64,
    last_guess: Option<i64>,
    rounds_left: u32,
}

impl BisectPlayer {
    /// Player that plays `rounds` rounds and then declines to continue.
    pub fn new(rounds: u32) -> Self {
        Self {
            low: 0,
            high: 0,
            last_guess: None,
            rounds_left: rounds,
        }
    }

    fn next_guess(&mut self) -> i64 {
        let guess = ((i128::from(self.low) + i128::from(self.high)) / 2) as i64;
        self.last_guess = Some(guess);
        guess
    }
}

impl Player for BisectPlayer {
    fn read_token(&mut self, prompt: Prompt) -> Result<String, InputError> {
        match prompt {
            Prompt::Guess => Ok(self.next_guess().to_string()),
            Prompt::Replay => {
                self.rounds_left = self.rounds_left.saturating_sub(1);
                let answer = if self.rounds_left > 0 { "y" } else { "n" };
                Ok(answer.to_string())
            }
        }
    }

    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted(config) => {
                self.low = config.min_number();
                self.high = config.max_number();
                self.last_guess = None;
            }
            GameEvent::Direction(direction) => {
                if let Some(guess) = self.last_guess {
                    match direction {
                        Direction::TooLow => self.low = guess.saturating_add(1).min(self.high),
                        Direction::TooHigh => self.high = guess.saturating_sub(1).max(self.low),
                    }
                }
            }
            _ => {}
        }
    }
}
