use log::debug;
use rand::Rng;

use crate::{
    core::{
        common::{ConfigError, Direction, GuessFeedback},
        config::{RoundConfig, HINT_FROM_ATTEMPT},
        guess::{is_exit_token, validate_guess},
        hint::HintTier,
    },
    player::{GameEvent, InputError, Player, Prompt},
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
    Aborted,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost | RoundStatus::Aborted)
    }
}

/// A round that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub attempts_used: u32,
}

/// How a round ended. Only finished rounds count towards statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Finished(RoundResult),
    /// The player typed the exit token.
    Aborted,
}

/// State machine for a single guessing round.
pub struct RoundEngine {
    config: RoundConfig,
    secret: i64,
    attempts_used: u32,
    history: Vec<i64>,
    status: RoundStatus,
}

impl RoundEngine {
    /// Start a round with a secret drawn uniformly from the configured range.
    pub fn new<R: Rng + ?Sized>(config: RoundConfig, rng: &mut R) -> Self {
        let secret = rng.random_range(config.min_number()..=config.max_number());
        Self::from_parts(config, secret)
    }

    /// Start a round with a known secret.
    pub fn with_secret(config: RoundConfig, secret: i64) -> Result<Self, ConfigError> {
        if !config.contains(secret) {
            return Err(ConfigError::SecretOutOfRange(secret));
        }
        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: RoundConfig, secret: i64) -> Self {
        Self {
            config,
            secret,
            attempts_used: 0,
            history: Vec::new(),
            status: RoundStatus::NotStarted,
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Accepted guesses in the order they were made.
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Attempts left before the round is lost.
    pub fn remaining(&self) -> u32 {
        self.config.max_attempts().saturating_sub(self.attempts_used)
    }

    /// Record one validated guess and evaluate it.
    ///
    /// The caller must only submit in-range guesses while the round is not in
    /// a terminal state.
    pub fn submit(&mut self, guess: i64) -> GuessFeedback {
        debug_assert!(self.config.contains(guess));
        debug_assert!(!self.status.is_terminal());

        self.status = RoundStatus::InProgress;
        self.attempts_used += 1;
        self.history.push(guess);

        if guess == self.secret {
            self.status = RoundStatus::Won;
            return GuessFeedback::Correct;
        }

        let direction = if guess < self.secret {
            Direction::TooLow
        } else {
            Direction::TooHigh
        };
        let hint = (self.attempts_used >= HINT_FROM_ATTEMPT)
            .then(|| HintTier::between(self.secret, guess));
        let remaining = self.remaining();
        if remaining == 0 {
            self.status = RoundStatus::Lost;
        }
        GuessFeedback::Miss {
            direction,
            hint,
            remaining,
        }
    }

    /// Run the round to completion against `player`.
    ///
    /// Invalid tokens are reported and re-requested without consuming an
    /// attempt. Input failures end the round immediately and are returned.
    pub fn play(&mut self, player: &mut dyn Player) -> Result<RoundOutcome, InputError> {
        self.status = RoundStatus::InProgress;
        debug!(
            "round started: range {}..={}, {} attempts",
            self.config.min_number(),
            self.config.max_number(),
            self.config.max_attempts()
        );
        player.notify(&GameEvent::RoundStarted(self.config));

        while self.attempts_used < self.config.max_attempts() {
            player.notify(&GameEvent::AttemptStarted {
                attempt: self.attempts_used + 1,
                max_attempts: self.config.max_attempts(),
            });

            let guess = loop {
                let token = player.read_token(Prompt::Guess)?;
                if is_exit_token(&token) {
                    debug!("round aborted after {} attempts", self.attempts_used);
                    self.status = RoundStatus::Aborted;
                    player.notify(&GameEvent::RoundAborted);
                    return Ok(RoundOutcome::Aborted);
                }
                match validate_guess(&token, &self.config) {
                    Ok(guess) => break guess,
                    Err(e) => player.notify(&GameEvent::InvalidGuess(e)),
                }
            };

            match self.submit(guess) {
                GuessFeedback::Correct => {
                    player.notify(&GameEvent::Correct {
                        secret: self.secret,
                        attempts: self.attempts_used,
                        history: self.history.clone(),
                    });
                    return Ok(RoundOutcome::Finished(RoundResult {
                        won: true,
                        attempts_used: self.attempts_used,
                    }));
                }
                GuessFeedback::Miss {
                    direction,
                    hint,
                    remaining,
                } => {
                    player.notify(&GameEvent::Direction(direction));
                    if let Some(tier) = hint {
                        player.notify(&GameEvent::Hint(tier));
                    }
                    if remaining > 0 {
                        player.notify(&GameEvent::AttemptsRemaining(remaining));
                    }
                    if self.history.len() > 1 {
                        let previous = self.history[..self.history.len() - 1].to_vec();
                        player.notify(&GameEvent::PreviousGuesses(previous));
                    }
                }
            }
        }

        self.status = RoundStatus::Lost;
        player.notify(&GameEvent::RoundLost {
            secret: self.secret,
        });
        Ok(RoundOutcome::Finished(RoundResult {
            won: false,
            attempts_used: self.config.max_attempts(),
        }))
    }
}
