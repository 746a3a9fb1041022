//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - CliPlayer: Interactive command-line player
//! - ScriptedPlayer: Replays a fixed list of input tokens and records events
//! - BisectPlayer: Automated player that halves the remaining range each guess
//!
//! The game core never touches stdin or stdout directly. It reads raw tokens
//! from a Player and reports everything the user should see as [`GameEvent`]s.

use thiserror::Error;

use crate::core::{
    common::{Direction, GuessError},
    config::RoundConfig,
    hint::HintTier,
    stats::{StatisticsRecord, StatsMetrics},
};

/// What the game is waiting for when it asks for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// A guess, or the exit token.
    Guess,
    /// A yes/no answer to "play again?".
    Replay,
}

/// Everything the core reports to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Shown before a round when no games have been recorded yet.
    Welcome(RoundConfig),
    /// Shown before a round once at least one game is recorded.
    Stats {
        record: StatisticsRecord,
        metrics: StatsMetrics,
    },
    RoundStarted(RoundConfig),
    AttemptStarted { attempt: u32, max_attempts: u32 },
    InvalidGuess(GuessError),
    Correct {
        secret: i64,
        attempts: u32,
        history: Vec<i64>,
    },
    Direction(Direction),
    Hint(HintTier),
    AttemptsRemaining(u32),
    /// Guesses made before the latest one.
    PreviousGuesses(Vec<i64>),
    RoundLost { secret: i64 },
    RoundAborted,
    InvalidReplayAnswer,
    SaveFailed(String),
    Farewell,
    /// Statistics printed as the session ends.
    FinalStats {
        record: StatisticsRecord,
        metrics: StatsMetrics,
    },
}

/// Input could not be obtained. Always terminates the session.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Supplying one raw line of input per prompt
/// - Presenting game events
pub trait Player: Send {
    /// Block until one raw input token is available for `prompt`.
    fn read_token(&mut self, prompt: Prompt) -> Result<String, InputError>;

    /// Inform the player of something that happened.
    fn notify(&mut self, _event: &GameEvent) {}
}

// Re-export implementations
pub mod bisect;
pub use bisect::BisectPlayer;

pub mod cli;
pub use cli::CliPlayer;

pub mod scripted;
pub use scripted::ScriptedPlayer;
