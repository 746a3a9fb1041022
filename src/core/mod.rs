//! Core guessing game engine
//!
//! This module contains the pure game logic: round configuration, guess
//! validation, hint tiers, the round state machine and statistics
//! aggregation. File access and terminal I/O live outside it.

pub mod common;
pub mod config;
pub mod guess;
pub mod hint;
pub mod round;
pub mod stats;

// Re-export commonly used types
pub use common::{ConfigError, Direction, GuessError, GuessFeedback};
pub use config::*;
pub use guess::{is_exit_token, validate_guess, EXIT_TOKEN};
pub use hint::HintTier;
pub use round::{RoundEngine, RoundOutcome, RoundResult, RoundStatus};
pub use stats::{StatisticsRecord, StatsMetrics};
