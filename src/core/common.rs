//! Common types for the guessing game: validation errors, feedback and
//! configuration errors.

use crate::core::hint::HintTier;

/// Why a raw input token was rejected as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Token is not an integer.
    NotANumber,
    /// Integer below the lower bound.
    BelowRange { min: i64 },
    /// Integer above the upper bound.
    AboveRange { max: i64 },
}

impl std::fmt::Display for GuessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessError::NotANumber => write!(f, "Please enter a whole number"),
            GuessError::BelowRange { min } => write!(f, "The number must be at least {}", min),
            GuessError::AboveRange { max } => write!(f, "The number must be at most {}", max),
        }
    }
}

/// Errors returned when building a round configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min` is not strictly below `max`.
    EmptyRange { min: i64, max: i64 },
    /// A round needs at least one attempt.
    NoAttempts,
    /// A fixed secret lies outside the configured range.
    SecretOutOfRange(i64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyRange { min, max } => {
                write!(f, "Minimum {} must be strictly less than maximum {}", min, max)
            }
            ConfigError::NoAttempts => write!(f, "Maximum attempts must be greater than zero"),
            ConfigError::SecretOutOfRange(secret) => {
                write!(f, "Secret {} is outside the configured range", secret)
            }
        }
    }
}

impl std::error::Error for GuessError {}
impl std::error::Error for ConfigError {}

/// Which way the secret lies relative to a missed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The guess was below the secret.
    TooLow,
    /// The guess was above the secret.
    TooHigh,
}

/// Result of submitting one validated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    Correct,
    Miss {
        direction: Direction,
        /// Present from the third attempt on.
        hint: Option<HintTier>,
        /// Attempts left after this one.
        remaining: u32,
    },
}
