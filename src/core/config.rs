use crate::core::common::ConfigError;

pub const DEFAULT_MIN_NUMBER: i64 = 1;
pub const DEFAULT_MAX_NUMBER: i64 = 100;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Attempt number from which a proximity hint accompanies each miss.
pub const HINT_FROM_ATTEMPT: u32 = 3;

/// Statistics file used when no explicit path is given, relative to the
/// working directory.
pub const DEFAULT_STATS_FILE: &str = "game_stats.json";

/// Immutable per-session round settings. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    min_number: i64,
    max_number: i64,
    max_attempts: u32,
}

impl RoundConfig {
    /// Validate and build a configuration.
    pub fn new(min_number: i64, max_number: i64, max_attempts: u32) -> Result<Self, ConfigError> {
        if min_number >= max_number {
            return Err(ConfigError::EmptyRange {
                min: min_number,
                max: max_number,
            });
        }
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(Self {
            min_number,
            max_number,
            max_attempts,
        })
    }

    pub fn min_number(&self) -> i64 {
        self.min_number
    }

    pub fn max_number(&self) -> i64 {
        self.max_number
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether `value` lies inside the inclusive range.
    pub fn contains(&self, value: i64) -> bool {
        (self.min_number..=self.max_number).contains(&value)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            min_number: DEFAULT_MIN_NUMBER,
            max_number: DEFAULT_MAX_NUMBER,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
