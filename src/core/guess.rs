use std::num::IntErrorKind;

use crate::core::{common::GuessError, config::RoundConfig};

/// Token that abandons the current round, compared case-insensitively.
pub const EXIT_TOKEN: &str = "exit";

/// Whether a raw token asks to abandon the round.
pub fn is_exit_token(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case(EXIT_TOKEN)
}

/// Parse a raw token into a guess inside the configured range.
///
/// Integers too large for `i64` are reported as out of range on the side of
/// their sign rather than as non-numbers.
pub fn validate_guess(token: &str, config: &RoundConfig) -> Result<i64, GuessError> {
    let number = match token.trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => GuessError::AboveRange {
                    max: config.max_number(),
                },
                IntErrorKind::NegOverflow => GuessError::BelowRange {
                    min: config.min_number(),
                },
                _ => GuessError::NotANumber,
            })
        }
    };
    if number < config.min_number() {
        return Err(GuessError::BelowRange {
            min: config.min_number(),
        });
    }
    if number > config.max_number() {
        return Err(GuessError::AboveRange {
            max: config.max_number(),
        });
    }
    Ok(number)
}
