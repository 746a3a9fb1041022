//! Cross-session statistics and the metrics derived from them.

use serde::{Deserialize, Serialize};

use crate::core::round::RoundResult;

/// Persisted aggregate over every finished round.
///
/// Missing fields deserialize to zero (or unset for `best_score`) so older or
/// hand-edited files still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsRecord {
    pub games_played: u64,
    pub games_won: u64,
    pub total_attempts: u64,
    /// Fewest attempts among won rounds; `None` until the first win.
    pub best_score: Option<u32>,
}

/// Display values derived from a [`StatisticsRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsMetrics {
    pub win_rate_percent: f64,
    pub avg_attempts: f64,
    pub best_score: Option<u32>,
}

impl StatisticsRecord {
    /// Fold one finished round into the record.
    pub fn update(self, result: &RoundResult) -> Self {
        let mut next = self;
        next.games_played = next.games_played.saturating_add(1);
        next.total_attempts = next
            .total_attempts
            .saturating_add(u64::from(result.attempts_used));
        if result.won {
            next.games_won = next.games_won.saturating_add(1);
            next.best_score = Some(match next.best_score {
                Some(best) => best.min(result.attempts_used),
                None => result.attempts_used,
            });
        }
        next
    }

    /// Win rate and average attempts, both `0.0` before any game is played.
    pub fn derive_metrics(&self) -> StatsMetrics {
        let (win_rate_percent, avg_attempts) = if self.games_played == 0 {
            (0.0, 0.0)
        } else {
            let played = self.games_played as f64;
            (
                self.games_won as f64 / played * 100.0,
                self.total_attempts as f64 / played,
            )
        };
        StatsMetrics {
            win_rate_percent,
            avg_attempts,
            best_score: self.best_score.filter(|_| self.games_won > 0),
        }
    }

    /// Check the invariants a loaded record must satisfy. Returns a
    /// description of the first violation.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.games_won > self.games_played {
            return Err("games_won exceeds games_played");
        }
        match self.best_score {
            Some(0) => Err("best_score must be positive"),
            Some(_) if self.games_won == 0 => Err("best_score set without any win"),
            _ => Ok(()),
        }
    }
}
