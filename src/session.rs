use log::{debug, error};
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    core::{
        config::RoundConfig,
        round::{RoundEngine, RoundOutcome},
        stats::StatisticsRecord,
    },
    player::{GameEvent, InputError, Player, Prompt},
    store::{StatsStore, StoreError},
};

/// Accepted answers to the replay question. Matching is done on the trimmed,
/// lowercased token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayAnswers {
    affirmative: Vec<String>,
    negative: Vec<String>,
}

impl ReplayAnswers {
    pub fn new<I, J, S>(affirmative: I, negative: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            affirmative: affirmative
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// `Some(true)` to play again, `Some(false)` to stop, `None` if the token
    /// is not recognised.
    pub fn parse(&self, token: &str) -> Option<bool> {
        let answer = token.trim().to_lowercase();
        if self.affirmative.iter().any(|a| *a == answer) {
            Some(true)
        } else if self.negative.iter().any(|n| *n == answer) {
            Some(false)
        } else {
            None
        }
    }
}

impl Default for ReplayAnswers {
    fn default() -> Self {
        Self::new(["да", "yes", "y", "д"], ["нет", "no", "n", "н"])
    }
}

/// How a session that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player declined another round.
    Declined,
    /// The player typed the exit token during a round.
    Aborted,
}

/// Conditions that terminate the session abnormally.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to save statistics: {0}")]
    Save(#[from] StoreError),
}

impl SessionError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::Input(_) | SessionError::Save(_) => 1,
        }
    }
}

/// Exit code used when the process is stopped with Ctrl+C.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Orchestrates repeated rounds, statistics write-through and the replay
/// question.
pub struct GameSession {
    config: RoundConfig,
    store: StatsStore,
    record: StatisticsRecord,
    player: Box<dyn Player>,
    rng: SmallRng,
    replay_answers: ReplayAnswers,
}

impl GameSession {
    /// Create a session, loading the current statistics from `store`.
    pub fn new(
        config: RoundConfig,
        store: StatsStore,
        player: Box<dyn Player>,
        rng: SmallRng,
    ) -> Self {
        let record = store.load();
        Self {
            config,
            store,
            record,
            player,
            rng,
            replay_answers: ReplayAnswers::default(),
        }
    }

    pub fn with_replay_answers(mut self, answers: ReplayAnswers) -> Self {
        self.replay_answers = answers;
        self
    }

    /// Statistics as of the last finished round.
    pub fn record(&self) -> &StatisticsRecord {
        &self.record
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Play rounds until the player declines, aborts, or input fails.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            if self.record.games_played > 0 {
                self.player.notify(&GameEvent::Stats {
                    record: self.record,
                    metrics: self.record.derive_metrics(),
                });
            } else {
                self.player.notify(&GameEvent::Welcome(self.config));
            }

            let mut round = RoundEngine::new(self.config, &mut self.rng);
            let result = match round.play(&mut *self.player)? {
                RoundOutcome::Aborted => return Ok(SessionEnd::Aborted),
                RoundOutcome::Finished(result) => result,
            };

            self.record_round(self.record.update(&result))?;

            if !self.ask_replay()? {
                self.player.notify(&GameEvent::Farewell);
                self.player.notify(&GameEvent::FinalStats {
                    record: self.record,
                    metrics: self.record.derive_metrics(),
                });
                return Ok(SessionEnd::Declined);
            }
        }
    }

    fn record_round(&mut self, updated: StatisticsRecord) -> Result<(), SessionError> {
        if let Err(e) = self.store.save(&updated) {
            error!("{}: {}", self.store.path().display(), e);
            self.player.notify(&GameEvent::SaveFailed(e.to_string()));
            return Err(e.into());
        }
        debug!(
            "recorded round: {} played, {} won",
            updated.games_played, updated.games_won
        );
        self.record = updated;
        Ok(())
    }

    fn ask_replay(&mut self) -> Result<bool, InputError> {
        loop {
            let token = self.player.read_token(Prompt::Replay)?;
            match self.replay_answers.parse(&token) {
                Some(again) => return Ok(again),
                None => self.player.notify(&GameEvent::InvalidReplayAnswer),
            }
        }
    }
}
