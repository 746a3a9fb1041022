//! Commonly used types and utilities for ease of import.

pub use crate::{
    GameEvent, GameSession, Player, Prompt, RoundConfig, RoundEngine, RoundOutcome, RoundResult,
    StatisticsRecord, StatsStore,
};

pub use crate::{BisectPlayer, CliPlayer, ScriptedPlayer};
