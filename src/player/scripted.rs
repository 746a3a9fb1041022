use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use super::{GameEvent, InputError, Player, Prompt};

/// Shared view of the events a [`ScriptedPlayer`] has received.
pub type EventLog = Arc<Mutex<Vec<GameEvent>>>;

/// Player that replays a fixed sequence of tokens and records every event.
///
/// Once the script runs out, reads fail with [`InputError::Closed`], the same
/// way an exhausted stdin does.
pub struct ScriptedPlayer {
    inputs: VecDeque<String>,
    prompts: Vec<Prompt>,
    log: EventLog,
}

impl ScriptedPlayer {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            inputs: inputs.into_iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the event log that stays valid after the player is boxed.
    pub fn log(&self) -> EventLog {
        Arc::clone(&self.log)
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Prompts answered so far, in order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Tokens not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Player for ScriptedPlayer {
    fn read_token(&mut self, prompt: Prompt) -> Result<String, InputError> {
        self.prompts.push(prompt);
        self.inputs.pop_front().ok_or(InputError::Closed)
    }

    fn notify(&mut self, event: &GameEvent) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
