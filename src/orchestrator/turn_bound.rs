use crate::dialogue::Dialogue;
use crate::error::DialogueError;

use super::action::{OrchestratorAction, StopSignal};
use super::Orchestrator;

const KEEP_GOING: &str =
    "Keep the conversation going; do not wrap up or say goodbye yet.";

/// Bounds the dialogue length between a minimum and maximum turn count.
///
/// Below `min` turns it instructs the agent to keep the conversation
/// alive (it never independently requests termination there, though
/// another orchestrator's stop or the global ceiling can still end the
/// run); at or past `max` turns it signals stop.
#[derive(Debug)]
pub struct TurnBoundOrchestrator {
    name: String,
    min: usize,
    max: usize,
}

impl TurnBoundOrchestrator {
    /// Create a turn-bound policy; `min > max` is rejected.
    pub fn new(min: usize, max: usize) -> Result<Self, DialogueError> {
        if min > max {
            return Err(DialogueError::InvalidConfig(format!(
                "turn bound min ({min}) must not exceed max ({max})"
            )));
        }
        Ok(Self {
            name: "turn_bound".to_string(),
            min,
            max,
        })
    }

    /// Override the event-source name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Orchestrator for TurnBoundOrchestrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&mut self, dialogue: &Dialogue) -> Result<OrchestratorAction, DialogueError> {
        let turns = dialogue.len();
        if turns >= self.max {
            return Ok(OrchestratorAction::Signal(StopSignal::Stop));
        }
        if turns < self.min {
            return Ok(OrchestratorAction::Instruct(KEEP_GOING.to_string()));
        }
        Ok(OrchestratorAction::None)
    }

    fn reset(&mut self) {}
}
