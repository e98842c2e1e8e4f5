use crate::dialogue::Dialogue;
use crate::error::DialogueError;

use super::action::OrchestratorAction;
use super::condition::TurnCondition;
use super::Orchestrator;

/// Emits a fixed instruction whenever the most recent turn matches a
/// condition.
pub struct ReflexOrchestrator {
    name: String,
    condition: TurnCondition,
    instruction: String,
}

impl ReflexOrchestrator {
    pub fn new(condition: TurnCondition, instruction: impl Into<String>) -> Self {
        Self {
            name: "reflex".to_string(),
            condition,
            instruction: instruction.into(),
        }
    }

    /// Override the event-source name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Orchestrator for ReflexOrchestrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&mut self, dialogue: &Dialogue) -> Result<OrchestratorAction, DialogueError> {
        let Some(last) = dialogue.last_turn() else {
            return Ok(OrchestratorAction::None);
        };
        if self.condition.matches(last) {
            return Ok(OrchestratorAction::Instruct(self.instruction.clone()));
        }
        Ok(OrchestratorAction::None)
    }

    fn reset(&mut self) {}
}
