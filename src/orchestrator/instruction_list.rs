use std::collections::BTreeMap;

use crate::dialogue::Dialogue;
use crate::error::DialogueError;

use super::action::OrchestratorAction;
use super::Orchestrator;

/// Injects pre-written instructions at fixed turn indices.
///
/// The key is the dialogue-wide index of the upcoming turn; when the
/// dialogue reaches it, the configured instruction is merged into that
/// generation step.
pub struct InstructionListOrchestrator {
    name: String,
    by_turn: BTreeMap<usize, String>,
}

impl InstructionListOrchestrator {
    pub fn new(by_turn: BTreeMap<usize, String>) -> Self {
        Self {
            name: "instruction_list".to_string(),
            by_turn,
        }
    }

    /// Override the event-source name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Orchestrator for InstructionListOrchestrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&mut self, dialogue: &Dialogue) -> Result<OrchestratorAction, DialogueError> {
        match self.by_turn.get(&dialogue.next_index()) {
            Some(instruction) => Ok(OrchestratorAction::Instruct(instruction.clone())),
            None => Ok(OrchestratorAction::None),
        }
    }

    fn reset(&mut self) {}
}
