use serde::{Deserialize, Serialize};

use crate::error::DialogueError;

use super::event::Event;
use super::turn::Turn;

/// Why a finished dialogue stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The global turn ceiling was reached
    MaxTurns,
    /// The ceiling and an orchestrator stop signal coincided on the same turn
    Ceiling,
    /// An orchestrator requested termination; carries the orchestrator name
    OrchestratorSignal(String),
    /// The completion service produced the configured end-of-conversation marker
    ServiceEndMarker,
    /// The completion service failed after the retry budget was exhausted
    ServiceFailure,
}

/// Append-only record of a conversation and the orchestration that shaped it.
///
/// A dialogue owns its turn log and its event log. Both are appended only
/// by the dialogue loop; once a termination reason is set the dialogue is
/// closed and accepts no further appends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dialogue {
    turns: Vec<Turn>,
    events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    termination: Option<TerminationReason>,
}

impl Dialogue {
    /// Create an empty, open dialogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// All turns in index order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// All orchestration events, in the order they fired.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of turns recorded so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Index the next appended turn will receive.
    pub fn next_index(&self) -> usize {
        self.turns.len()
    }

    /// The termination reason, once the dialogue is closed.
    pub fn termination(&self) -> Option<&TerminationReason> {
        self.termination.as_ref()
    }

    /// Whether the dialogue has been closed.
    pub fn is_terminated(&self) -> bool {
        self.termination.is_some()
    }

    pub(crate) fn push_turn(&mut self, turn: Turn) -> Result<(), DialogueError> {
        if self.is_terminated() {
            return Err(DialogueError::Generic(
                "cannot append a turn to a terminated dialogue".to_string(),
            ));
        }
        if turn.index != self.turns.len() {
            return Err(DialogueError::Generic(format!(
                "turn index {} breaks contiguity, expected {}",
                turn.index,
                self.turns.len()
            )));
        }
        self.turns.push(turn);
        Ok(())
    }

    pub(crate) fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn close(&mut self, reason: TerminationReason) {
        if self.termination.is_none() {
            self.termination = Some(reason);
        }
    }

    /// Plain-text transcript, one `"<Speaker>: <text>"` line per turn in
    /// index order.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.turns.iter().map(|t| t.to_string()).collect();
        lines.join("\n")
    }

    /// Serialize the export schema to a JSON string.
    pub fn to_json(&self) -> Result<String, DialogueError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a dialogue previously produced by [`Dialogue::to_json`].
    pub fn from_json(json: &str) -> Result<Self, DialogueError> {
        Ok(serde_json::from_str(json)?)
    }
}
