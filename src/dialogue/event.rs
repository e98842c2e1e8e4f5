use serde::{Deserialize, Serialize};

/// What kind of orchestration action an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An instruction merged into an agent's prompt
    Instruction,
    /// A structural signal, e.g. a stop request
    Signal,
}

/// Orchestration metadata attached to the turn it influenced.
///
/// Events are distinct from [`Turn`](super::Turn)s: they record what the
/// orchestration layer did, not what was spoken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Instruction or signal
    pub kind: EventKind,
    /// Name of the orchestrator (or the loop itself) that emitted this
    pub source: String,
    /// Instruction text or signal description
    pub payload: String,
    /// Index of the turn this event influenced
    pub turn_index: usize,
}

impl Event {
    pub(crate) fn instruction(
        source: impl Into<String>,
        payload: impl Into<String>,
        turn_index: usize,
    ) -> Self {
        Self {
            kind: EventKind::Instruction,
            source: source.into(),
            payload: payload.into(),
            turn_index,
        }
    }

    pub(crate) fn signal(
        source: impl Into<String>,
        payload: impl Into<String>,
        turn_index: usize,
    ) -> Self {
        Self {
            kind: EventKind::Signal,
            source: source.into(),
            payload: payload.into(),
            turn_index,
        }
    }
}
