use serde::{Deserialize, Serialize};

/// Role of a message inside one agent's private history.
///
/// The history an agent sends to the completion backend is written from
/// its own point of view: its prior utterances carry [`Role::Own`], the
/// interlocutor's carry [`Role::Interlocutor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// An utterance previously produced by the agent itself
    Own,
    /// An utterance heard from the other party
    Interlocutor,
}

/// A single message in an agent's private conversation memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Whose utterance this is, from the owning agent's point of view
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a message for an utterance the agent produced itself.
    pub fn own(content: impl Into<String>) -> Self {
        Self {
            role: Role::Own,
            content: content.into(),
        }
    }

    /// Create a message for an utterance heard from the interlocutor.
    pub fn interlocutor(content: impl Into<String>) -> Self {
        Self {
            role: Role::Interlocutor,
            content: content.into(),
        }
    }

    /// Check whether this message was produced by the owning agent.
    pub fn is_own(&self) -> bool {
        matches!(self.role, Role::Own)
    }
}
