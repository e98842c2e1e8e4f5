use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One utterance by one agent at a fixed position in the dialogue.
///
/// Turns are immutable once appended to a [`Dialogue`](super::Dialogue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Display name of the speaking agent
    pub speaker: String,
    /// The spoken text
    pub text: String,
    /// Zero-based position within the dialogue
    pub index: usize,
    /// Wall-clock time the turn was recorded, when timestamping is enabled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    pub(crate) fn new(speaker: impl Into<String>, text: impl Into<String>, index: usize) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            index,
            timestamp: None,
        }
    }

    pub(crate) fn stamped(mut self) -> Self {
        self.timestamp = Some(Utc::now());
        self
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}
