use crate::error::DialogueError;

const DEFAULT_MAX_TURNS: usize = 20;

/// Drives two orchestrated agents in strict alternation until a
/// termination condition fires.
pub struct DialogueSimulator {
    pub(super) max_turns: usize,
    pub(super) end_marker: Option<String>,
    pub(super) timestamps: bool,
}

impl DialogueSimulator {
    /// Create a new builder.
    pub fn builder() -> DialogueSimulatorBuilder {
        DialogueSimulatorBuilder::default()
    }

    /// Create a simulator with the default turn ceiling and no end marker.
    pub fn defaults() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            end_marker: None,
            timestamps: false,
        }
    }

    /// The configured global turn ceiling.
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }
}

/// Builder for [`DialogueSimulator`].
pub struct DialogueSimulatorBuilder {
    max_turns: usize,
    end_marker: Option<String>,
    timestamps: bool,
}

impl Default for DialogueSimulatorBuilder {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            end_marker: None,
            timestamps: false,
        }
    }
}

impl DialogueSimulatorBuilder {
    /// Set the global turn ceiling.
    pub fn max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Treat replies carrying this marker as end-of-conversation.
    pub fn end_marker(mut self, marker: impl Into<String>) -> Self {
        self.end_marker = Some(marker.into());
        self
    }

    /// Record wall-clock timestamps on appended turns.
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Build the simulator; a zero turn ceiling is rejected.
    pub fn build(self) -> Result<DialogueSimulator, DialogueError> {
        if self.max_turns == 0 {
            return Err(DialogueError::InvalidConfig(
                "turn ceiling must be at least 1".to_string(),
            ));
        }
        Ok(DialogueSimulator {
            max_turns: self.max_turns,
            end_marker: self.end_marker,
            timestamps: self.timestamps,
        })
    }
}
