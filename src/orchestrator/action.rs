/// Structural signals an orchestrator can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    /// End the conversation after the upcoming turn
    Stop,
}

/// What an orchestrator decided to do for the upcoming generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorAction {
    /// Do nothing this step
    None,
    /// Merge the given text into the agent's next prompt
    Instruct(String),
    /// Raise a structural signal
    Signal(StopSignal),
}

impl OrchestratorAction {
    /// Whether this action carries no effect.
    pub fn is_none(&self) -> bool {
        matches!(self, OrchestratorAction::None)
    }
}
