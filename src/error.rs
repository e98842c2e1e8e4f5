use thiserror::Error;

/// Error types that can occur while simulating orchestrated dialogues.
#[derive(Debug, Error)]
pub enum DialogueError {
    /// The completion backend is unreachable or rejected the request
    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The completion backend did not answer within the configured deadline
    #[error("Completion service timed out: {0}")]
    Timeout(String),
    /// Invalid construction-time configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// An orchestrator's observe call failed; fatal to the dialogue run
    #[error("Orchestrator '{orchestrator}' failed at turn {turn}: {message}")]
    OrchestratorFailure {
        orchestrator: String,
        turn: usize,
        message: String,
    },
    /// Retry attempts exceeded
    #[error("Retry attempts exceeded after {attempts} tries: {last_error}")]
    RetryExceeded { attempts: usize, last_error: String },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Generic error
    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<serde_json::Error> for DialogueError {
    fn from(err: serde_json::Error) -> Self {
        DialogueError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
