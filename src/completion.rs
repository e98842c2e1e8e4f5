use async_trait::async_trait;

use crate::error::DialogueError;
use crate::message::Message;

/// Trait for text-completion backends consumed by agents.
///
/// The orchestration core treats the backend as opaque: given the
/// conversation so far (from the calling agent's point of view) and an
/// optional system-facing instruction block, it produces one reply.
/// Implementations may be stochastic; determinism is only guaranteed for
/// the orchestration layer above this trait.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Produce the next reply for the given history.
    ///
    /// `instruction` carries the persona fragment plus any merged
    /// orchestrator instructions for this generation step. Failures
    /// surface as [`DialogueError::ServiceUnavailable`] or
    /// [`DialogueError::Timeout`].
    async fn complete(
        &self,
        history: &[Message],
        instruction: Option<&str>,
    ) -> Result<String, DialogueError>;
}
