use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::completion::CompletionService;
use crate::error::DialogueError;

use super::config::ResilienceConfig;

/// Resilient wrapper that retries transient completion failures using
/// exponential backoff and enforces a per-attempt deadline.
pub struct ResilientCompletion {
    pub(super) inner: Arc<dyn CompletionService>,
    pub(super) cfg: ResilienceConfig,
}

impl ResilientCompletion {
    /// Creates a new resilient wrapper around an existing service.
    pub fn new(inner: Arc<dyn CompletionService>, cfg: ResilienceConfig) -> Self {
        Self { inner, cfg }
    }

    pub(super) async fn retry<F, Fut, T>(&self, mut op: F) -> Result<T, DialogueError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DialogueError>>,
    {
        let mut attempts_left = self.cfg.max_attempts;
        let mut idx = 0usize;
        let mut last_err: Option<DialogueError> = None;

        while attempts_left > 0 {
            match self.attempt(op()).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !Self::is_retryable(&err) {
                        return Err(err);
                    }
                    log::warn!("Completion attempt failed, retrying: {err}");
                    last_err = Some(err);
                    attempts_left -= 1;
                    if attempts_left > 0 {
                        self.backoff_sleep(idx).await;
                    }
                    idx += 1;
                }
            }
        }

        Err(DialogueError::RetryExceeded {
            attempts: self.cfg.max_attempts,
            last_error: last_err.map(|e| e.to_string()).unwrap_or_default(),
        })
    }

    async fn attempt<Fut, T>(&self, fut: Fut) -> Result<T, DialogueError>
    where
        Fut: Future<Output = Result<T, DialogueError>>,
    {
        let Some(timeout_ms) = self.cfg.timeout_ms else {
            return fut.await;
        };
        match tokio::time::timeout(Duration::from_millis(timeout_ms), fut).await {
            Ok(result) => result,
            Err(_) => Err(DialogueError::Timeout(format!(
                "no reply within {timeout_ms}ms"
            ))),
        }
    }

    fn is_retryable(err: &DialogueError) -> bool {
        match err {
            DialogueError::ServiceUnavailable(_) => true,
            DialogueError::Timeout(_) => true,
            DialogueError::Generic(_) => true,
            DialogueError::RetryExceeded { .. } => false,
            DialogueError::InvalidConfig(_) => false,
            DialogueError::OrchestratorFailure { .. } => false,
            DialogueError::JsonError(_) => false,
        }
    }

    async fn backoff_sleep(&self, attempt_index: usize) {
        let mut delay = self
            .cfg
            .base_delay_ms
            .saturating_mul(1u64 << attempt_index.min(16));
        delay = delay.min(self.cfg.max_delay_ms);
        if self.cfg.jitter {
            let span = (delay / 2).max(1);
            let jitter = ((attempt_index as u64)
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1))
                % span;
            delay = delay.saturating_sub(jitter);
        }
        sleep(Duration::from_millis(delay)).await;
    }
}
