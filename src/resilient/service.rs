use async_trait::async_trait;

use crate::completion::CompletionService;
use crate::error::DialogueError;
use crate::message::Message;

use super::wrapper::ResilientCompletion;

#[async_trait]
impl CompletionService for ResilientCompletion {
    async fn complete(
        &self,
        history: &[Message],
        instruction: Option<&str>,
    ) -> Result<String, DialogueError> {
        self.retry(|| self.inner.complete(history, instruction))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::resilient::ResilienceConfig;

    struct FlakyService {
        fail_times: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionService for FlakyService {
        async fn complete(
            &self,
            _history: &[Message],
            _instruction: Option<&str>,
        ) -> Result<String, DialogueError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_times {
                return Err(DialogueError::ServiceUnavailable("down".into()));
            }
            Ok("ok".to_string())
        }
    }

    fn fast_config(max_attempts: usize) -> ResilienceConfig {
        ResilienceConfig {
            max_attempts,
            base_delay_ms: 1,
            max_delay_ms: 2,
            jitter: false,
            timeout_ms: None,
        }
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let inner = Arc::new(FlakyService {
            fail_times: 2,
            calls: AtomicUsize::new(0),
        });
        let resilient = ResilientCompletion::new(inner.clone(), fast_config(3));

        let reply = resilient.complete(&[], None).await.expect("complete");
        assert_eq!(reply, "ok");
        assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_budget_and_reports_attempts() {
        let inner = Arc::new(FlakyService {
            fail_times: usize::MAX,
            calls: AtomicUsize::new(0),
        });
        let resilient = ResilientCompletion::new(inner.clone(), fast_config(3));

        let err = resilient.complete(&[], None).await.unwrap_err();
        match err {
            DialogueError::RetryExceeded { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    }

    struct SlowService;

    #[async_trait]
    impl CompletionService for SlowService {
        async fn complete(
            &self,
            _history: &[Message],
            _instruction: Option<&str>,
        ) -> Result<String, DialogueError> {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn deadline_converts_to_timeout() {
        let cfg = ResilienceConfig {
            max_attempts: 1,
            base_delay_ms: 1,
            max_delay_ms: 1,
            jitter: false,
            timeout_ms: Some(10),
        };
        let resilient = ResilientCompletion::new(Arc::new(SlowService), cfg);

        let err = resilient.complete(&[], None).await.unwrap_err();
        match err {
            DialogueError::RetryExceeded { last_error, .. } => {
                assert!(last_error.contains("timed out"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
