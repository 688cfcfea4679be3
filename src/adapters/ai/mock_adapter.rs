//! Mock chat adapter for testing without API calls.
//!
//! Returns deterministic replies, records prompts, and can simulate
//! failures. Used automatically when no credential is configured.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tracing::info;

use crate::domain::DomainError;
use crate::ports::ChatPort;

/// Mock chat adapter.
///
/// Counts calls and keeps the prompts it saw, so tests can assert whether
/// (and with what) the chat boundary was invoked.
pub struct MockChatAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    fail: bool,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl MockChatAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            fail: false,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock adapter whose every call fails.
    pub fn failing() -> Self {
        Self {
            delay_ms: 0,
            fail: true,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of recorded (system, user) prompt pairs.
    pub fn recorded_prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockChatAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatPort for MockChatAdapter {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        _temperature: f32,
    ) -> Result<String, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        info!(
            call,
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "[MOCK] simulating chat completion"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        if self.fail {
            return Err(DomainError::Chat("[MOCK] simulated model failure".into()));
        }

        Ok(format!(
            "[MOCK] completion {}: deterministic reply to a {}-char prompt.",
            call,
            user_prompt.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_counts_calls_and_records_prompts() {
        let adapter = MockChatAdapter::with_delay(0);
        assert_eq!(adapter.calls(), 0);

        let reply = adapter.complete("system", "user prompt", 0.7).await.unwrap();
        assert!(reply.starts_with("[MOCK] completion 1"));
        assert_eq!(adapter.calls(), 1);
        assert_eq!(
            adapter.recorded_prompts(),
            vec![("system".to_string(), "user prompt".to_string())]
        );
    }

    #[tokio::test]
    async fn failing_mock_returns_chat_error() {
        let adapter = MockChatAdapter::failing();
        let err = adapter.complete("s", "u", 0.7).await.unwrap_err();
        assert!(matches!(err, DomainError::Chat(_)));
        assert_eq!(adapter.calls(), 1);
    }
}
