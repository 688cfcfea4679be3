//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Chat-completion gateway. One blocking round trip per call.
///
/// This is the only suspension point in the system: the crew runner issues
/// exactly one call per task and waits for the reply before moving on.
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Send a system/user prompt pair and return the assistant reply text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, DomainError>;
}
