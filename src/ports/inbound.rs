//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive session invokes application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive flow (select transcripts, generate, export).
    /// Returns when the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
