//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Extraction failed: {0}")]
    Extract(String),

    /// Raised instead of silently ignoring files the extractor cannot read.
    /// The caller decides whether to skip the file or abort the run.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Chat completion failed: {0}")]
    Chat(String),

    #[error("Invalid pipeline definition: {0}")]
    Pipeline(String),

    #[error("Report export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    /// Precondition: generation was requested with no transcripts. The chat
    /// boundary must not be invoked in this state.
    #[error("No transcript files to process")]
    NoTranscripts,

    /// Precondition: combined content was empty after aggregation.
    #[error("No content to process")]
    EmptyContent,

    /// Precondition: the remote chat boundary needs a credential.
    #[error("API credential is missing")]
    MissingCredential,
}
