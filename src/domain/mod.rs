//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod pipeline;

pub use entities::{CombinedContent, GenerationResult, Transcript};
pub use errors::DomainError;
pub use pipeline::{AgentSpec, CrewDefinition, TaskSpec};
