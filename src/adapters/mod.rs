//! Infrastructure adapters. Implement outbound ports.
//!
//! File extraction, LLM API, report export, persistence, terminal UI.
//! Map infrastructure errors to DomainError.

pub mod ai;
pub mod export;
pub mod extract;
pub mod persistence;
pub mod ui;
