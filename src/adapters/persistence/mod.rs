//! Persistence adapters. The only thing this system persists is the
//! pipeline configuration — never credentials, never run results.

pub mod pipeline_store;

pub use pipeline_store::{PipelineConfig, PipelineStore, PIPELINE_CONFIG_FILE};
