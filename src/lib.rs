//! article-crew: transcripts in, research article out, via a staged
//! multi-agent LLM pipeline. Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
