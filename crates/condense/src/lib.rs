//! condense summarization library
//!
//! Builds style-specific prompts, sends them to a generative-language API and
//! records every successful summary in an append-only store.

use std::future::Future;
use std::pin::Pin;

/// Configuration module - CondenseConfig, GenerationConfig, StorageConfig
pub mod config;

/// Error module - CondenseError, CondenseResult and per-layer errors
pub mod errors;

/// Generation module - SummaryGenerator trait and the Gemini client
pub mod generation;

/// Data model module - SummaryStyle, SummarizeInput, SummaryRecord
pub mod models;

/// Prompt module - instruction templates per summary style
pub mod prompt;

/// Service module - the Summarizer facade
pub mod service;

/// Store module - SummaryStore trait and the SQLite implementation
pub mod store;

/// Boxed future returned by the async trait methods of this crate.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Re-exports
pub use config::{CondenseConfig, GenerationConfig, StorageConfig};
pub use errors::{CondenseError, CondenseResult};
pub use models::{SummarizeInput, SummaryRecord, SummaryStyle};
pub use service::Summarizer;
