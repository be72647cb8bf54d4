//! Data models
pub mod model_definition;

pub use model_definition::{NO_SUMMARY_PLACEHOLDER, SummarizeInput, SummaryRecord, SummaryStyle};
