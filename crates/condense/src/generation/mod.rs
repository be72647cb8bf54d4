//! Generative-language API client
pub mod gemini_client;

pub use gemini_client::{GeminiClient, SummaryGenerator};
