// crates/condense/src/service.rs

//! Summarizer: the facade of the condense crate.
//!
//! - Prompt construction (`prompt`)
//! - Summary generation (`SummaryGenerator`)
//! - Record persistence (`SummaryStore`)
//!
//! The HTTP layer only needs this struct.
//!
//! # Flow
//!
//! validate → build prompt → generate → (placeholder if no text) → store → return
//!
//! A record is stored if and only if generation succeeded. A storage failure is
//! reported as [`CondenseError::Storage`], distinct from generation failures, and
//! the generated summary is not handed back in that case.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::{CondenseConfig, MAX_TEXT_BYTES};
use crate::errors::{CondenseError, CondenseResult};
use crate::generation::{GeminiClient, SummaryGenerator};
use crate::models::{NO_SUMMARY_PLACEHOLDER, SummarizeInput, SummaryRecord, SummaryStyle};
use crate::prompt::build_prompt;
use crate::store::{SqliteSummaryStore, SummaryStore};

/// Summarization pipeline.
#[derive(Clone)]
pub struct Summarizer {
  generator: Arc<dyn SummaryGenerator>,
  store: Arc<dyn SummaryStore>,
}

impl Summarizer {
  /// Builds a summarizer from explicit collaborators.
  pub fn new(generator: Arc<dyn SummaryGenerator>, store: Arc<dyn SummaryStore>) -> Self {
    Self { generator, store }
  }

  /// Initializes the production pipeline (Gemini client + SQLite store).
  ///
  /// # Errors
  /// - Invalid configuration
  /// - HTTP client construction failure
  /// - Database open failure
  pub async fn init(config: &CondenseConfig) -> CondenseResult<Self> {
    config.validate()?;

    let generator = GeminiClient::new(&config.generation)?;
    info!(endpoint = generator.endpoint(), "generation client ready");

    let store = SqliteSummaryStore::open(&config.storage).await?;

    Ok(Self::new(Arc::new(generator), Arc::new(store)))
  }

  /// Summarizes one input and persists the transcript.
  ///
  /// # Errors
  /// - `InvalidInput`: `text` is absent or empty (no external calls are made)
  /// - `TextTooLong`: `text` exceeds `MAX_TEXT_BYTES`
  /// - `Generation`: the upstream failed (nothing is stored)
  /// - `Storage`: the upstream succeeded but the record could not be stored
  pub async fn summarize(&self, input: SummarizeInput) -> CondenseResult<SummaryRecord> {
    let SummarizeInput { text, summary_type } = input;

    let text = match text {
      Some(text) if !text.is_empty() => text,
      _ => {
        return Err(CondenseError::InvalidInput {
          reason: "No text provided".to_string(),
        });
      }
    };

    if text.len() > MAX_TEXT_BYTES {
      return Err(CondenseError::TextTooLong {
        actual: text.len(),
        max: MAX_TEXT_BYTES,
      });
    }

    let style = SummaryStyle::from_tag(summary_type.as_deref());
    let prompt = build_prompt(style, &text);

    let generated = self.generator.generate(prompt).await.map_err(|e| {
      warn!(error = %e, %style, "summary generation failed");
      CondenseError::from(e)
    })?;

    let summary = generated.unwrap_or_else(|| {
      warn!(%style, "generation returned no text, using placeholder");
      NO_SUMMARY_PLACEHOLDER.to_string()
    });

    let record = SummaryRecord::new(text, summary_type, summary);

    let id = self.store.insert(record.clone()).await.map_err(|e| {
      error!(error = %e, summary_len = record.summary.len(), "failed to store summary record");
      CondenseError::from(e)
    })?;

    info!(
      id,
      %style,
      text_len = record.text.len(),
      summary_len = record.summary.len(),
      "summary stored"
    );

    Ok(record)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
