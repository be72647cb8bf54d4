//! Summarization service used by the HTTP handlers

use condense::{BoxFuture, Summarizer};

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{SummarizeRequest, SummarizeResponse};

/// Common interface for the summarization service
///
/// This trait allows swapping the production implementation
/// (`CondenseApiServiceFull`) with test stubs.
pub trait CondenseApiService: Send + Sync {
  /// Summarizes the request text and records the transcript
  ///
  /// # Errors
  /// - Input error (missing or empty text, length exceeded)
  /// - Upstream error
  /// - Storage error
  fn summarize(&self, request: SummarizeRequest) -> BoxFuture<'_, Result<SummarizeResponse>>;
}

/// Summarization service
///
/// Thin adapter from the API models onto the `condense::Summarizer` pipeline.
#[derive(Clone)]
pub struct CondenseApiServiceFull {
  summarizer: Summarizer,
}

impl CondenseApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (generation API and storage)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the store cannot be opened
  pub async fn new(config: &Config) -> Result<Self> {
    let summarizer = Summarizer::init(&config.condense).await.map_err(ApiError::from)?;
    Ok(Self::from_summarizer(summarizer))
  }

  /// Wraps an already built pipeline
  #[must_use]
  pub fn from_summarizer(summarizer: Summarizer) -> Self {
    Self { summarizer }
  }

  /// Summarizes the request text and records the transcript
  ///
  /// # Errors
  /// See [`CondenseApiService::summarize`]
  pub async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse> {
    let record = self.summarizer.summarize(request.into()).await?;
    Ok(record.into())
  }
}

/// Production implementation of trait `CondenseApiService`
impl CondenseApiService for CondenseApiServiceFull {
  fn summarize(&self, request: SummarizeRequest) -> BoxFuture<'_, Result<SummarizeResponse>> {
    // Explicitly call the inherent method; `self.summarize(...)` would recurse.
    Box::pin(CondenseApiServiceFull::summarize(self, request))
  }
}
