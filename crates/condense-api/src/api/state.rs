//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::CondenseApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Summarization Service
  ///
  /// - Production: `Arc::new(CondenseApiServiceFull::new(&config).await?)`
  /// - Test: `Arc::new(StubCondenseApiService)`
  pub service: Arc<dyn CondenseApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn CondenseApiService>) -> Self {
    Self { config, service }
  }
}
