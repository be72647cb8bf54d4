// crates/condense/src/config.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::ConfigError;

/// Default generative-language API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Low temperature to favor deterministic, less creative output.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default collection (table) holding summary records.
pub const DEFAULT_COLLECTION: &str = "summaries";

/// Maximum accepted input text size (bytes).
pub const MAX_TEXT_BYTES: usize = 1_000_000;

/// Path value that selects an in-memory SQLite database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

const MIN_TEMPERATURE: f32 = 0.0;
const MAX_TEMPERATURE: f32 = 2.0;

/// Top-level configuration for condense.
#[derive(Debug, Clone)]
pub struct CondenseConfig {
  /// [generation] section
  pub generation: GenerationConfig,
  /// [storage] section
  pub storage: StorageConfig,
}

/// [generation] section configuration.
#[derive(Clone)]
pub struct GenerationConfig {
  /// API key passed as the `key` query parameter
  pub api_key: String,
  /// API base URL (e.g. "https://generativelanguage.googleapis.com/v1beta")
  pub base_url: String,
  /// Model name (e.g. "gemini-1.5-flash")
  pub model: String,
  /// Sampling temperature
  pub temperature: f32,
  /// Upstream request timeout (seconds)
  pub timeout_secs: u64,
}

impl GenerationConfig {
  /// Creates a configuration with defaults for everything but the key.
  pub fn with_api_key(api_key: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
      model: DEFAULT_GEMINI_MODEL.to_string(),
      temperature: DEFAULT_TEMPERATURE,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Returns the upstream request timeout.
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  /// Returns the `generateContent` endpoint for the configured model.
  pub fn endpoint(&self) -> String {
    format!(
      "{}/models/{}:generateContent",
      self.base_url.trim_end_matches('/'),
      self.model
    )
  }
}

// The key must never reach logs, so Debug is written by hand.
impl std::fmt::Debug for GenerationConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GenerationConfig")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("temperature", &self.temperature)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

/// [storage] section configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
  /// SQLite database file, or `:memory:`
  pub database_path: PathBuf,
  /// Table name holding the records
  pub collection: String,
}

impl StorageConfig {
  /// Storage at `database_path` using the default collection.
  pub fn new(database_path: impl Into<PathBuf>) -> Self {
    Self {
      database_path: database_path.into(),
      collection: DEFAULT_COLLECTION.to_string(),
    }
  }

  /// In-memory storage (lost on shutdown).
  pub fn in_memory() -> Self {
    Self::new(IN_MEMORY_DATABASE)
  }

  /// Returns whether the in-memory database is selected.
  pub fn is_in_memory(&self) -> bool {
    self.database_path == Path::new(IN_MEMORY_DATABASE)
  }
}

/// Returns whether `name` can be interpolated into SQL as a table name.
fn is_valid_collection_name(name: &str) -> bool {
  !name.is_empty()
    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    && !name.starts_with(|c: char| c.is_ascii_digit())
}

impl CondenseConfig {
  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `generation.api_key` is not blank
  /// - `generation.model` is not blank
  /// - `generation.base_url` is an http(s) URL
  /// - `generation.temperature` is within 0.0..=2.0
  /// - `generation.timeout_secs` >= 1
  /// - `storage.collection` is a plain identifier
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let generation = &self.generation;

    if generation.api_key.trim().is_empty() {
      return Err(ConfigError::MissingApiKey);
    }

    if generation.model.trim().is_empty() {
      return Err(ConfigError::EmptyModel);
    }

    if !(generation.base_url.starts_with("http://") || generation.base_url.starts_with("https://"))
    {
      return Err(ConfigError::InvalidBaseUrl {
        actual: generation.base_url.clone(),
      });
    }

    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&generation.temperature) {
      return Err(ConfigError::InvalidTemperature {
        min: MIN_TEMPERATURE.to_string(),
        max: MAX_TEMPERATURE.to_string(),
        actual: generation.temperature.to_string(),
      });
    }

    if generation.timeout_secs == 0 {
      return Err(ConfigError::ZeroTimeout);
    }

    if !is_valid_collection_name(&self.storage.collection) {
      return Err(ConfigError::InvalidCollectionName {
        actual: self.storage.collection.clone(),
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
