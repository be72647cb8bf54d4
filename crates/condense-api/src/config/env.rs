//! Config loading from environment variables

use condense::config::{
  CondenseConfig, DEFAULT_COLLECTION, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
  DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS, GenerationConfig, StorageConfig,
};
use condense::errors::ConfigError;

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH, ENV_API_KEY, ENV_BASE_URL, ENV_BIND_ADDR,
  ENV_COLLECTION, ENV_DATABASE_PATH, ENV_MODEL, ENV_TIMEOUT_SECS,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:3000")
  pub bind_addr: String,
  /// Summarization pipeline configuration
  pub condense: CondenseConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// `GEMINI_API_KEY` is required; there is no built-in fallback key.
  ///
  /// # Errors
  /// Returns an error if the key is missing or a value is invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Loads configuration through `lookup` (`std::env::var` in production)
  ///
  /// Blank values are treated as unset.
  ///
  /// # Errors
  /// Returns an error if the key is missing or a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;

    let timeout_secs = match get(ENV_TIMEOUT_SECS) {
      Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
        name: ENV_TIMEOUT_SECS.to_string(),
        reason: format!("{raw:?}: {e}"),
      })?,
      None => DEFAULT_TIMEOUT_SECS,
    };

    let generation = GenerationConfig {
      api_key,
      base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
      model: get(ENV_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
      temperature: DEFAULT_TEMPERATURE,
      timeout_secs,
    };

    let storage = StorageConfig {
      database_path: get(ENV_DATABASE_PATH)
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
        .into(),
      collection: get(ENV_COLLECTION).unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
    };

    let condense = CondenseConfig {
      generation,
      storage,
    };
    condense.validate().map_err(ApiError::from)?;

    Ok(Self {
      bind_addr,
      condense,
    })
  }
}
