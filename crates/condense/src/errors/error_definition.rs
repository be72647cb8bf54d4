//! Error definitions

use std::sync::Arc;

use thiserror::Error;

/// Configuration (CondenseConfig) errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// generation.api_key is empty
  #[error("generation.api_key must be set (GEMINI_API_KEY)")]
  MissingApiKey,

  /// generation.model is empty
  #[error("generation.model must not be empty")]
  EmptyModel,

  /// generation.base_url is not an http(s) URL
  #[error("generation.base_url must start with http:// or https://: actual={actual}")]
  InvalidBaseUrl {
    /// Value that was supplied
    actual: String,
  },

  /// generation.temperature is out of range
  #[error("generation.temperature must be within {min}..={max}: actual={actual}")]
  InvalidTemperature {
    /// Lower bound
    min: String,
    /// Upper bound
    max: String,
    /// Value that was supplied
    actual: String,
  },

  /// generation.timeout is zero
  #[error("generation.timeout must be at least 1 second")]
  ZeroTimeout,

  /// storage.collection is not a plain identifier
  #[error("storage.collection must be a non-empty [A-Za-z0-9_] identifier: actual={actual:?}")]
  InvalidCollectionName {
    /// Value that was supplied
    actual: String,
  },

  /// An environment variable could not be parsed
  #[error("environment variable {name} is invalid: {reason}")]
  InvalidEnvVar {
    /// Variable name
    name: String,
    /// Why it was rejected
    reason: String,
  },
}

/// Generative-language API errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum GenerationError {
  /// The upstream answered with a non-success status
  #[error("generation API returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
  Upstream {
    /// HTTP status code reported by the upstream
    status: u16,
    /// `error.message` from the upstream payload, when present
    message: Option<String>,
  },

  /// The configured request timeout elapsed
  #[error("generation API did not answer within {timeout_secs}s")]
  Timeout {
    /// Configured timeout in seconds
    timeout_secs: u64,
  },

  /// Connection or protocol failure before a response arrived
  #[error("generation API request failed: {0}")]
  Transport(Arc<reqwest::Error>),

  /// A success response whose body could not be decoded
  #[error("generation API response could not be decoded: {0}")]
  Decode(String),
}

/// Summary store errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum StoreError {
  /// SQLite failure
  #[error("sqlite error: {0}")]
  Sqlite(Arc<tokio_rusqlite::Error>),

  /// A stored row could not be mapped back to a record
  #[error("invalid stored record: {0}")]
  InvalidRecord(String),
}

impl From<tokio_rusqlite::Error> for StoreError {
  fn from(err: tokio_rusqlite::Error) -> Self {
    Self::Sqlite(Arc::new(err))
  }
}

/// Umbrella error
/// Public APIs of this crate return this error
/// Use as `CondenseResult<T>` = `Result<T, CondenseError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CondenseError {
  /// Request input is invalid
  #[error("{reason}")]
  InvalidInput {
    /// Reason shown to the caller
    reason: String,
  },

  /// Input text exceeds the accepted size
  #[error("text is too long: {actual} bytes (max: {max} bytes)")]
  TextTooLong {
    /// Actual size in bytes
    actual: usize,
    /// Maximum size in bytes
    max: usize,
  },

  /// Generation failed; nothing was stored
  #[error(transparent)]
  Generation(#[from] GenerationError),

  /// Generation succeeded but the record could not be stored
  #[error("summary generated but not stored: {0}")]
  Storage(#[from] StoreError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard result type of the generation client
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Standard result type of the summary store
pub type StoreResult<T> = Result<T, StoreError>;

/// Standard result type of the condense crate
pub type CondenseResult<T> = Result<T, CondenseError>;
