//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// condense クレートのエラー型をインポート
use condense::errors::{CondenseError, ConfigError, GenerationError};

/// 生成APIが独自のメッセージを返さずに失敗した場合のメッセージ
pub const GENERIC_UPSTREAM_MESSAGE: &str = "Generation API error";

/// 想定外の失敗時に返すメッセージ
pub const GENERIC_SERVER_MESSAGE: &str = "Server error";

/// 要約は生成できたが保存できなかった場合のメッセージ
pub const STORAGE_FAILED_MESSAGE: &str = "Summary generated but could not be saved";

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// テキストが長すぎる
  TextTooLong,
  /// 生成APIが失敗ステータスを返した
  Upstream,
  /// 生成APIが時間内に応答しなかった
  UpstreamTimeout,
  /// 要約は生成済みだが保存できなかった
  Storage,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Upstream => "upstream_error",
      Self::UpstreamTimeout => "upstream_timeout",
      Self::Storage => "storage_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Upstream
      | Self::UpstreamTimeout
      | Self::Storage
      | Self::Internal
      | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("{0}")]
  InvalidInput(String),

  /// テキストが長すぎる
  #[error("Text is too long: {0} bytes (max: {1} bytes)")]
  TextTooLong(usize, usize),

  /// 生成APIが失敗ステータスを返した（メッセージがあれば保持）
  #[error("{}", .0.as_deref().unwrap_or(GENERIC_UPSTREAM_MESSAGE))]
  Upstream(Option<String>),

  /// 生成APIが設定したタイムアウト内に応答しなかった
  #[error("Generation API did not respond within {0}s")]
  UpstreamTimeout(u64),

  /// 要約は生成済みだが保存できなかった
  #[error("保存エラー: {0}")]
  Storage(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Upstream(_) => ApiErrorKind::Upstream,
      Self::UpstreamTimeout(_) => ApiErrorKind::UpstreamTimeout,
      Self::Storage(_) => ApiErrorKind::Storage,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 呼び出し元に返すメッセージ
  ///
  /// 保存・内部・設定エラーの詳細はログにのみ出力する。
  #[must_use]
  pub fn public_message(&self) -> String {
    match self {
      Self::Storage(_) => STORAGE_FAILED_MESSAGE.to_string(),
      Self::Internal(_) | Self::Config(_) => GENERIC_SERVER_MESSAGE.to_string(),
      _ => self.to_string(),
    }
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 生成APIエラーを作成
  #[must_use]
  pub fn upstream(message: Option<String>) -> Self {
    Self::Upstream(message)
  }

  /// 保存エラーを作成
  #[must_use]
  pub fn storage(message: impl Into<String>) -> Self {
    Self::Storage(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  code: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(code = self.code(), error = %self, "リクエスト処理に失敗しました");
    }

    let body = ErrorResponse {
      error: self.public_message(),
      code: self.code(),
    };

    (status, Json(body)).into_response()
  }
}

/// CondenseError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<CondenseError> for ApiError {
  fn from(err: CondenseError) -> Self {
    match err {
      CondenseError::InvalidInput { reason } => ApiError::invalid_input(reason),
      CondenseError::TextTooLong { actual, max } => ApiError::text_too_long(actual, max),
      CondenseError::Generation(GenerationError::Upstream { message, .. }) => {
        ApiError::upstream(message)
      }
      CondenseError::Generation(GenerationError::Timeout { timeout_secs }) => {
        ApiError::UpstreamTimeout(timeout_secs)
      }
      CondenseError::Generation(err) => ApiError::internal(err.to_string()),
      CondenseError::Storage(err) => ApiError::storage(err.to_string()),
      CondenseError::Config(err) => ApiError::from(err),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("不明なエラー: {err}")),
    }
  }
}

impl From<ConfigError> for ApiError {
  fn from(err: ConfigError) -> Self {
    ApiError::config(err.to_string())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;
  use condense::errors::StoreError;

  #[test]
  fn invalid_input_creation() {
    let err = ApiError::invalid_input("No text provided");
    assert_eq!(err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.public_message(), "No text provided");
  }

  #[test]
  fn text_too_long_creation() {
    let err = ApiError::text_too_long(100, 50);
    assert_eq!(err.kind(), ApiErrorKind::TextTooLong);
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(err.public_message().contains("100"));
    assert!(err.public_message().contains("50"));
  }

  #[test]
  fn upstream_message_is_verbatim() {
    let err = ApiError::upstream(Some("API key not valid.".to_string()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), "API key not valid.");
  }

  #[test]
  fn upstream_without_message_is_generic() {
    let err = ApiError::upstream(None);
    assert_eq!(err.public_message(), GENERIC_UPSTREAM_MESSAGE);
  }

  #[test]
  fn internal_details_are_hidden() {
    let err = ApiError::internal("connection reset by peer");
    assert_eq!(err.code(), "internal_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), GENERIC_SERVER_MESSAGE);
    assert!(err.to_string().contains("connection reset by peer"));
  }

  #[test]
  fn config_details_are_hidden() {
    let err = ApiError::config("bad value");
    assert_eq!(err.code(), "config_error");
    assert_eq!(err.public_message(), GENERIC_SERVER_MESSAGE);
  }

  #[test]
  fn from_condense_invalid_input() {
    let api_err: ApiError = CondenseError::InvalidInput {
      reason: "No text provided".to_string(),
    }
    .into();
    assert_eq!(api_err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn from_condense_upstream() {
    let api_err: ApiError = CondenseError::Generation(GenerationError::Upstream {
      status: 403,
      message: Some("Permission denied".to_string()),
    })
    .into();
    assert_eq!(api_err.kind(), ApiErrorKind::Upstream);
    assert_eq!(api_err.public_message(), "Permission denied");
  }

  #[test]
  fn from_condense_timeout() {
    let api_err: ApiError =
      CondenseError::Generation(GenerationError::Timeout { timeout_secs: 30 }).into();
    assert_eq!(api_err.kind(), ApiErrorKind::UpstreamTimeout);
    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn from_condense_decode_is_generic() {
    let api_err: ApiError =
      CondenseError::Generation(GenerationError::Decode("expected value".to_string())).into();
    assert_eq!(api_err.kind(), ApiErrorKind::Internal);
    assert_eq!(api_err.public_message(), GENERIC_SERVER_MESSAGE);
  }

  #[test]
  fn from_condense_storage() {
    let api_err: ApiError =
      CondenseError::Storage(StoreError::InvalidRecord("disk full".to_string())).into();
    assert_eq!(api_err.kind(), ApiErrorKind::Storage);
    assert_eq!(api_err.code(), "storage_error");
    assert_eq!(api_err.public_message(), STORAGE_FAILED_MESSAGE);
  }

  #[test]
  fn from_config_error() {
    let api_err: ApiError = ConfigError::MissingApiKey.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Config);
  }
}
