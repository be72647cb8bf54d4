//! HTTPハンドラー定義

use std::time::Instant;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{SummarizeRequest, SummarizeResponse};

use super::state::AppState;

/// POST /summarize エンドポイント
///
/// 指定されたスタイルでテキストを要約し、結果を記録する。
///
/// # Request Body
/// ```json
/// { "text": "要約対象のテキスト", "summaryType": "brief" }
/// ```
///
/// # Response
/// - 200 OK: `{ "summary": "..." }`
/// - 400 Bad Request: 入力エラー（テキストなし・空、テキスト長超過、不正なボディ）
/// - 500 Internal Server Error: 生成APIエラー、保存エラー、その他の内部エラー
///
/// エラー時のボディは `{ "error": "...", "code": "..." }`。
pub async fn post_summarize(
  State(state): State<AppState>,
  payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
  // ボディの解析失敗は 400 として返す
  let Json(request) = payload.map_err(|rejection| {
    debug!(error = %rejection, "リクエストボディを解析できませんでした");
    ApiError::invalid_input(rejection.body_text())
  })?;

  debug!(
    text_len = request.text.as_ref().map_or(0, String::len),
    summary_type = request.summary_type.as_deref().unwrap_or(""),
    "要約リクエストを受信"
  );

  let start = Instant::now();
  let response = state.service.summarize(request).await?;

  info!(
    summary_len = response.summary.len(),
    elapsed_ms = start.elapsed().as_millis() as u64,
    "要約リクエストが完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働中であることを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
