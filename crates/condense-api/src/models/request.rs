//! リクエストモデル定義

use serde::Deserialize;

use condense::SummarizeInput;

/// 要約リクエスト
///
/// `text` が欠けていてもデシリアライズは失敗させず、
/// `{"error": "No text provided"}` として応答できるよう Option で受ける。
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
  /// 要約対象のテキスト
  #[serde(default)]
  pub text: Option<String>,
  /// 要約スタイル: "brief" | "detailed" | "bullets" | それ以外
  #[serde(default, rename = "summaryType")]
  pub summary_type: Option<String>,
}

impl From<SummarizeRequest> for SummarizeInput {
  fn from(request: SummarizeRequest) -> Self {
    SummarizeInput {
      text: request.text,
      summary_type: request.summary_type,
    }
  }
}
