//! Client for the `generateContent` endpoint of the generative-language API.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::BoxFuture;
use crate::config::GenerationConfig;
use crate::errors::{GenerationError, GenerationResult};

/// Common interface for summary generation
///
/// This trait allows swapping the production client (`GeminiClient`) with
/// test stubs.
pub trait SummaryGenerator: Send + Sync {
  /// Sends `prompt` upstream and returns the generated text.
  ///
  /// `Ok(None)` means the upstream succeeded but its payload carried no text.
  ///
  /// # Errors
  /// - Upstream non-success status
  /// - Timeout or transport failure
  /// - Undecodable success payload
  fn generate(&self, prompt: String) -> BoxFuture<'_, GenerationResult<Option<String>>>;
}

// ===== Wire format =====

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
  contents: Vec<RequestContent<'a>>,
  #[serde(rename = "generationConfig")]
  generation_config: GenerationParams,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
  parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
  text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationParams {
  temperature: f32,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
  #[serde(default)]
  error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
  #[serde(default)]
  message: Option<String>,
}

/// JSON pointer of the generated text in a `generateContent` payload.
const CANDIDATE_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// `candidates[0].content.parts[0].text`.
///
/// Any missing or wrong-typed link, or an empty string, yields `None`.
fn first_candidate_text(payload: &Value) -> Option<String> {
  payload
    .pointer(CANDIDATE_TEXT_POINTER)
    .and_then(Value::as_str)
    .filter(|text| !text.is_empty())
    .map(str::to_string)
}

/// Extracts `error.message` from an upstream error body, if any.
fn upstream_error_message(body: &[u8]) -> Option<String> {
  serde_json::from_slice::<UpstreamErrorBody>(body)
    .ok()?
    .error?
    .message
    .filter(|message| !message.is_empty())
}

/// Generative-language API client.
///
/// Holds one pooled `reqwest::Client`; cloning is cheap.
#[derive(Clone)]
pub struct GeminiClient {
  http: reqwest::Client,
  endpoint: String,
  api_key: String,
  temperature: f32,
  timeout_secs: u64,
}

impl GeminiClient {
  /// Builds the client.
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be constructed
  /// (e.g. TLS backend initialization fails).
  pub fn new(config: &GenerationConfig) -> GenerationResult<Self> {
    let http = reqwest::Client::builder()
      .timeout(config.timeout())
      .build()
      .map_err(|e| GenerationError::Transport(Arc::new(e)))?;

    Ok(Self {
      http,
      endpoint: config.endpoint(),
      api_key: config.api_key.clone(),
      temperature: config.temperature,
      timeout_secs: config.timeout_secs,
    })
  }

  /// Returns the endpoint requests are sent to (without the key).
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// Sends one `generateContent` request.
  ///
  /// # Errors
  /// See [`SummaryGenerator::generate`].
  pub async fn generate_content(&self, prompt: &str) -> GenerationResult<Option<String>> {
    let body = GenerateContentRequest {
      contents: vec![RequestContent {
        parts: vec![RequestPart { text: prompt }],
      }],
      generation_config: GenerationParams {
        temperature: self.temperature,
      },
    };

    debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "sending generation request");
    let start = Instant::now();

    let response = self
      .http
      .post(&self.endpoint)
      .query(&[("key", self.api_key.as_str())])
      .json(&body)
      .send()
      .await
      .map_err(|e| self.classify(e))?;

    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if !status.is_success() {
      let message = upstream_error_message(&bytes);
      warn!(
        status = status.as_u16(),
        elapsed_ms,
        message = message.as_deref().unwrap_or(""),
        "generation API returned an error status"
      );
      return Err(GenerationError::Upstream {
        status: status.as_u16(),
        message,
      });
    }

    let payload: Value =
      serde_json::from_slice(&bytes).map_err(|e| GenerationError::Decode(e.to_string()))?;
    let text = first_candidate_text(&payload);

    info!(
      status = status.as_u16(),
      elapsed_ms,
      has_text = text.is_some(),
      "generation request completed"
    );

    Ok(text)
  }

  fn classify(&self, err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
      GenerationError::Timeout {
        timeout_secs: self.timeout_secs,
      }
    } else {
      // The request URL carries the key; strip it before the error is logged anywhere.
      GenerationError::Transport(Arc::new(err.without_url()))
    }
  }
}

impl std::fmt::Debug for GeminiClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GeminiClient")
      .field("endpoint", &self.endpoint)
      .field("temperature", &self.temperature)
      .field("timeout_secs", &self.timeout_secs)
      .finish_non_exhaustive()
  }
}

/// Production implementation of trait `SummaryGenerator`
impl SummaryGenerator for GeminiClient {
  fn generate(&self, prompt: String) -> BoxFuture<'_, GenerationResult<Option<String>>> {
    Box::pin(async move { self.generate_content(&prompt).await })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_body_matches_wire_shape() {
    let body = GenerateContentRequest {
      contents: vec![RequestContent {
        parts: vec![RequestPart { text: "hello" }],
      }],
      generation_config: GenerationParams { temperature: 0.2 },
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.2).abs() < 1e-6);
  }

  #[test]
  fn first_text_is_extracted() {
    let json = r#"{"candidates":[{"content":{"parts":[{"text":"first"},{"text":"second"}]}}]}"#;
    let payload: Value = serde_json::from_str(json).unwrap();
    assert_eq!(first_candidate_text(&payload).as_deref(), Some("first"));
  }

  #[test]
  fn missing_links_yield_none() {
    for json in [
      r#"{}"#,
      r#"{"candidates":null}"#,
      r#"{"candidates":[]}"#,
      r#"{"candidates":[{}]}"#,
      r#"{"candidates":[{"content":{}}]}"#,
      r#"{"candidates":[{"content":{"parts":[]}}]}"#,
      r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#,
      r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
      // wrong-typed links
      r#"{"candidates":{}}"#,
      r#"{"candidates":[{"content":"x"}]}"#,
      r#"{"candidates":[{"content":{"parts":[{"text":7}]}}]}"#,
      r#"[]"#,
    ] {
      let payload: Value = serde_json::from_str(json).unwrap();
      assert!(first_candidate_text(&payload).is_none(), "expected None for {json}");
    }
  }

  #[test]
  fn upstream_message_is_extracted() {
    let body = br#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
    assert_eq!(upstream_error_message(body).as_deref(), Some("API key not valid."));
  }

  #[test]
  fn upstream_message_absent() {
    assert!(upstream_error_message(b"<html>bad gateway</html>").is_none());
    assert!(upstream_error_message(br#"{"error":{}}"#).is_none());
    assert!(upstream_error_message(br#"{"error":{"message":""}}"#).is_none());
  }

  #[test]
  fn debug_output_hides_api_key() {
    let client = GeminiClient::new(&GenerationConfig::with_api_key("hidden-key")).unwrap();
    assert!(!format!("{client:?}").contains("hidden-key"));
  }
}
