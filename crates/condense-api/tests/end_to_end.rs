//! End-to-end test
//!
//! Real `GeminiClient` and `SqliteSummaryStore`; the generative-language API is
//! a local axum server, the database a temporary file.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
  Json, Router,
  body::Body,
  extract::State,
  http::{Request, StatusCode},
  routing::post,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use condense::Summarizer;
use condense::config::{CondenseConfig, GenerationConfig, StorageConfig};
use condense::generation::GeminiClient;
use condense::store::{SqliteSummaryStore, SummaryStore};
use condense_api::{
  api::{AppState, create_router},
  config::Config,
  service::{CondenseApiService, CondenseApiServiceFull},
};

const ARTICLE: &str = "The sky is blue because of Rayleigh scattering.";
const SUMMARY: &str = "The sky appears blue due to Rayleigh scattering of sunlight.";

async fn fake_generate_content(
  State(calls): State<Arc<AtomicUsize>>,
  Json(body): Json<Value>,
) -> Json<Value> {
  calls.fetch_add(1, Ordering::SeqCst);
  let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
  assert!(prompt.ends_with(ARTICLE), "unexpected prompt: {prompt}");

  Json(json!({
    "candidates": [{ "content": { "parts": [{ "text": SUMMARY }], "role": "model" }, "finishReason": "STOP" }]
  }))
}

/// Starts the fake upstream and returns its base URL and call counter.
async fn spawn_upstream() -> (String, Arc<AtomicUsize>) {
  let calls = Arc::new(AtomicUsize::new(0));
  let app = Router::new()
    .route("/v1beta/models/{call}", post(fake_generate_content))
    .with_state(calls.clone());

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
  let addr = listener.local_addr().expect("upstream address");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("upstream crashed");
  });

  (format!("http://{addr}/v1beta"), calls)
}

async fn post_summarize(router: &Router, payload: &Value) -> (StatusCode, Value) {
  let response = router
    .clone()
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/summarize")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  let status = response.status();
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  (status, serde_json::from_slice(&body_bytes).expect("json body"))
}

#[tokio::test]
async fn summarize_relays_to_upstream_and_stores_transcript() {
  let (base_url, calls) = spawn_upstream().await;
  let temp_dir = tempfile::TempDir::new().expect("temp dir");

  let mut generation = GenerationConfig::with_api_key("e2e-key");
  generation.base_url = base_url;
  generation.timeout_secs = 5;
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    condense: CondenseConfig {
      generation,
      storage: StorageConfig::new(temp_dir.path().join("condense.sqlite3")),
    },
  };

  let client = GeminiClient::new(&config.condense.generation).expect("client");
  let store = Arc::new(SqliteSummaryStore::open(&config.condense.storage).await.expect("store"));
  let summarizer = Summarizer::new(Arc::new(client), store.clone());
  let service: Arc<dyn CondenseApiService> =
    Arc::new(CondenseApiServiceFull::from_summarizer(summarizer));
  let router = create_router(AppState::new(config, service));

  let payload = json!({ "text": ARTICLE, "summaryType": "brief" });

  // first request
  let (status, json) = post_summarize(&router, &payload).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json, json!({ "summary": SUMMARY }));
  assert_eq!(store.count().await.unwrap(), 1);

  let record = store.find(1).await.unwrap().expect("record 1 stored");
  assert_eq!(record.text, ARTICLE);
  assert_eq!(record.summary_type.as_deref(), Some("brief"));
  assert_eq!(record.summary, SUMMARY);

  // identical request: a second, independent record
  let (status, _) = post_summarize(&router, &payload).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(store.count().await.unwrap(), 2);
  assert_eq!(calls.load(Ordering::SeqCst), 2);

  // validation failure: no upstream call, no record
  let (status, json) = post_summarize(&router, &json!({ "summaryType": "brief" })).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json["error"], "No text provided");
  assert_eq!(calls.load(Ordering::SeqCst), 2);
  assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn service_new_opens_configured_store() {
  let (base_url, _calls) = spawn_upstream().await;
  let temp_dir = tempfile::TempDir::new().expect("temp dir");
  let database_path = temp_dir.path().join("opened.sqlite3");

  let mut generation = GenerationConfig::with_api_key("e2e-key");
  generation.base_url = base_url;
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    condense: CondenseConfig {
      generation,
      storage: StorageConfig::new(&database_path),
    },
  };

  let service = CondenseApiServiceFull::new(&config).await.expect("service");
  let router = create_router(AppState::new(config, Arc::new(service)));

  let (status, _) = post_summarize(&router, &json!({ "text": ARTICLE })).await;
  assert_eq!(status, StatusCode::OK);

  let store = SqliteSummaryStore::open(&StorageConfig::new(&database_path)).await.unwrap();
  assert_eq!(store.count().await.unwrap(), 1);
}
