//! condense-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use condense_api::ApiError;
use condense_api::api::AppState;
use condense_api::api::run_server;
use condense_api::config::Config;
use condense_api::service::CondenseApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未指定時は info）
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    model = %config.condense.generation.model,
    database = %config.condense.storage.database_path.display(),
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(CondenseApiServiceFull::new(&config).await?);
  tracing::info!("要約サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
