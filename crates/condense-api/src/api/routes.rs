//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_summarize};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// クロスオリジンリクエストは全オリジンから許可する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

  Router::new()
    .route("/summarize", post(post_summarize))
    .route("/health", get(health_check))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// Ctrl-C で新規接続の受付を止め、処理中のリクエストを完了させてから終了する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました {addr}: {e}")))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  tracing::info!("サーバーを停止しました");
  Ok(())
}

/// Ctrl-C を待機する
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "Ctrl-C を監視できません。プロセス終了まで稼働を続けます");
    std::future::pending::<()>().await;
  }
  tracing::info!("シャットダウンシグナルを受信");
}
