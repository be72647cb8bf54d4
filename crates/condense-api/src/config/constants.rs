//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// ブラウザ拡張機能が接続するローカルホストのポート
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// 要約レコードを保存する SQLite データベースファイルのデフォルト
pub const DEFAULT_DATABASE_PATH: &str = "condense.sqlite3";

/// 生成APIのキー（必須）
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// バインドアドレスの上書き
pub const ENV_BIND_ADDR: &str = "CONDENSE_BIND_ADDR";

/// 生成APIのベースURLの上書き
pub const ENV_BASE_URL: &str = "CONDENSE_GEMINI_BASE_URL";

/// 生成モデルの上書き
pub const ENV_MODEL: &str = "CONDENSE_GEMINI_MODEL";

/// 上流APIタイムアウトの上書き（秒）
pub const ENV_TIMEOUT_SECS: &str = "CONDENSE_UPSTREAM_TIMEOUT_SECS";

/// データベースパスの上書き（`:memory:` でインメモリストア）
pub const ENV_DATABASE_PATH: &str = "CONDENSE_DATABASE_PATH";

/// コレクション（テーブル）名の上書き
pub const ENV_COLLECTION: &str = "CONDENSE_COLLECTION";
