//! Append-only store of summary records.

use chrono::{TimeZone, Utc};
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;
use tracing::{debug, info};

use crate::BoxFuture;
use crate::config::StorageConfig;
use crate::errors::{StoreError, StoreResult};
use crate::models::SummaryRecord;

/// Summary store trait.
///
/// Records are only ever appended; there is no update or delete.
pub trait SummaryStore: Send + Sync {
  /// Appends a record and returns its store id.
  ///
  /// # Errors
  /// Returns an error if storage access fails.
  fn insert(&self, record: SummaryRecord) -> BoxFuture<'_, StoreResult<i64>>;

  /// Returns the number of stored records.
  ///
  /// # Errors
  /// Returns an error if storage access fails.
  fn count(&self) -> BoxFuture<'_, StoreResult<u64>>;
}

/// `SQLite` implementation of the summary store.
///
/// One table per collection:
/// ```text
/// id           INTEGER PRIMARY KEY AUTOINCREMENT
/// text         TEXT NOT NULL
/// summary_type TEXT NULL
/// summary      TEXT NOT NULL
/// created_at   INTEGER NOT NULL   -- unix millis
/// ```
pub struct SqliteSummaryStore {
  conn: Connection,
  table: String,
}

impl SqliteSummaryStore {
  /// Opens the database and creates the collection table if absent.
  ///
  /// The collection name is expected to have passed `CondenseConfig::validate`.
  ///
  /// # Errors
  /// Returns an error if the database cannot be opened or the table cannot be created.
  pub async fn open(config: &StorageConfig) -> StoreResult<Self> {
    let conn = if config.is_in_memory() {
      Connection::open_in_memory().await?
    } else {
      Connection::open(&config.database_path).await?
    };
    let table = config.collection.clone();
    let table_name = table.clone();

    conn
      .call(move |conn| {
        conn.execute_batch(&format!(
          "CREATE TABLE IF NOT EXISTS {table_name} (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              text TEXT NOT NULL,
              summary_type TEXT,
              summary TEXT NOT NULL,
              created_at INTEGER NOT NULL
          )"
        ))?;
        Ok(())
      })
      .await?;

    info!(path = %config.database_path.display(), collection = %table, "summary store opened");

    Ok(Self { conn, table })
  }

  /// Reads one record back by id.
  ///
  /// The relay itself never reads records; this exists for inspection and tests.
  ///
  /// # Errors
  /// Returns an error if storage access fails or the stored timestamp is invalid.
  pub async fn find(&self, id: i64) -> StoreResult<Option<SummaryRecord>> {
    let table = self.table.clone();
    let row = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(
            &format!("SELECT text, summary_type, summary, created_at FROM {table} WHERE id = ?1"),
            rusqlite::params![id],
            |row| {
              let text: String = row.get(0)?;
              let summary_type: Option<String> = row.get(1)?;
              let summary: String = row.get(2)?;
              let created_at_ms: i64 = row.get(3)?;
              Ok((text, summary_type, summary, created_at_ms))
            },
          )
          .optional()?;
        Ok(row)
      })
      .await?;

    let Some((text, summary_type, summary, created_at_ms)) = row else {
      return Ok(None);
    };

    let created_at = Utc
      .timestamp_millis_opt(created_at_ms)
      .single()
      .ok_or_else(|| StoreError::InvalidRecord("invalid created_at timestamp".to_string()))?;

    Ok(Some(SummaryRecord {
      text,
      summary_type,
      summary,
      created_at,
    }))
  }
}

impl SummaryStore for SqliteSummaryStore {
  fn insert(&self, record: SummaryRecord) -> BoxFuture<'_, StoreResult<i64>> {
    Box::pin(async move {
      let table = self.table.clone();
      let created_at = record.created_at.timestamp_millis();
      let SummaryRecord {
        text,
        summary_type,
        summary,
        ..
      } = record;

      let id = self
        .conn
        .call(move |conn| {
          conn.execute(
            &format!(
              "INSERT INTO {table} (text, summary_type, summary, created_at)
               VALUES (?1, ?2, ?3, ?4)"
            ),
            rusqlite::params![text, summary_type, summary, created_at],
          )?;
          Ok(conn.last_insert_rowid())
        })
        .await?;

      debug!(id, "summary record inserted");
      Ok(id)
    })
  }

  fn count(&self) -> BoxFuture<'_, StoreResult<u64>> {
    Box::pin(async move {
      let table = self.table.clone();
      let count = self
        .conn
        .call(move |conn| {
          let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
          Ok(count)
        })
        .await?;

      u64::try_from(count).map_err(|_| StoreError::InvalidRecord("negative row count".to_string()))
    })
  }
}
