//! Persistence module: a namespaced key-value store.
//!
//! The store holds one JSON document per namespace and knows nothing about
//! the shapes inside; the repository is responsible for round-tripping its
//! own structures. The trait is injected so tests can substitute an
//! in-memory double.

mod repository;

pub use repository::*;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::errors::AppError;

/// Namespaced key-value persistence boundary.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the document stored under a namespace, `None` when unset.
    async fn read(&self, namespace: &str) -> Result<Option<Value>, AppError>;

    /// Replace the document stored under a namespace.
    async fn write(&self, namespace: &str, value: Value) -> Result<(), AppError>;
}

/// SQLite-backed store: one row per namespace.
pub struct SqliteStore {
    pool: SqlitePool,
}

/// Initialize the SQLite store and create its schema.
pub async fn init_store(db_path: &Path) -> Result<SqliteStore, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            namespace TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(SqliteStore { pool })
}

#[async_trait]
impl Store for SqliteStore {
    async fn read(&self, namespace: &str) -> Result<Option<Value>, AppError> {
        use sqlx::Row;

        let row = sqlx::query("SELECT value FROM kv WHERE namespace = ?")
            .bind(namespace)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.get("value");
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, namespace: &str, value: Value) -> Result<(), AppError> {
        let raw = serde_json::to_string(&value)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv (namespace, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(namespace) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(namespace)
        .bind(&raw)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// In-memory store double for unit tests.
#[cfg(test)]
pub struct MemoryStore {
    state: std::sync::Mutex<std::collections::HashMap<String, Value>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Store for MemoryStore {
    async fn read(&self, namespace: &str) -> Result<Option<Value>, AppError> {
        Ok(self.state.lock().unwrap().get(namespace).cloned())
    }

    async fn write(&self, namespace: &str, value: Value) -> Result<(), AppError> {
        self.state.lock().unwrap().insert(namespace.to_string(), value);
        Ok(())
    }
}
