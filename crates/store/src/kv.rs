// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The local key-value store
//!

use crate::{StoreError, setup_database_at_path, setup_in_memory_database};
use async_trait::async_trait;
use log::trace;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

/// Implementing types hold string values under string keys
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under the key (if any)
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store the value under the key (replacing any existing value)
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the key, returning whether it was present
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;
}

/// A store backed by the `key_value` table of an SQLite database
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating and migrating if needed) the database file
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(setup_database_at_path(path).await?))
    }

    /// A store that lives only as long as the process
    pub async fn in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(setup_in_memory_database().await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        trace!("Getting '{key}'");
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM key_value WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        trace!("Setting '{key}' ({} bytes)", value.len());
        sqlx::query(
            r#"
                INSERT INTO key_value (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        trace!("Removing '{key}'");
        let result = sqlx::query("DELETE FROM key_value WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// A store that only holds values in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.values.write().await.remove(key).is_some())
    }
}
