//! # Slot Repository
//!
//! SQLite backend of [`SlotStore`]: one row per slot in the `slots` table.
//!
//! ```text
//!   write("stores", json)
//!        │
//!        ▼
//!   INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
//!   ON CONFLICT(key) DO UPDATE SET value = excluded.value, ...
//! ```
//!
//! Every write is a single autocommitted statement. A mirror pass that
//! writes ten slots is ten transactions; a crash in between leaves a mix of
//! old and new slots.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::slots::SlotStore;

/// Repository for the `slots` table.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Returns `(key, updated_at)` for every slot, for diagnostics.
    pub async fn list_updated(&self) -> DbResult<Vec<(String, String)>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, updated_at FROM slots ORDER BY key")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Empties every slot.
    pub async fn clear(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM slots").execute(&self.pool).await?;
        debug!(rows = result.rows_affected(), "Cleared all slots");
        Ok(result.rows_affected())
    }
}

impl SlotStore for SlotRepository {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM slots WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(slot = %key, bytes = value.len(), "Slot written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM slots WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(slot = %key, removed = result.rows_affected(), "Slot removed");
        Ok(())
    }

    async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM slots ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::SlotKey;
    use crate::{Database, DbConfig};
    use binaa_core::AppSettings;

    async fn repo() -> SlotRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().slots()
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let slots = repo().await;

        assert_eq!(slots.read("stores").await.unwrap(), None);
        slots.write("stores", "[1]").await.unwrap();
        assert_eq!(slots.read("stores").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let slots = repo().await;

        slots.write("users", "[]").await.unwrap();
        slots.write("users", "[{}]").await.unwrap();

        assert_eq!(slots.read("users").await.unwrap().as_deref(), Some("[{}]"));
        assert_eq!(slots.keys().await.unwrap(), ["users"]);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let slots = repo().await;
        slots.write("currentUser", "{}").await.unwrap();
        slots.write("stores", "[]").await.unwrap();

        slots.remove("currentUser").await.unwrap();
        slots.remove("currentUser").await.unwrap();
        assert_eq!(slots.keys().await.unwrap(), ["stores"]);

        assert_eq!(slots.clear().await.unwrap(), 1);
        assert!(slots.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_typed_round_trip_through_sqlite() {
        let slots = repo().await;
        let settings = AppSettings {
            is_dark_mode: true,
            ..AppSettings::default()
        };

        slots.save(SlotKey::AppSettings, &settings).await.unwrap();
        let loaded: AppSettings = slots.load(SlotKey::AppSettings).await.unwrap().unwrap();
        assert_eq!(loaded, settings);

        let updated = slots.list_updated().await.unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, "appSettings");
    }

    #[tokio::test]
    async fn test_file_slots_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binaa.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.slots().write("categories", "[\"kept\"]").await.unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(
            db.slots().read("categories").await.unwrap().as_deref(),
            Some("[\"kept\"]")
        );
    }
}
