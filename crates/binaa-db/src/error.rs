//! # Storage Error Types
//!
//! Error types for slot storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error / serde_json::Error / MigrateError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds the slot key and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in binaa-app) ← Serialized for the rendering layer          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Slot storage errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (missing folder, permissions)
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A slot value could not be encoded or decoded.
    ///
    /// ## When This Occurs
    /// - A slot was written by an incompatible build and no longer matches
    ///   the record shapes
    /// - The slot row was edited by hand
    #[error("Slot '{key}' is unreadable: {reason}")]
    Serialization { key: String, reason: String },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a Serialization error for the given slot.
    pub fn serialization(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        DbError::Serialization {
            key: key.into(),
            reason: err.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Serde failures outside a known slot. Prefer [`DbError::serialization`]
/// when the key is at hand.
impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::serialization("unknown", err)
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_names_slot() {
        let err = DbError::serialization("stores", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Slot 'stores' is unreadable: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: DbError = serde_err.into();
        assert!(matches!(err, DbError::Serialization { .. }));
    }
}
