//! # Slot Store
//!
//! The persisted key-value layout: one named slot per collection, each
//! holding the JSON of the whole collection.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SlotKey            value (JSON)                                        │
//! │  ───────────────    ─────────────────────────────────────────────       │
//! │  appSettings        { "appName": ..., "theme": "MODERN_BLUE", ... }     │
//! │  currentUser        { "id": ..., "role": "MEMBER", ... }  (optional)    │
//! │  users              [ {...}, {...} ]                                    │
//! │  categories         [ ... ]                                             │
//! │  stores             [ ... ]                                             │
//! │  storePosts         [ ... ]                                             │
//! │  comments           [ ... ]                                             │
//! │  reports            [ ... ]                                             │
//! │  actionLogs         [ ... ]                                             │
//! │  messages           [ ... ]                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two backends implement [`SlotStore`]: [`SlotRepository`](crate::SlotRepository)
//! (SQLite) and [`MemorySlots`] (a map, for tests and throwaway sessions).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::error::{DbError, DbResult};

// =============================================================================
// Slot Keys
// =============================================================================

/// Names of the persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKey {
    AppSettings,
    CurrentUser,
    Users,
    Categories,
    Stores,
    StorePosts,
    Comments,
    Reports,
    ActionLogs,
    Messages,
}

impl SlotKey {
    pub const ALL: [SlotKey; 10] = [
        SlotKey::AppSettings,
        SlotKey::CurrentUser,
        SlotKey::Users,
        SlotKey::Categories,
        SlotKey::Stores,
        SlotKey::StorePosts,
        SlotKey::Comments,
        SlotKey::Reports,
        SlotKey::ActionLogs,
        SlotKey::Messages,
    ];

    /// The key as stored.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SlotKey::AppSettings => "appSettings",
            SlotKey::CurrentUser => "currentUser",
            SlotKey::Users => "users",
            SlotKey::Categories => "categories",
            SlotKey::Stores => "stores",
            SlotKey::StorePosts => "storePosts",
            SlotKey::Comments => "comments",
            SlotKey::Reports => "reports",
            SlotKey::ActionLogs => "actionLogs",
            SlotKey::Messages => "messages",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SlotStore Trait
// =============================================================================

/// A named-slot key-value store holding JSON text.
///
/// Writes are full overwrites; there is no versioning and no transaction
/// spanning several slots.
#[allow(async_fn_in_trait)]
pub trait SlotStore {
    /// Returns the raw value of `key`, or `None` when the slot is empty.
    async fn read(&self, key: &str) -> DbResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> DbResult<()>;

    /// Empties the slot. Removing an empty slot is not an error.
    async fn remove(&self, key: &str) -> DbResult<()>;

    /// Keys of all non-empty slots, sorted.
    async fn keys(&self) -> DbResult<Vec<String>>;

    /// Reads and decodes a slot.
    ///
    /// An undecodable slot is an error; it is never silently replaced by a
    /// default.
    async fn load<T: DeserializeOwned>(&self, key: SlotKey) -> DbResult<Option<T>> {
        match self.read(key.as_str()).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| DbError::serialization(key.as_str(), e)),
            None => Ok(None),
        }
    }

    /// Encodes and writes a slot.
    async fn save<T: Serialize>(&self, key: SlotKey, value: &T) -> DbResult<()> {
        let raw =
            serde_json::to_string(value).map_err(|e| DbError::serialization(key.as_str(), e))?;
        trace!(slot = %key, bytes = raw.len(), "Saving slot");
        self.write(key.as_str(), &raw).await
    }
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Map-backed [`SlotStore`].
///
/// ## Usage
/// ```rust
/// use binaa_db::{MemorySlots, SlotKey};
///
/// let slots = MemorySlots::new().with_slot(SlotKey::Stores, "[]");
/// assert_eq!(slots.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills one slot with raw text (builder style, for tests).
    pub fn with_slot(self, key: SlotKey, raw: impl Into<String>) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.as_str().to_string(), raw.into());
        }
        self
    }

    /// Number of non-empty slots.
    pub fn len(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Synchronous peek at a slot.
    pub fn raw(&self, key: SlotKey) -> Option<String> {
        self.slots
            .lock()
            .ok()
            .and_then(|s| s.get(key.as_str()).cloned())
    }

    fn with_map<R>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> R) -> DbResult<R> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| DbError::Internal("slot map lock poisoned".to_string()))?;
        Ok(f(&mut slots))
    }
}

impl SlotStore for MemorySlots {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        self.with_map(|slots| slots.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        self.with_map(|slots| {
            slots.insert(key.to_string(), value.to_string());
        })
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        self.with_map(|slots| {
            slots.remove(key);
        })
    }

    async fn keys(&self) -> DbResult<Vec<String>> {
        self.with_map(|slots| slots.keys().cloned().collect())
    }
}

/// Shared references delegate, so one store can back several owners in tests.
impl<S: SlotStore> SlotStore for &S {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        (**self).write(key, value).await
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        (**self).remove(key).await
    }

    async fn keys(&self) -> DbResult<Vec<String>> {
        (**self).keys().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
