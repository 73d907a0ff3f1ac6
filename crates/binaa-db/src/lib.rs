//! # binaa-db: Slot Storage for the Binaa Directory
//!
//! This crate provides persistence for the Binaa directory. Every collection
//! of the in-memory state is stored as one JSON value in a named slot, in
//! SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Binaa Data Flow                                  │
//! │                                                                         │
//! │  AppState mutation (rate_store, submit_post, ...)                      │
//! │       │                                                                 │
//! │       ▼  persistence mirror                                            │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     binaa-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │   SlotStore   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (slots.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ SlotRepository│    │ 001_create_  │  │   │
//! │  │   │               │    │ MemorySlots   │    │   slots.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <platform data dir>/binaa.db                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`slots`] - The [`SlotStore`] trait, slot names and the in-memory backend
//! - [`repository`] - SQLite repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use binaa_db::{Database, DbConfig, SlotKey, SlotStore};
//!
//! let db = Database::new(DbConfig::new("path/to/binaa.db")).await?;
//! let stores: Option<Vec<Store>> = db.slots().load(SlotKey::Stores).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod slots;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::slot::SlotRepository;
pub use slots::{MemorySlots, SlotKey, SlotStore};
