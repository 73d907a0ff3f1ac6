//! # Repository Module
//!
//! Database repository implementations for the Binaa directory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Persistence mirror (binaa-app)                                        │
//! │       │                                                                 │
//! │       │  db.slots().save(SlotKey::Stores, &stores)                     │
//! │       ▼                                                                 │
//! │  SlotRepository                                                        │
//! │  ├── read(&self, key)                                                  │
//! │  ├── write(&self, key, value)                                          │
//! │  ├── remove(&self, key)                                                │
//! │  └── keys(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (slots table)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SlotRepository`](slot::SlotRepository) - Key/value slot storage

pub mod slot;
