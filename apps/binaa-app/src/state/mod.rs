//! # State Module
//!
//! Application state for the Binaa shells.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐      boot       ┌─────────────────────────────────┐  │
//! │  │  AppConfig   │ ──db path────►  │  AppState<S: SlotStore>         │  │
//! │  │  (TOML+env)  │                 │                                 │  │
//! │  └──────────────┘                 │  settings, users, categories,   │  │
//! │                                   │  stores, posts, comments,       │  │
//! │  ┌──────────────┐   empty slots   │  reports, action logs,          │  │
//! │  │  seed        │ ──────────────► │  messages, current user,        │  │
//! │  │  defaults    │                 │  active theme, root style       │  │
//! │  └──────────────┘                 └───────────────┬─────────────────┘  │
//! │                                                   │ mirror() after     │
//! │                                                   ▼ every setter       │
//! │                                   ┌─────────────────────────────────┐  │
//! │                                   │  slots (SQLite or memory)       │  │
//! │                                   └─────────────────────────────────┘  │
//! │                                                                         │
//! │  OWNERSHIP: one AppState per shell, passed as &mut to commands.        │
//! │  No locks: there is a single mutator.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;
mod mirror;
pub mod seed;

pub use app::AppState;
pub use config::{AppConfig, ConfigError, ConfigResult, RegistrationPolicy, DEFAULT_LOG_FILTER};
