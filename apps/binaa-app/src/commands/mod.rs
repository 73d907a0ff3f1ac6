//! # Commands Module
//!
//! Every user action of the directory, as plain async functions over
//! [`AppState`]. Shells (the CLI, a windowed front end, tests) call these and
//! serialize the results.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (shared guards)
//! ├── auth.rs      ◄─── Register, login, logout, profile
//! ├── store.rs     ◄─── Store CRUD and ratings
//! ├── category.rs  ◄─── Category CRUD
//! ├── post.rs      ◄─── Store posts and moderation
//! ├── comment.rs   ◄─── Comments under posts
//! ├── report.rs    ◄─── Reports and resolution
//! ├── message.rs   ◄─── Internal messages
//! ├── admin.rs     ◄─── Member moderation, action log
//! ├── settings.rs  ◄─── Theme, dark mode, notifications, identity
//! └── search.rs    ◄─── Read-only queries over the current state
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  async fn rate_store(state: &mut AppState<S>, store_id, value)          │
//! │         │                                                               │
//! │         ├── guard: session / staff role      ──► ApiError FORBIDDEN     │
//! │         ├── parse: form ──► draft            ──► ApiError VALIDATION    │
//! │         ├── build replacement collection                                │
//! │         └── state.set_stores(next).await?    ──► mirror                 │
//! │                                                                         │
//! │  Returns ApiResult<T>; T serializes to camelCase JSON.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod auth;
pub mod category;
pub mod comment;
pub mod message;
pub mod post;
pub mod report;
pub mod search;
pub mod settings;
pub mod store;

use binaa_core::{CoreError, User};
use binaa_db::SlotStore;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

/// Answer to the "are you sure?" prompt in front of destructive actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        self == Confirmation::Confirmed
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Cancelled
        }
    }
}

/// Returns the signed-in user or `UNAUTHENTICATED`.
pub(crate) fn require_session<S: SlotStore>(state: &AppState<S>, action: &str) -> ApiResult<User> {
    state
        .current_user()
        .cloned()
        .ok_or_else(|| CoreError::not_authenticated(action).into())
}

/// Returns the signed-in admin or super-admin, or `FORBIDDEN`.
pub(crate) fn require_staff<S: SlotStore>(state: &AppState<S>, action: &str) -> ApiResult<User> {
    let user = require_session(state, action)?;
    if !user.role.is_staff() {
        return Err(CoreError::forbidden(action).into());
    }
    Ok(user)
}
