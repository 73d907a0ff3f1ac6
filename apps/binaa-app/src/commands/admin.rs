//! # Admin Commands
//!
//! Member moderation and the action log.

use binaa_core::{new_id, ActionLog, CoreError, User, UserRole};
use binaa_db::SlotStore;
use chrono::Utc;
use tracing::{debug, info};

use super::{require_staff, Confirmation};
use crate::error::ApiResult;
use crate::state::AppState;

/// Appends an entry to the top of the action log, attributed to the
/// signed-in user. Without a session nothing is recorded.
pub async fn record_action<S: SlotStore>(
    state: &mut AppState<S>,
    action: &str,
    details: &str,
) -> ApiResult<Option<ActionLog>> {
    let Some(admin) = state.current_user().cloned() else {
        debug!(action, "No session; action not logged");
        return Ok(None);
    };

    let entry = ActionLog {
        id: new_id(),
        admin_id: admin.id,
        admin_name: admin.username,
        action: action.to_string(),
        details: details.to_string(),
        timestamp: Utc::now(),
    };

    let mut logs = Vec::with_capacity(state.action_logs().len() + 1);
    logs.push(entry.clone());
    logs.extend_from_slice(state.action_logs());
    state.set_action_logs(logs).await?;

    Ok(Some(entry))
}

fn find_user<S: SlotStore>(state: &AppState<S>, user_id: &str) -> ApiResult<User> {
    let user = state
        .users()
        .iter()
        .find(|u| u.id == user_id)
        .cloned()
        .ok_or_else(|| CoreError::UserNotFound(user_id.to_string()))?;
    if user.role == UserRole::SuperAdmin {
        return Err(CoreError::ProtectedAccount(user.username).into());
    }
    Ok(user)
}

/// Bans an approved member or admits a pending/banned one.
pub async fn toggle_user_status<S: SlotStore>(
    state: &mut AppState<S>,
    user_id: &str,
) -> ApiResult<User> {
    require_staff(state, "moderate members")?;
    let mut user = find_user(state, user_id)?;
    user.status = user.status.toggled();

    let users = state
        .users()
        .iter()
        .map(|u| if u.id == user.id { user.clone() } else { u.clone() })
        .collect();
    state.set_users(users).await?;

    info!(user_id = %user.id, status = ?user.status, "Member status changed");
    Ok(user)
}

/// Deletes an account. Returns `false` when the prompt was cancelled.
///
/// Posts and comments by the account stay in place.
pub async fn delete_user<S: SlotStore>(
    state: &mut AppState<S>,
    user_id: &str,
    confirmation: Confirmation,
) -> ApiResult<bool> {
    require_staff(state, "delete members")?;
    find_user(state, user_id)?;
    if !confirmation.is_confirmed() {
        return Ok(false);
    }

    let users = state
        .users()
        .iter()
        .filter(|u| u.id != user_id)
        .cloned()
        .collect();
    state.set_users(users).await?;

    info!(user_id, "Member deleted");
    Ok(true)
}
