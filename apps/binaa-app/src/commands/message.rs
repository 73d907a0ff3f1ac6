//! # Message Commands
//!
//! Direct messages between accounts. New messages go to the top of the list
//! unread.

use binaa_core::validation::MessageForm;
use binaa_core::{new_id, CoreError, InternalMessage};
use binaa_db::SlotStore;
use chrono::Utc;
use tracing::{debug, info};

use super::require_session;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn send_message<S: SlotStore>(
    state: &mut AppState<S>,
    form: &MessageForm,
) -> ApiResult<InternalMessage> {
    let sender = require_session(state, "send messages")?;
    let draft = form.parse()?;
    if !state.users().iter().any(|u| u.id == draft.receiver_id) {
        return Err(CoreError::UserNotFound(draft.receiver_id).into());
    }

    let message = InternalMessage {
        id: new_id(),
        sender_id: sender.id,
        sender_name: sender.username,
        receiver_id: draft.receiver_id,
        subject: draft.subject,
        content: draft.content,
        is_read: false,
        created_at: Utc::now(),
    };

    let mut messages = Vec::with_capacity(state.messages().len() + 1);
    messages.push(message.clone());
    messages.extend_from_slice(state.messages());
    state.set_messages(messages).await?;

    info!(message_id = %message.id, receiver_id = %message.receiver_id, "Message sent");
    Ok(message)
}

/// Marks a message in the signed-in user's inbox as read.
pub async fn mark_message_read<S: SlotStore>(
    state: &mut AppState<S>,
    message_id: &str,
) -> ApiResult<InternalMessage> {
    let reader = require_session(state, "read messages")?;
    let mut message = state
        .messages()
        .iter()
        .find(|m| m.id == message_id && m.receiver_id == reader.id)
        .cloned()
        .ok_or_else(|| CoreError::MessageNotFound(message_id.to_string()))?;
    if message.is_read {
        debug!(message_id, "Message already read");
        return Ok(message);
    }
    message.is_read = true;

    let messages = state
        .messages()
        .iter()
        .map(|m| if m.id == message_id { message.clone() } else { m.clone() })
        .collect();
    state.set_messages(messages).await?;

    Ok(message)
}
