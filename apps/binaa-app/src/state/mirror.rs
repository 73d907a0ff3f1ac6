//! # Persistence Mirror
//!
//! Runs after every committed change and makes the slots and the root style
//! match memory.
//!
//! ```text
//!   AppState ──mirror()──► appSettings, users, categories, stores,
//!                          storePosts, comments, reports, actionLogs,
//!                          messages                        (full overwrite)
//!                       ├► currentUser                     (write or remove)
//!                       └► RootStyle: dark flag,
//!                          --theme-primary = hex
//!                          --theme-ripple  = hex + "4D"
//! ```
//!
//! Each slot write is separate. If one fails the error is returned as is;
//! slots written before it keep their new value and memory is not rolled
//! back.

use binaa_db::{DbResult, SlotKey, SlotStore};
use tracing::trace;

use super::AppState;
use crate::platform::{THEME_PRIMARY_PROPERTY, THEME_RIPPLE_PROPERTY};

impl<S: SlotStore> AppState<S> {
    /// Writes every tracked collection and refreshes the root style.
    pub async fn mirror(&mut self) -> DbResult<()> {
        self.slots.save(SlotKey::AppSettings, &self.settings).await?;
        self.slots.save(SlotKey::Users, &self.users).await?;
        self.slots.save(SlotKey::Categories, &self.categories).await?;
        self.slots.save(SlotKey::Stores, &self.stores).await?;
        self.slots.save(SlotKey::StorePosts, &self.posts).await?;
        self.slots.save(SlotKey::Comments, &self.comments).await?;
        self.slots.save(SlotKey::Reports, &self.reports).await?;
        self.slots.save(SlotKey::ActionLogs, &self.action_logs).await?;
        self.slots.save(SlotKey::Messages, &self.messages).await?;

        match &self.current_user {
            Some(user) => self.slots.save(SlotKey::CurrentUser, user).await?,
            None => self.slots.remove(SlotKey::CurrentUser.as_str()).await?,
        }

        let tokens = self.theme_tokens();
        self.root_style.set_dark(self.settings.is_dark_mode);
        self.root_style.set_property(THEME_PRIMARY_PROPERTY, tokens.hex);
        self.root_style.set_property(THEME_RIPPLE_PROPERTY, tokens.ripple());

        trace!(theme = %self.active_theme, dark = self.settings.is_dark_mode, "Mirrored state");
        Ok(())
    }
}
