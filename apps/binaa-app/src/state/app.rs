//! # Application State
//!
//! The single owned container for everything the directory shows: the nine
//! collections, the settings singleton, the signed-in user and the theme
//! being previewed.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command                                                                │
//! │     │  builds the replacement collection from the current one           │
//! │     ▼                                                                   │
//! │  state.set_stores(next).await?      ◄── the only way in                 │
//! │     │                                                                   │
//! │     ├── self.stores = next                                              │
//! │     └── self.mirror().await?         (every slot + root style)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Readers get slices. No `&mut` to a collection ever leaves this type, so a
//! change is either fully committed through a setter or not visible at all.

use binaa_core::theme::{resolve_theme, ThemeTokens};
use binaa_core::{
    ActionLog, AppSettings, AppTheme, Category, Comment, InternalMessage, Report, Store,
    StorePost, User,
};
use binaa_db::{DbResult, SlotKey, SlotStore};
use chrono::Utc;
use tracing::{debug, info};

use super::seed;
use crate::platform::{self, Notifier, RootStyle};

pub struct AppState<S: SlotStore> {
    pub(super) slots: S,
    pub(super) settings: AppSettings,
    pub(super) users: Vec<User>,
    pub(super) categories: Vec<Category>,
    pub(super) stores: Vec<Store>,
    pub(super) posts: Vec<StorePost>,
    pub(super) comments: Vec<Comment>,
    pub(super) reports: Vec<Report>,
    pub(super) action_logs: Vec<ActionLog>,
    pub(super) messages: Vec<InternalMessage>,
    pub(super) current_user: Option<User>,
    /// Theme shown right now; differs from `settings.theme` while previewing.
    pub(super) active_theme: AppTheme,
    pub(super) root_style: RootStyle,
    notifier: Box<dyn Notifier>,
}

impl<S: SlotStore> AppState<S> {
    /// Loads every slot, falling back to the seed data for empty ones, then
    /// runs the mirror once so the slots and root style reflect the result.
    ///
    /// ## Errors
    /// A slot that holds undecodable JSON fails the boot with
    /// `DbError::Serialization`; it is not replaced by the seed.
    pub async fn boot(slots: S, notifier: Box<dyn Notifier>) -> DbResult<Self> {
        let now = Utc::now();

        let settings = slots
            .load(SlotKey::AppSettings)
            .await?
            .unwrap_or_else(seed::default_settings);
        let current_user = slots.load(SlotKey::CurrentUser).await?;
        let categories = slots
            .load(SlotKey::Categories)
            .await?
            .unwrap_or_else(seed::default_categories);
        let stores = slots
            .load(SlotKey::Stores)
            .await?
            .unwrap_or_else(|| seed::default_stores(now));
        let users = seed::ensure_super_admin(
            slots.load(SlotKey::Users).await?.unwrap_or_default(),
            now,
        );
        let posts = slots.load(SlotKey::StorePosts).await?.unwrap_or_default();
        let comments = slots.load(SlotKey::Comments).await?.unwrap_or_default();
        let reports = slots.load(SlotKey::Reports).await?.unwrap_or_default();
        let action_logs = slots.load(SlotKey::ActionLogs).await?.unwrap_or_default();
        let messages = slots.load(SlotKey::Messages).await?.unwrap_or_default();

        let mut state = AppState {
            slots,
            active_theme: settings.theme,
            settings,
            users,
            categories,
            stores,
            posts,
            comments,
            reports,
            action_logs,
            messages,
            current_user,
            root_style: RootStyle::default(),
            notifier,
        };

        info!(
            stores = state.stores.len(),
            categories = state.categories.len(),
            users = state.users.len(),
            signed_in = state.current_user.is_some(),
            "State loaded"
        );

        state.mirror().await?;
        Ok(state)
    }

    // =========================================================================
    // Readers
    // =========================================================================

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn posts(&self) -> &[StorePost] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn action_logs(&self) -> &[ActionLog] {
        &self.action_logs
    }

    pub fn messages(&self) -> &[InternalMessage] {
        &self.messages
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn active_theme(&self) -> AppTheme {
        self.active_theme
    }

    pub fn root_style(&self) -> &RootStyle {
        &self.root_style
    }

    /// Presentation tokens for the active theme and the dark-mode flag.
    pub fn theme_tokens(&self) -> ThemeTokens {
        resolve_theme(self.active_theme, self.settings.is_dark_mode)
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub async fn set_settings(&mut self, settings: AppSettings) -> DbResult<()> {
        self.settings = settings;
        self.mirror().await
    }

    pub async fn set_users(&mut self, users: Vec<User>) -> DbResult<()> {
        self.users = users;
        self.mirror().await
    }

    pub async fn set_categories(&mut self, categories: Vec<Category>) -> DbResult<()> {
        self.categories = categories;
        self.mirror().await
    }

    pub async fn set_stores(&mut self, stores: Vec<Store>) -> DbResult<()> {
        self.stores = stores;
        self.mirror().await
    }

    pub async fn set_posts(&mut self, posts: Vec<StorePost>) -> DbResult<()> {
        self.posts = posts;
        self.mirror().await
    }

    pub async fn set_comments(&mut self, comments: Vec<Comment>) -> DbResult<()> {
        self.comments = comments;
        self.mirror().await
    }

    pub async fn set_reports(&mut self, reports: Vec<Report>) -> DbResult<()> {
        self.reports = reports;
        self.mirror().await
    }

    pub async fn set_action_logs(&mut self, action_logs: Vec<ActionLog>) -> DbResult<()> {
        self.action_logs = action_logs;
        self.mirror().await
    }

    pub async fn set_messages(&mut self, messages: Vec<InternalMessage>) -> DbResult<()> {
        self.messages = messages;
        self.mirror().await
    }

    pub async fn set_current_user(&mut self, user: Option<User>) -> DbResult<()> {
        debug!(user = user.as_ref().map(|u| u.username.as_str()), "Session changed");
        self.current_user = user;
        self.mirror().await
    }

    pub async fn set_active_theme(&mut self, theme: AppTheme) -> DbResult<()> {
        self.active_theme = theme;
        self.mirror().await
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Raises a system notification when the settings allow it.
    pub fn notify(&self, title: &str, body: &str) {
        platform::notify(
            self.notifier.as_ref(),
            self.settings.notifications_enabled,
            title,
            body,
            &self.settings.app_logo,
        );
    }
}

impl<S: SlotStore + std::fmt::Debug> std::fmt::Debug for AppState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("slots", &self.slots)
            .field("stores", &self.stores.len())
            .field("users", &self.users.len())
            .field("current_user", &self.current_user.as_ref().map(|u| &u.username))
            .field("active_theme", &self.active_theme)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
