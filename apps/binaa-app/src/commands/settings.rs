//! # Settings Commands
//!
//! Appearance (dark mode, theme preview and save), notifications, and the
//! dashboard's system settings.
//!
//! ## Theme Preview
//! ```text
//! settings.theme ── saved choice, persisted in appSettings
//! active theme   ── what is on screen right now
//!
//! preview_theme(t)       active = t                (settings untouched)
//! revert_theme_preview() active = settings.theme
//! save_theme(t)          settings.theme = t, active = t
//! ```
//!
//! Appearance controls are open to every visitor. Contact details need a
//! staff session; the application name and logo need the super-admin.

use binaa_core::access::can_manage_app_identity;
use binaa_core::validation::{ContactForm, IdentityForm};
use binaa_core::{AppSettings, AppTheme, CoreError};
use binaa_db::SlotStore;
use tracing::info;

use super::admin::record_action;
use super::require_staff;
use crate::error::ApiResult;
use crate::state::AppState;

/// Flips dark mode and returns the new flag.
pub async fn toggle_dark_mode<S: SlotStore>(state: &mut AppState<S>) -> ApiResult<bool> {
    let settings = AppSettings {
        is_dark_mode: !state.settings().is_dark_mode,
        ..state.settings().clone()
    };
    let dark = settings.is_dark_mode;
    state.set_settings(settings).await?;
    Ok(dark)
}

pub async fn preview_theme<S: SlotStore>(state: &mut AppState<S>, theme: AppTheme) -> ApiResult<()> {
    state.set_active_theme(theme).await?;
    Ok(())
}

/// Drops an unsaved preview.
pub async fn revert_theme_preview<S: SlotStore>(state: &mut AppState<S>) -> ApiResult<AppTheme> {
    let saved = state.settings().theme;
    state.set_active_theme(saved).await?;
    Ok(saved)
}

pub async fn save_theme<S: SlotStore>(state: &mut AppState<S>, theme: AppTheme) -> ApiResult<()> {
    let settings = AppSettings {
        theme,
        ..state.settings().clone()
    };
    state.set_settings(settings).await?;
    state.set_active_theme(theme).await?;
    info!(%theme, "Theme saved");
    Ok(())
}

/// Flips the notification switch and returns the new value.
pub async fn toggle_notifications<S: SlotStore>(state: &mut AppState<S>) -> ApiResult<bool> {
    let settings = AppSettings {
        notifications_enabled: !state.settings().notifications_enabled,
        ..state.settings().clone()
    };
    let enabled = settings.notifications_enabled;
    state.set_settings(settings).await?;
    Ok(enabled)
}

/// Renames the application and replaces its logo (emoji or image URL).
pub async fn update_app_identity<S: SlotStore>(
    state: &mut AppState<S>,
    form: &IdentityForm,
) -> ApiResult<AppSettings> {
    if !can_manage_app_identity(state.current_user()) {
        return Err(CoreError::forbidden("change the application identity").into());
    }
    let draft = form.parse()?;

    let settings = AppSettings {
        app_name: draft.app_name,
        app_logo: draft.app_logo,
        ..state.settings().clone()
    };
    state.set_settings(settings.clone()).await?;
    record_action(state, "تحديث النظام", "قام المدير العام بتغيير اسم/شعار التطبيق").await?;

    info!(app_name = %settings.app_name, "Application identity updated");
    Ok(settings)
}

/// Contact details, hero texts, currency and post moderation mode.
pub async fn update_contact_info<S: SlotStore>(
    state: &mut AppState<S>,
    form: &ContactForm,
) -> ApiResult<AppSettings> {
    require_staff(state, "edit contact information")?;
    let draft = form.parse()?;

    let settings = AppSettings {
        owner_whatsapp: draft.owner_whatsapp,
        admin_email: draft.admin_email,
        admin_phone: draft.admin_phone,
        hero_title: draft.hero_title,
        hero_subtitle: draft.hero_subtitle,
        currency: draft.currency,
        exchange_rate: draft.exchange_rate,
        auto_approve_posts: draft.auto_approve_posts,
        ..state.settings().clone()
    };
    state.set_settings(settings.clone()).await?;

    info!(auto_approve_posts = settings.auto_approve_posts, "Contact settings updated");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use crate::platform::{THEME_PRIMARY_PROPERTY, THEME_RIPPLE_PROPERTY};
    use binaa_core::Currency;
    use binaa_db::SlotKey;

    #[tokio::test]
    async fn test_dark_mode_toggle_twice_restores() {
        let mut state = testing::state().await;
        let before_style = state.root_style().clone();
        let before_flag = state.settings().is_dark_mode;

        assert!(toggle_dark_mode(&mut state).await.unwrap());
        assert!(state.root_style().dark);
        assert_eq!(state.root_style().property(THEME_PRIMARY_PROPERTY), Some("#3b82f6"));

        assert!(!toggle_dark_mode(&mut state).await.unwrap());
        assert_eq!(state.settings().is_dark_mode, before_flag);
        assert_eq!(state.root_style(), &before_style);
        assert_eq!(
            state.root_style().property(THEME_RIPPLE_PROPERTY),
            before_style.property(THEME_RIPPLE_PROPERTY)
        );
    }

    #[tokio::test]
    async fn test_preview_does_not_persist_until_saved() {
        let mut state = testing::state().await;

        preview_theme(&mut state, AppTheme::LavaFlow).await.unwrap();
        assert_eq!(state.active_theme(), AppTheme::LavaFlow);
        assert_eq!(state.settings().theme, AppTheme::ModernBlue);
        assert_eq!(state.theme_tokens().hex, "#dc2626");

        assert_eq!(revert_theme_preview(&mut state).await.unwrap(), AppTheme::ModernBlue);
        assert_eq!(state.active_theme(), AppTheme::ModernBlue);

        save_theme(&mut state, AppTheme::OceanBreeze).await.unwrap();
        assert_eq!(state.settings().theme, AppTheme::OceanBreeze);
        let raw = state.slots().raw(SlotKey::AppSettings).unwrap();
        assert!(raw.contains("\"OCEAN_BREEZE\""));
    }

    #[tokio::test]
    async fn test_toggle_notifications() {
        let mut state = testing::state().await;
        assert!(toggle_notifications(&mut state).await.unwrap());
        assert!(state.settings().notifications_enabled);
    }

    #[tokio::test]
    async fn test_app_identity_super_admin_only() {
        let form = IdentityForm {
            app_name: "بناء".to_string(),
            app_logo: "🧱".to_string(),
        };

        let mut state = testing::member_state("samir").await;
        let err = update_app_identity(&mut state, &form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        let mut state = testing::admin_state().await;
        let settings = update_app_identity(&mut state, &form).await.unwrap();
        assert_eq!(settings.app_name, "بناء");
        assert_eq!(state.action_logs()[0].action, "تحديث النظام");
    }

    #[tokio::test]
    async fn test_update_contact_info() {
        let mut state = testing::admin_state().await;
        let form = ContactForm {
            owner_whatsapp: "+963 944 000 111".to_string(),
            admin_email: "help@binaa.sy".to_string(),
            admin_phone: "011 222 3333".to_string(),
            hero_title: "كل مواد البناء".to_string(),
            hero_subtitle: String::new(),
            currency: Currency::Usd,
            exchange_rate: 14000.0,
            auto_approve_posts: false,
        };

        let settings = update_contact_info(&mut state, &form).await.unwrap();
        assert_eq!(settings.owner_whatsapp, "963944000111");
        assert_eq!(settings.currency, Currency::Usd);
        assert!(!state.settings().auto_approve_posts);
        assert_eq!(state.settings().app_name, AppSettings::default().app_name);
    }
}
