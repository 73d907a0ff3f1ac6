//! # Access Gate
//!
//! Role checks and the route table.
//!
//! ## Route Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "/admin" ──► Route::Admin ──► guard(route, session)                   │
//! │                                     │                                   │
//! │                  ┌──────────────────┴───────────────────┐              │
//! │                  ▼                                      ▼              │
//! │        ADMIN or SUPER_ADMIN                     anyone else            │
//! │             Render                        Redirect(Route::Login)       │
//! │                                                                         │
//! │  Every other route renders for everyone; pages that need a session     │
//! │  (profile) show their own sign-in prompt.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use ts_rs::TS;

use crate::types::{User, UserRole};

// =============================================================================
// Role Checks
// =============================================================================

/// True when the session may open the admin dashboard.
pub fn can_access_admin(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.role.is_staff())
}

/// True when the session may change the application name and logo.
pub fn can_manage_app_identity(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.role == UserRole::SuperAdmin)
}

// =============================================================================
// Routes
// =============================================================================

/// The navigable locations of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(tag = "page", content = "id", rename_all = "camelCase")]
pub enum Route {
    Home,
    Store(String),
    Category(String),
    Search,
    Contact,
    Profile,
    Settings,
    Login,
    Register,
    Admin,
}

impl Route {
    /// Parses a location path (`/store/42`, `#/admin`, ...).
    ///
    /// Returns `None` for paths outside the route table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["store", id] => Route::Store((*id).to_string()),
            ["category", id] => Route::Category((*id).to_string()),
            ["search"] => Route::Search,
            ["contact"] => Route::Contact,
            ["profile"] => Route::Profile,
            ["settings"] => Route::Settings,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin"] => Route::Admin,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Store(id) => format!("/store/{id}"),
            Route::Category(id) => format!("/category/{id}"),
            Route::Search => "/search".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of guarding a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "route", rename_all = "camelCase")]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Decides whether `route` renders for `session` or redirects.
pub fn guard(route: Route, session: Option<&User>) -> Navigation {
    match route {
        Route::Admin if !can_access_admin(session) => Navigation::Redirect(Route::Login),
        route => Navigation::Render(route),
    }
}

/// Where a user lands right after signing in.
pub fn landing_route(user: &User) -> Route {
    if user.role.is_staff() {
        Route::Admin
    } else {
        Route::Home
    }
}

// =============================================================================
// Admin Dashboard Tabs
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminTab {
    Stores,
    Categories,
    Users,
    Posts,
    AppSettings,
    Reports,
    Logs,
}

impl AdminTab {
    pub const fn label(&self) -> &'static str {
        match self {
            AdminTab::Stores => "المتاجر",
            AdminTab::Categories => "الأقسام",
            AdminTab::Users => "الأعضاء",
            AdminTab::Posts => "المنشورات",
            AdminTab::AppSettings => "النظام",
            AdminTab::Reports => "البلاغات",
            AdminTab::Logs => "السجل",
        }
    }
}

/// Tabs of the admin dashboard in display order.
///
/// The system-settings tab is present only for the super-admin.
pub fn admin_tabs(user: Option<&User>) -> Vec<AdminTab> {
    if !can_access_admin(user) {
        return Vec::new();
    }
    let identity = can_manage_app_identity(user);
    [
        AdminTab::Stores,
        AdminTab::Categories,
        AdminTab::Users,
        AdminTab::Posts,
        AdminTab::AppSettings,
        AdminTab::Reports,
        AdminTab::Logs,
    ]
    .into_iter()
    .filter(|tab| *tab != AdminTab::AppSettings || identity)
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with(role: UserRole) -> User {
        let mut user = User::super_admin(Utc::now());
        user.id = "u-1".to_string();
        user.username = "someone".to_string();
        user.email = "someone@x.com".to_string();
        user.role = role;
        user
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/store/42"), Some(Route::Store("42".to_string())));
        assert_eq!(Route::parse("#/admin"), Some(Route::Admin));
        assert_eq!(Route::parse("/search?q=x"), Some(Route::Search));
        assert_eq!(Route::parse("/store"), None);
        assert_eq!(Route::parse("/nowhere"), None);
    }

    #[test]
    fn test_route_path_round_trips() {
        let route = Route::Category("3".to_string());
        assert_eq!(Route::parse(&route.path()), Some(route));
    }

    #[test]
    fn test_guard_admin_route() {
        assert_eq!(guard(Route::Admin, None), Navigation::Redirect(Route::Login));

        let member = user_with(UserRole::Member);
        assert_eq!(
            guard(Route::Admin, Some(&member)),
            Navigation::Redirect(Route::Login)
        );

        let admin = user_with(UserRole::Admin);
        assert_eq!(guard(Route::Admin, Some(&admin)), Navigation::Render(Route::Admin));

        assert_eq!(guard(Route::Profile, None), Navigation::Render(Route::Profile));
    }

    #[test]
    fn test_landing_route() {
        assert_eq!(landing_route(&user_with(UserRole::SuperAdmin)), Route::Admin);
        assert_eq!(landing_route(&user_with(UserRole::Admin)), Route::Admin);
        assert_eq!(landing_route(&user_with(UserRole::Member)), Route::Home);
    }

    #[test]
    fn test_admin_tabs_hide_system_tab() {
        let admin = user_with(UserRole::Admin);
        let tabs = admin_tabs(Some(&admin));
        assert_eq!(tabs.len(), 6);
        assert!(!tabs.contains(&AdminTab::AppSettings));

        let root = user_with(UserRole::SuperAdmin);
        assert!(admin_tabs(Some(&root)).contains(&AdminTab::AppSettings));
        assert!(admin_tabs(None).is_empty());
    }

    #[test]
    fn test_identity_requires_super_admin() {
        assert!(!can_manage_app_identity(None));
        assert!(!can_manage_app_identity(Some(&user_with(UserRole::Admin))));
        assert!(can_manage_app_identity(Some(&user_with(UserRole::SuperAdmin))));
    }
}
