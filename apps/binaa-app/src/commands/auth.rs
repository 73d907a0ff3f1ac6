//! # Account Commands
//!
//! Sign-up, sign-in, sign-out and profile edits.
//!
//! ## Login Flow
//! ```text
//! identifier (trimmed) + password
//!        │
//!        ▼
//! first user where (username == id || email == id) && password matches
//!        │
//!        ├── none ─────────────► INVALID_CREDENTIALS
//!        ├── status ≠ approved ─► INVALID_CREDENTIALS (account not approved)
//!        └── approved ─────────► session = user, land on /admin (staff) or /
//! ```

use binaa_core::access::{landing_route, Route};
use binaa_core::validation::{ProfileForm, RegisterForm};
use binaa_core::{
    new_id, CoreError, User, UserPermissions, UserRole, UserStatus, ValidationError,
};
use binaa_db::SlotStore;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::require_session;
use crate::error::ApiResult;
use crate::state::{AppState, RegistrationPolicy};

/// Result of a successful sign-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub user: User,
    /// Where the shell should navigate next.
    pub landing: Route,
}

/// Creates a member account. Does not sign it in.
///
/// Usernames and e-mails must be unused.
pub async fn register<S: SlotStore>(
    state: &mut AppState<S>,
    form: &RegisterForm,
    policy: RegistrationPolicy,
) -> ApiResult<User> {
    let draft = form.parse()?;
    ensure_unique(state.users(), &draft.username, &draft.email, None)?;

    let user = User {
        id: new_id(),
        email: draft.email,
        username: draft.username,
        password: Some(draft.password),
        role: UserRole::Member,
        status: match policy {
            RegistrationPolicy::AutoApprove => UserStatus::Approved,
            RegistrationPolicy::Moderated => UserStatus::Pending,
        },
        join_date: Utc::now(),
        avatar: None,
        bio: None,
        phone: None,
        permissions: UserPermissions::none(),
    };

    let mut users = state.users().to_vec();
    users.push(user.clone());
    state.set_users(users).await?;

    info!(user_id = %user.id, username = %user.username, %policy, "Member registered");
    Ok(user)
}

/// Rejects a username or e-mail already held by another account.
fn ensure_unique(
    users: &[User],
    username: &str,
    email: &str,
    owner_id: Option<&str>,
) -> Result<(), ValidationError> {
    let others = || users.iter().filter(move |u| Some(u.id.as_str()) != owner_id);
    if others().any(|u| u.username == username) {
        return Err(ValidationError::Duplicate {
            field: "username".to_string(),
            value: username.to_string(),
        });
    }
    if others().any(|u| u.email == email) {
        return Err(ValidationError::Duplicate {
            field: "email".to_string(),
            value: email.to_string(),
        });
    }
    Ok(())
}

/// Signs in by username or e-mail.
pub async fn login<S: SlotStore>(
    state: &mut AppState<S>,
    identifier: &str,
    password: &str,
) -> ApiResult<SignedIn> {
    let identifier = identifier.trim();
    let user = state
        .users()
        .iter()
        .find(|u| u.matches_identifier(identifier) && u.password.as_deref() == Some(password))
        .cloned();

    let Some(user) = user else {
        warn!(identifier, "Login failed: bad credentials");
        return Err(CoreError::InvalidCredentials.into());
    };
    if !user.is_approved() {
        warn!(username = %user.username, status = ?user.status, "Login refused: account not approved");
        return Err(CoreError::AccountNotApproved {
            username: user.username,
        }
        .into());
    }

    let landing = landing_route(&user);
    state.set_current_user(Some(user.clone())).await?;

    info!(user_id = %user.id, role = ?user.role, "Signed in");
    Ok(SignedIn { user, landing })
}

/// Clears the session. Signing out twice is harmless.
pub async fn logout<S: SlotStore>(state: &mut AppState<S>) -> ApiResult<()> {
    if let Some(user) = state.current_user() {
        info!(user_id = %user.id, "Signed out");
    }
    state.set_current_user(None).await?;
    Ok(())
}

/// Saves the profile form to both the session and the user list.
pub async fn update_profile<S: SlotStore>(
    state: &mut AppState<S>,
    form: &ProfileForm,
) -> ApiResult<User> {
    let current = require_session(state, "edit your profile")?;
    let draft = form.parse()?;
    ensure_unique(state.users(), &draft.username, &draft.email, Some(&current.id))?;

    let updated = User {
        username: draft.username,
        email: draft.email,
        phone: draft.phone,
        bio: draft.bio,
        avatar: draft.avatar,
        ..current
    };

    let users = state
        .users()
        .iter()
        .map(|u| if u.id == updated.id { updated.clone() } else { u.clone() })
        .collect();
    state.set_users(users).await?;
    state.set_current_user(Some(updated.clone())).await?;

    info!(user_id = %updated.id, "Profile updated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use binaa_core::access::{guard, Navigation};

    fn ali() -> RegisterForm {
        RegisterForm {
            username: "Ali".to_string(),
            email: "ali@x.com".to_string(),
            password: "pw123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let mut state = testing::state().await;

        let user = register(&mut state, &ali(), RegistrationPolicy::AutoApprove)
            .await
            .unwrap();
        assert_eq!(user.status, UserStatus::Approved);
        assert_eq!(user.role, UserRole::Member);
        assert!(state.current_user().is_none());

        let signed_in = login(&mut state, "Ali", "pw123").await.unwrap();
        assert_eq!(signed_in.user, user);
        assert_eq!(signed_in.landing, Route::Home);
        assert_eq!(state.current_user(), Some(&user));
    }

    #[tokio::test]
    async fn test_login_by_email_with_padding() {
        let mut state = testing::state().await;
        register(&mut state, &ali(), RegistrationPolicy::AutoApprove)
            .await
            .unwrap();

        assert!(login(&mut state, "  ali@x.com ", "pw123").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut state = testing::state().await;
        let err = login(&mut state, "ادمن", "nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert!(state.current_user().is_none());
    }

    #[tokio::test]
    async fn test_moderated_registration_blocks_login() {
        let mut state = testing::state().await;
        let user = register(&mut state, &ali(), RegistrationPolicy::Moderated)
            .await
            .unwrap();
        assert_eq!(user.status, UserStatus::Pending);

        let err = login(&mut state, "Ali", "pw123").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert!(err.message.contains("not approved"));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let mut state = testing::state().await;
        register(&mut state, &ali(), RegistrationPolicy::AutoApprove)
            .await
            .unwrap();

        let again = RegisterForm {
            email: "other@x.com".to_string(),
            ..ali()
        };
        let err = register(&mut state, &again, RegistrationPolicy::AutoApprove)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.users().len(), 2);
    }

    #[tokio::test]
    async fn test_admin_route_after_super_admin_login() {
        let mut state = testing::state().await;
        assert_eq!(
            guard(Route::Admin, state.current_user()),
            Navigation::Redirect(Route::Login)
        );

        let signed_in = login(&mut state, "ادمن", "123").await.unwrap();
        assert_eq!(signed_in.landing, Route::Admin);
        assert_eq!(
            guard(Route::Admin, state.current_user()),
            Navigation::Render(Route::Admin)
        );
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let mut state = testing::admin_state().await;
        logout(&mut state).await.unwrap();
        assert!(state.current_user().is_none());
        logout(&mut state).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_profile_updates_list_and_session() {
        let mut state = testing::member_state("samir").await;
        let form = ProfileForm {
            username: "سمير".to_string(),
            email: "samir@example.com".to_string(),
            phone: Some("0933000000".to_string()),
            bio: Some("  مقاول  ".to_string()),
            avatar: None,
        };

        let updated = update_profile(&mut state, &form).await.unwrap();
        assert_eq!(updated.bio.as_deref(), Some("مقاول"));
        assert_eq!(state.current_user(), Some(&updated));
        assert!(state.users().iter().any(|u| u == &updated));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_taken_names() {
        let mut state = testing::member_state("samir").await;
        register(&mut state, &ali(), RegistrationPolicy::AutoApprove)
            .await
            .unwrap();
        let keep = ProfileForm {
            username: "samir".to_string(),
            email: "samir@example.com".to_string(),
            ..ProfileForm::default()
        };

        let taken_name = ProfileForm {
            username: "Ali".to_string(),
            ..keep.clone()
        };
        let err = update_profile(&mut state, &taken_name).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let taken_email = ProfileForm {
            email: "ali@x.com".to_string(),
            ..keep.clone()
        };
        let err = update_profile(&mut state, &taken_email).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.current_user().map(|u| u.username.as_str()), Some("samir"));

        // Keeping one's own name and e-mail is fine
        update_profile(&mut state, &keep).await.unwrap();
        let signed_in = login(&mut state, "Ali", "pw123").await.unwrap();
        assert_eq!(signed_in.user.email, "ali@x.com");
    }

    #[tokio::test]
    async fn test_update_profile_requires_session() {
        let mut state = testing::state().await;
        let err = update_profile(&mut state, &ProfileForm::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }
}
