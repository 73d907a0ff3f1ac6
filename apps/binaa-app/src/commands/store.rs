//! # Store Commands
//!
//! Store listing management (staff) and star ratings (any member).
//!
//! ## Rating Flow
//! ```text
//! rate_store("1", 4)
//!     │
//!     ├── no session ──────────────► UNAUTHENTICATED
//!     ├── value ∉ 1..=5 ───────────► VALIDATION_ERROR
//!     ├── store missing ───────────► NOT_FOUND
//!     ▼
//! ratings: replace this user's entry in place, or append one
//! rating:  mean of ratings, one decimal
//!     │
//!     ▼
//! stores[i] = updated ──► set_stores ──► mirror
//! ```

use binaa_core::rating;
use binaa_core::validation::{validate_rating, StoreDraft, StoreForm};
use binaa_core::{new_id, CoreError, Store};
use binaa_db::SlotStore;
use chrono::Utc;
use tracing::info;

use super::admin::record_action;
use super::{require_session, require_staff, Confirmation};
use crate::error::ApiResult;
use crate::state::AppState;

/// Looks a store up by ID.
pub fn get_store<S: SlotStore>(state: &AppState<S>, store_id: &str) -> ApiResult<Store> {
    state
        .stores()
        .iter()
        .find(|s| s.id == store_id)
        .cloned()
        .ok_or_else(|| CoreError::StoreNotFound(store_id.to_string()).into())
}

fn apply_draft(store: Store, draft: StoreDraft) -> Store {
    Store {
        name: draft.name,
        description: draft.description,
        category_id: draft.category_id,
        city: draft.city,
        neighborhood: draft.neighborhood,
        images: draft.images,
        whatsapp: draft.whatsapp,
        location: draft.location,
        working_hours: draft.working_hours,
        ..store
    }
}

/// Adds a store at the top of the directory.
pub async fn create_store<S: SlotStore>(
    state: &mut AppState<S>,
    form: &StoreForm,
) -> ApiResult<Store> {
    require_staff(state, "add stores")?;
    let draft = form.parse()?;

    let store = Store {
        id: new_id(),
        name: draft.name,
        description: draft.description,
        category_id: draft.category_id,
        city: draft.city,
        neighborhood: draft.neighborhood,
        images: draft.images,
        whatsapp: draft.whatsapp,
        location: draft.location,
        working_hours: draft.working_hours,
        rating: 0.0,
        ratings: Vec::new(),
        created_at: Utc::now(),
    };

    let mut stores = Vec::with_capacity(state.stores().len() + 1);
    stores.push(store.clone());
    stores.extend_from_slice(state.stores());
    state.set_stores(stores).await?;

    state.notify(
        "متجر جديد!",
        &format!("تمت إضافة متجر \"{}\" إلى الدليل.", store.name),
    );
    record_action(state, "إضافة متجر", &format!("إضافة متجر جديد: {}", store.name)).await?;

    info!(store_id = %store.id, name = %store.name, "Store created");
    Ok(store)
}

/// Replaces the editable fields of a store. ID, ratings and creation time
/// are kept.
pub async fn update_store<S: SlotStore>(
    state: &mut AppState<S>,
    store_id: &str,
    form: &StoreForm,
) -> ApiResult<Store> {
    require_staff(state, "edit stores")?;
    let draft = form.parse()?;
    let updated = apply_draft(get_store(state, store_id)?, draft);

    let stores = state
        .stores()
        .iter()
        .map(|s| if s.id == store_id { updated.clone() } else { s.clone() })
        .collect();
    state.set_stores(stores).await?;
    record_action(state, "تعديل متجر", &format!("تعديل المتجر: {}", updated.name)).await?;

    info!(store_id, "Store updated");
    Ok(updated)
}

/// Removes a store. Its posts, comments and ratings are left alone.
///
/// Returns `false` when the prompt was cancelled.
pub async fn delete_store<S: SlotStore>(
    state: &mut AppState<S>,
    store_id: &str,
    confirmation: Confirmation,
) -> ApiResult<bool> {
    require_staff(state, "delete stores")?;
    get_store(state, store_id)?;
    if !confirmation.is_confirmed() {
        return Ok(false);
    }

    let stores = state
        .stores()
        .iter()
        .filter(|s| s.id != store_id)
        .cloned()
        .collect();
    state.set_stores(stores).await?;

    info!(store_id, "Store deleted");
    Ok(true)
}

/// Records the signed-in user's rating. A second rating by the same user
/// replaces the first.
pub async fn rate_store<S: SlotStore>(
    state: &mut AppState<S>,
    store_id: &str,
    value: i64,
) -> ApiResult<Store> {
    let user = require_session(state, "rate a store")?;
    let value = validate_rating(value)?;
    let rated = rating::rate(&get_store(state, store_id)?, &user.id, value);

    let stores = state
        .stores()
        .iter()
        .map(|s| if s.id == store_id { rated.clone() } else { s.clone() })
        .collect();
    state.set_stores(stores).await?;

    info!(store_id, user_id = %user.id, value, rating = rated.rating, "Store rated");
    Ok(rated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use binaa_core::{Coordinates, Province, DEFAULT_STORE_IMAGE};

    fn form() -> StoreForm {
        StoreForm {
            name: "مؤسسة النور".to_string(),
            description: "إسمنت وبلوك".to_string(),
            category_id: "1".to_string(),
            city: "حمص".to_string(),
            neighborhood: "الوعر".to_string(),
            images: Vec::new(),
            whatsapp: "963933111222".to_string(),
            location: None,
            working_hours: "8:00 AM - 5:00 PM".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_store_defaults_and_log() {
        let mut state = testing::admin_state().await;
        let store = create_store(&mut state, &form()).await.unwrap();

        assert_eq!(state.stores()[0], store);
        assert_eq!(state.stores().len(), 3);
        assert_eq!(store.rating, 0.0);
        assert!(store.ratings.is_empty());
        assert_eq!(store.location, Coordinates::DEFAULT);
        assert_eq!(store.images, vec![DEFAULT_STORE_IMAGE.to_string()]);
        assert_eq!(store.city, Province::Homs);

        let log = &state.action_logs()[0];
        assert_eq!(log.action, "إضافة متجر");
        assert_eq!(log.details, "إضافة متجر جديد: مؤسسة النور");
    }

    #[tokio::test]
    async fn test_create_store_requires_staff() {
        let mut state = testing::member_state("samir").await;
        let err = create_store(&mut state, &form()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(state.stores().len(), 2);
    }

    #[tokio::test]
    async fn test_update_store_keeps_ratings() {
        let mut state = testing::admin_state().await;
        rate_store(&mut state, "1", 3).await.unwrap();

        let edited = StoreForm {
            name: "الحديد السوري".to_string(),
            ..form()
        };
        let store = update_store(&mut state, "1", &edited).await.unwrap();

        assert_eq!(store.id, "1");
        assert_eq!(store.name, "الحديد السوري");
        assert_eq!(store.ratings.len(), 1);
        assert_eq!(store.rating, 3.0);
        assert_eq!(state.stores()[0], store);
        assert_eq!(state.action_logs()[0].details, "تعديل المتجر: الحديد السوري");
    }

    #[tokio::test]
    async fn test_delete_store_keeps_posts() {
        let mut state = testing::admin_state().await;
        crate::commands::post::submit_post(
            &mut state,
            "1",
            &binaa_core::validation::PostForm {
                content: "هل يتوفر حديد 12؟".to_string(),
                image_url: None,
            },
        )
        .await
        .unwrap();

        assert!(!delete_store(&mut state, "1", Confirmation::Cancelled).await.unwrap());
        assert_eq!(state.stores().len(), 2);

        assert!(delete_store(&mut state, "1", Confirmation::Confirmed).await.unwrap());
        assert_eq!(state.stores().len(), 1);
        assert_eq!(state.posts().len(), 1);
        assert_eq!(get_store(&state, "1").unwrap_err().code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_second_rating_updates_in_place() {
        let mut state = testing::member_state("samir").await;

        let store = rate_store(&mut state, "1", 5).await.unwrap();
        assert_eq!(store.ratings.len(), 1);
        assert_eq!(store.rating, 5.0);

        let store = rate_store(&mut state, "1", 2).await.unwrap();
        assert_eq!(store.ratings.len(), 1);
        assert_eq!(store.rating, 2.0);
        assert_eq!(store.rating_by("member-samir"), Some(2));
    }

    #[tokio::test]
    async fn test_rating_mean_has_one_decimal() {
        let mut state = testing::member_state("samir").await;
        rate_store(&mut state, "2", 5).await.unwrap();

        crate::commands::auth::logout(&mut state).await.unwrap();
        crate::commands::auth::login(&mut state, "ادمن", "123").await.unwrap();
        rate_store(&mut state, "2", 4).await.unwrap();

        let store = get_store(&state, "2").unwrap();
        assert_eq!(store.rating, 4.5);
        assert_eq!(store.ratings.len(), 2);
    }

    #[tokio::test]
    async fn test_rate_store_guards() {
        let mut state = testing::state().await;
        let err = rate_store(&mut state, "1", 4).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);

        let mut state = testing::member_state("samir").await;
        let err = rate_store(&mut state, "1", 6).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        let err = rate_store(&mut state, "missing", 4).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_update_missing_store_not_found() {
        let mut state = testing::admin_state().await;
        let err = update_store(&mut state, "ghost", &form()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(state.stores().len(), 2);
        assert!(state.action_logs().is_empty());
    }
}
