//! # Category Commands
//!
//! Staff-only management of the category list. Stores reference categories
//! by ID only, so deleting a category leaves its stores pointing at nothing.

use binaa_core::validation::CategoryForm;
use binaa_core::{new_id, Category, CoreError};
use binaa_db::SlotStore;
use tracing::info;

use super::{require_staff, Confirmation};
use crate::error::ApiResult;
use crate::state::AppState;

/// Adds a category at the end of the list.
pub async fn create_category<S: SlotStore>(
    state: &mut AppState<S>,
    form: &CategoryForm,
) -> ApiResult<Category> {
    require_staff(state, "add categories")?;
    let draft = form.parse()?;

    let category = Category {
        id: new_id(),
        name: draft.name,
        icon_name: draft.icon_name,
        image: draft.image,
        color: draft.color,
    };

    let mut categories = state.categories().to_vec();
    categories.push(category.clone());
    state.set_categories(categories).await?;

    info!(category_id = %category.id, name = %category.name, "Category created");
    Ok(category)
}

pub async fn update_category<S: SlotStore>(
    state: &mut AppState<S>,
    category_id: &str,
    form: &CategoryForm,
) -> ApiResult<Category> {
    require_staff(state, "edit categories")?;
    let draft = form.parse()?;
    let existing = state
        .categories()
        .iter()
        .find(|c| c.id == category_id)
        .cloned()
        .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))?;

    let updated = Category {
        name: draft.name,
        icon_name: draft.icon_name,
        image: draft.image,
        color: draft.color,
        ..existing
    };

    let categories = state
        .categories()
        .iter()
        .map(|c| if c.id == category_id { updated.clone() } else { c.clone() })
        .collect();
    state.set_categories(categories).await?;

    info!(category_id, "Category updated");
    Ok(updated)
}

/// Removes a category. Stores in it are not touched.
///
/// Returns `false` when the prompt was cancelled.
pub async fn delete_category<S: SlotStore>(
    state: &mut AppState<S>,
    category_id: &str,
    confirmation: Confirmation,
) -> ApiResult<bool> {
    require_staff(state, "delete categories")?;
    if !state.categories().iter().any(|c| c.id == category_id) {
        return Err(CoreError::CategoryNotFound(category_id.to_string()).into());
    }
    if !confirmation.is_confirmed() {
        return Ok(false);
    }

    let categories = state
        .categories()
        .iter()
        .filter(|c| c.id != category_id)
        .cloned()
        .collect();
    state.set_categories(categories).await?;

    info!(category_id, "Category deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{search, testing};
    use crate::error::ErrorCode;
    use binaa_core::validation::DEFAULT_CATEGORY_COLOR;
    use binaa_core::CategoryIcon;

    fn form(name: &str, icon: &str) -> CategoryForm {
        CategoryForm {
            name: name.to_string(),
            icon_name: icon.to_string(),
            image: None,
            color: None,
        }
    }

    #[tokio::test]
    async fn test_create_category_appends() {
        let mut state = testing::admin_state().await;
        let category = create_category(&mut state, &form("بلاط", "BrickWall"))
            .await
            .unwrap();

        assert_eq!(state.categories().last(), Some(&category));
        assert_eq!(category.icon_name, CategoryIcon::BrickWall);
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
    }

    #[tokio::test]
    async fn test_create_category_rejects_unknown_icon() {
        let mut state = testing::admin_state().await;
        let err = create_category(&mut state, &form("بلاط", "Sparkles"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.categories().len(), 6);
    }

    #[tokio::test]
    async fn test_update_category_keeps_position() {
        let mut state = testing::admin_state().await;
        let updated = update_category(&mut state, "3", &form("رمل", "Truck"))
            .await
            .unwrap();

        assert_eq!(state.categories()[2], updated);
        assert_eq!(updated.id, "3");
    }

    #[tokio::test]
    async fn test_delete_category_leaves_store_dangling() {
        let mut state = testing::admin_state().await;
        let before = state.stores().to_vec();

        assert!(delete_category(&mut state, "2", Confirmation::Confirmed)
            .await
            .unwrap());

        assert_eq!(state.stores(), before.as_slice());
        assert_eq!(state.stores()[0].category_id, "2");
        assert_eq!(search::category_name_for_store(&state, "1"), None);
    }

    #[tokio::test]
    async fn test_delete_category_cancelled() {
        let mut state = testing::admin_state().await;
        assert!(!delete_category(&mut state, "2", Confirmation::Cancelled)
            .await
            .unwrap());
        assert_eq!(state.categories().len(), 6);
    }

    #[tokio::test]
    async fn test_delete_missing_category_not_found() {
        let mut state = testing::admin_state().await;
        let err = delete_category(&mut state, "ghost", Confirmation::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(state.categories().len(), 6);
    }
}
