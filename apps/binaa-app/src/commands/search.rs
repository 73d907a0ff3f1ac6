//! # Query Commands
//!
//! Read-only views over the current state, shaped for the pages that show
//! them. Nothing here mutates or mirrors.

use binaa_core::access::{admin_tabs, AdminTab};
use binaa_core::search::{self as core_search, StoreFilter, Suggestion};
use binaa_core::validation::validate_search_query;
use binaa_core::{Category, Comment, Store, StorePost};
use binaa_db::SlotStore;
use serde::Serialize;
use tracing::debug;

use super::store::get_store;
use crate::error::ApiResult;
use crate::state::AppState;

/// Store search with optional city and category facets.
pub fn search_stores<S: SlotStore>(
    state: &AppState<S>,
    filter: &StoreFilter,
) -> ApiResult<Vec<Store>> {
    let filter = StoreFilter {
        query: validate_search_query(&filter.query)?,
        ..filter.clone()
    };
    let results: Vec<Store> = core_search::search_stores(state.stores(), &filter)
        .into_iter()
        .cloned()
        .collect();
    debug!(query = %filter.query, results = results.len(), "Store search");
    Ok(results)
}

/// Autocomplete entries for the hero search box.
pub fn suggest<S: SlotStore>(state: &AppState<S>, query: &str) -> ApiResult<Vec<Suggestion>> {
    let query = validate_search_query(query)?;
    Ok(core_search::suggest(&query, state.categories(), state.stores()))
}

pub fn stores_in_category<S: SlotStore>(state: &AppState<S>, category_id: &str) -> Vec<Store> {
    core_search::stores_in_category(state.stores(), category_id)
        .into_iter()
        .cloned()
        .collect()
}

pub fn latest_stores<S: SlotStore>(state: &AppState<S>) -> Vec<Store> {
    core_search::latest_stores(state.stores())
        .into_iter()
        .cloned()
        .collect()
}

/// Category label of a store, `None` when the store or its category is gone.
pub fn category_name_for_store<S: SlotStore>(state: &AppState<S>, store_id: &str) -> Option<String> {
    let store = state.stores().iter().find(|s| s.id == store_id)?;
    core_search::category_name(state.categories(), &store.category_id).map(str::to_string)
}

// =============================================================================
// Page Views
// =============================================================================

/// Everything the store detail page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePage {
    pub store: Store,
    pub category: Option<Category>,
    /// Approved posts plus the viewer's own pending ones.
    pub posts: Vec<StorePost>,
    pub comments: Vec<Comment>,
    /// The viewer's own rating, if any.
    pub my_rating: Option<u8>,
    pub whatsapp_link: String,
}

pub fn store_page<S: SlotStore>(state: &AppState<S>, store_id: &str) -> ApiResult<StorePage> {
    let store = get_store(state, store_id)?;
    let viewer = state.current_user().map(|u| u.id.as_str());

    let posts: Vec<StorePost> = core_search::visible_posts_for_store(state.posts(), store_id, viewer)
        .into_iter()
        .cloned()
        .collect();
    let comments = posts
        .iter()
        .flat_map(|p| core_search::comments_for_post(state.comments(), &p.id))
        .cloned()
        .collect();

    Ok(StorePage {
        category: state
            .categories()
            .iter()
            .find(|c| c.id == store.category_id)
            .cloned(),
        my_rating: viewer.and_then(|id| store.rating_by(id)),
        whatsapp_link: store.whatsapp_link(),
        posts,
        comments,
        store,
    })
}

/// The signed-in user's activity for the profile page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub posts: Vec<StorePost>,
    pub comments: Vec<Comment>,
    pub unread_messages: usize,
}

pub fn my_activity<S: SlotStore>(state: &AppState<S>) -> Activity {
    let Some(user) = state.current_user() else {
        return Activity::default();
    };
    Activity {
        posts: core_search::posts_by_author(state.posts(), &user.id)
            .into_iter()
            .cloned()
            .collect(),
        comments: core_search::comments_by_author(state.comments(), &user.id)
            .into_iter()
            .cloned()
            .collect(),
        unread_messages: core_search::unread_count(state.messages(), &user.id),
    }
}

/// Header data of the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub tabs: Vec<AdminTab>,
    pub pending_reports: bool,
    pub pending_posts: usize,
    pub stores: usize,
    pub users: usize,
}

pub fn dashboard_summary<S: SlotStore>(state: &AppState<S>) -> DashboardSummary {
    DashboardSummary {
        tabs: admin_tabs(state.current_user()),
        pending_reports: core_search::has_pending_reports(state.reports()),
        pending_posts: core_search::pending_posts(state.posts()).len(),
        stores: state.stores().len(),
        users: state.users().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{post, store, testing};
    use binaa_core::validation::PostForm;
    use binaa_core::Province;

    #[tokio::test]
    async fn test_search_is_repeatable() {
        let state = testing::state().await;
        let filter = StoreFilter::query("الحديد");

        let first = search_stores(&state, &filter).unwrap();
        let second = search_stores(&state, &filter).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, "1");
    }

    #[tokio::test]
    async fn test_search_facets_combine() {
        let state = testing::state().await;

        let all = search_stores(&state, &StoreFilter::default()).unwrap();
        assert_eq!(all.len(), 2);

        let aleppo = StoreFilter::default().with_city(Province::Aleppo);
        assert_eq!(search_stores(&state, &aleppo).unwrap()[0].id, "2");

        let none = StoreFilter::default()
            .with_city(Province::Aleppo)
            .with_category("2");
        assert!(search_stores(&state, &none).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overlong_query_rejected() {
        let state = testing::state().await;
        let long = "س".repeat(101);
        assert!(search_stores(&state, &StoreFilter::query(long.clone())).is_err());
        assert!(suggest(&state, &long).is_err());
    }

    #[tokio::test]
    async fn test_suggest_categories_first() {
        let state = testing::state().await;
        let suggestions = suggest(&state, "حديد").unwrap();
        assert!(matches!(suggestions[0], Suggestion::Category { ref id, .. } if id == "2"));
        assert!(matches!(suggestions[1], Suggestion::Store { ref id, .. } if id == "1"));
    }

    #[tokio::test]
    async fn test_store_page() {
        let mut state = testing::member_state("samir").await;
        store::rate_store(&mut state, "1", 4).await.unwrap();
        let topic = post::submit_post(
            &mut state,
            "1",
            &PostForm {
                content: "متى تفتحون؟".to_string(),
                image_url: None,
            },
        )
        .await
        .unwrap();
        crate::commands::comment::add_comment(&mut state, &topic.id, "الساعة 8")
            .await
            .unwrap();

        let page = store_page(&state, "1").unwrap();
        assert_eq!(page.category.map(|c| c.name).as_deref(), Some("حديد"));
        assert_eq!(page.my_rating, Some(4));
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.comments.len(), 1);
        assert_eq!(page.whatsapp_link, "https://wa.me/963912345678");

        let activity = my_activity(&state);
        assert_eq!(activity.posts.len(), 1);
        assert_eq!(activity.comments.len(), 1);
    }

    #[tokio::test]
    async fn test_dashboard_summary_tabs() {
        let state = testing::state().await;
        assert!(dashboard_summary(&state).tabs.is_empty());

        let state = testing::admin_state().await;
        let summary = dashboard_summary(&state);
        assert_eq!(summary.tabs.len(), 7);
        assert!(!summary.pending_reports);
        assert_eq!(summary.stores, 2);
    }
}
