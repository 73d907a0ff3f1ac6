//! # Filtering & Search
//!
//! Pure functions over in-memory collections: the store search with its
//! city/category facets, the autocomplete dropdown, and the small listings
//! the pages are built from.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stores ──► text match ──AND──► city facet ──AND──► category facet     │
//! │             (name or            (exact, None       (exact id, None     │
//! │              description)        = all)             = all)              │
//! │                                                       │                 │
//! │                                                       ▼                 │
//! │                                    matches in input order, unranked     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here allocates new entities; every function borrows its input and
//! returns references into it, so calling twice with the same arguments
//! yields the same ordered result.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{
    Category, Comment, InternalMessage, Province, Report, ReportStatus, Store, StorePost,
    PostStatus,
};
use crate::{LATEST_STORES_LIMIT, MAX_CATEGORY_SUGGESTIONS, MAX_STORE_SUGGESTIONS};

// =============================================================================
// Store Search
// =============================================================================

/// Search criteria from the search page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreFilter {
    /// Free text; empty matches everything.
    #[serde(default)]
    pub query: String,
    /// `None` means every province.
    #[serde(default)]
    pub city: Option<Province>,
    /// `None` means every category.
    #[serde(default)]
    pub category_id: Option<String>,
}

impl StoreFilter {
    pub fn query(query: impl Into<String>) -> Self {
        StoreFilter {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_city(mut self, city: Province) -> Self {
        self.city = Some(city);
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// True when `store` passes every criterion.
    pub fn matches(&self, store: &Store) -> bool {
        let needle = self.query.to_lowercase();
        let text = needle.is_empty()
            || store.name.to_lowercase().contains(&needle)
            || store.description.to_lowercase().contains(&needle);
        let city = self.city.map_or(true, |c| c == store.city);
        let category = self
            .category_id
            .as_deref()
            .map_or(true, |id| id == store.category_id);
        text && city && category
    }
}

/// Returns the stores matching `filter`, in their original order.
pub fn search_stores<'a>(stores: &'a [Store], filter: &StoreFilter) -> Vec<&'a Store> {
    stores.iter().filter(|s| filter.matches(s)).collect()
}

// =============================================================================
// Autocomplete
// =============================================================================

/// One entry of the autocomplete dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Suggestion {
    Category { id: String, name: String },
    Store { id: String, name: String },
}

impl Suggestion {
    pub fn name(&self) -> &str {
        match self {
            Suggestion::Category { name, .. } | Suggestion::Store { name, .. } => name,
        }
    }
}

/// Autocomplete for the hero search box.
///
/// Category-name matches come first (at most two), then store-name matches
/// (at most three). Each list is truncated on its own. A blank query yields
/// nothing.
pub fn suggest(query: &str, categories: &[Category], stores: &[Store]) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let categories = categories
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .take(MAX_CATEGORY_SUGGESTIONS)
        .map(|c| Suggestion::Category {
            id: c.id.clone(),
            name: c.name.clone(),
        });
    let stores = stores
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .take(MAX_STORE_SUGGESTIONS)
        .map(|s| Suggestion::Store {
            id: s.id.clone(),
            name: s.name.clone(),
        });

    categories.chain(stores).collect()
}

// =============================================================================
// Listings
// =============================================================================

/// Stores of one category, in list order.
pub fn stores_in_category<'a>(stores: &'a [Store], category_id: &str) -> Vec<&'a Store> {
    stores.iter().filter(|s| s.category_id == category_id).collect()
}

/// The newest stores for the home page, most recent first.
pub fn latest_stores(stores: &[Store]) -> Vec<&Store> {
    let mut latest: Vec<&Store> = stores.iter().collect();
    // stable: equal timestamps keep list order
    latest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    latest.truncate(LATEST_STORES_LIMIT);
    latest
}

/// Resolves a store's weak category reference.
///
/// Returns `None` when the category was deleted.
pub fn category_name<'a>(categories: &'a [Category], category_id: &str) -> Option<&'a str> {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.name.as_str())
}

/// Posts shown on a store page: approved ones, plus the viewer's own
/// pending posts.
pub fn visible_posts_for_store<'a>(
    posts: &'a [StorePost],
    store_id: &str,
    viewer_id: Option<&str>,
) -> Vec<&'a StorePost> {
    posts
        .iter()
        .filter(|p| p.store_id == store_id)
        .filter(|p| p.status == PostStatus::Approved || Some(p.author_id.as_str()) == viewer_id)
        .collect()
}

pub fn comments_for_post<'a>(comments: &'a [Comment], post_id: &str) -> Vec<&'a Comment> {
    comments
        .iter()
        .filter(|c| c.post_id.as_deref() == Some(post_id))
        .collect()
}

pub fn posts_by_author<'a>(posts: &'a [StorePost], author_id: &str) -> Vec<&'a StorePost> {
    posts.iter().filter(|p| p.author_id == author_id).collect()
}

pub fn comments_by_author<'a>(comments: &'a [Comment], author_id: &str) -> Vec<&'a Comment> {
    comments.iter().filter(|c| c.author_id == author_id).collect()
}

pub fn pending_posts(posts: &[StorePost]) -> Vec<&StorePost> {
    posts
        .iter()
        .filter(|p| p.status == PostStatus::Pending)
        .collect()
}

/// Drives the red dot on the reports tab.
pub fn has_pending_reports(reports: &[Report]) -> bool {
    reports.iter().any(|r| r.status == ReportStatus::Pending)
}

/// Messages addressed to `user_id`, newest first as stored.
pub fn inbox_for<'a>(messages: &'a [InternalMessage], user_id: &str) -> Vec<&'a InternalMessage> {
    messages.iter().filter(|m| m.receiver_id == user_id).collect()
}

pub fn unread_count(messages: &[InternalMessage], user_id: &str) -> usize {
    messages
        .iter()
        .filter(|m| m.receiver_id == user_id && !m.is_read)
        .count()
}

// =============================================================================
// Unit Tests
// =============================================================================
