//! # binaa-core: Pure Domain Logic for the Binaa Directory
//!
//! This crate is the **heart** of the Binaa building-materials directory. It
//! contains every domain rule as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Binaa Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Rendering layer (out of scope)                  │   │
//! │  │    Home ──► Search ──► Store detail ──► Admin dashboard        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ user actions                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               binaa-app (AppState + commands)                   │   │
//! │  │    register, login, rate_store, submit_post, toggle_dark_mode  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ binaa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌───────────┐ ┌────────┐ ┌────────┐ ┌────────┐  │   │
//! │  │   │  types  │ │validation │ │ theme  │ │ search │ │ access │  │   │
//! │  │   │ Store   │ │  forms →  │ │ tokens │ │ filter │ │ routes │  │   │
//! │  │   │ User    │ │  drafts   │ │ table  │ │ suggest│ │ gate   │  │   │
//! │  │   └─────────┘ └───────────┘ └────────┘ └────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    binaa-db (Slot storage)                      │   │
//! │  │              one JSON slot per collection, SQLite               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Store, Category, User, StorePost, ...) and enums
//! - [`error`] - Domain error types
//! - [`validation`] - Form parsing into fully populated drafts
//! - [`theme`] - Theme token lookup table
//! - [`search`] - Store search, facets, autocomplete and listings
//! - [`rating`] - One-rating-per-user bookkeeping and mean calculation
//! - [`access`] - Role gate and route table
//!
//! ## Example Usage
//!
//! ```rust
//! use binaa_core::theme::resolve_theme_name;
//! use binaa_core::AppTheme;
//!
//! // Unknown theme names fall back to the default palette
//! let tokens = resolve_theme_name("NOT_A_THEME", false);
//! assert_eq!(tokens, binaa_core::theme::resolve_theme(AppTheme::ModernBlue, false));
//! assert_eq!(tokens.hex, "#2563eb");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod rating;
pub mod search;
pub mod theme;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed ID of the reserved super-admin account.
pub const SUPER_ADMIN_ID: &str = "admin-super-0";

/// Reserved super-admin username.
///
/// A user matching this username (or [`SUPER_ADMIN_EMAIL`]) counts as the
/// super-admin when the user list is loaded; otherwise one is seeded.
pub const SUPER_ADMIN_USERNAME: &str = "ادمن";

/// Reserved super-admin login e-mail (a bare word so `admin` can log in).
pub const SUPER_ADMIN_EMAIL: &str = "admin";

/// Seeded super-admin password.
pub const SUPER_ADMIN_PASSWORD: &str = "123";

/// Maximum category names offered by autocomplete.
pub const MAX_CATEGORY_SUGGESTIONS: usize = 2;

/// Maximum store names offered by autocomplete.
pub const MAX_STORE_SUGGESTIONS: usize = 3;

/// Number of stores shown in the "latest stores" strip.
pub const LATEST_STORES_LIMIT: usize = 6;

/// Placeholder image given to stores created without one.
pub const DEFAULT_STORE_IMAGE: &str = "https://picsum.photos/seed/store/800/600";
