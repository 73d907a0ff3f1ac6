//! # Domain Types
//!
//! Core domain types used throughout the Binaa directory.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │◄ ─│      Store      │◄ ─│   StorePost     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  category_id ┄┄ │   │  store_id ┄┄┄┄  │       │
//! │  │  icon_name      │   │  city           │   │  author_id ┄┄┄  │       │
//! │  │  color          │   │  rating/ratings │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └───────▲─────────┘       │
//! │                                                      ┆                  │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌───────┴─────────┐       │
//! │  │      User       │   │     Report      │   │    Comment      │       │
//! │  │  role / status  │   │  target_id ┄┄┄  │   │  post_id ┄┄┄┄   │       │
//! │  │  permissions    │   │  target_type    │   │  store_id ┄┄┄   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┄┄ weak reference: a plain string id, never checked                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Every record serializes with camelCase keys and every enum with the label
//! the persisted slots have always used (Arabic labels for provinces, user
//! statuses and currencies). Changing a rename here changes the slot format.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;

/// Generates a fresh opaque entity ID.
///
/// Uniqueness is never verified against existing collections.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Province
// =============================================================================

/// The fourteen Syrian provinces a store can be located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Province {
    #[serde(rename = "دمشق")]
    Damascus,
    #[serde(rename = "ريف دمشق")]
    DamascusCountryside,
    #[serde(rename = "حلب")]
    Aleppo,
    #[serde(rename = "حمص")]
    Homs,
    #[serde(rename = "حماة")]
    Hama,
    #[serde(rename = "اللاذقية")]
    Latakia,
    #[serde(rename = "طروطوس")]
    Tartus,
    #[serde(rename = "إدلب")]
    Idlib,
    #[serde(rename = "الرقة")]
    Raqqa,
    #[serde(rename = "دير الزور")]
    DeirEzZor,
    #[serde(rename = "الحسكة")]
    Hasakah,
    #[serde(rename = "درعا")]
    Daraa,
    #[serde(rename = "السويداء")]
    Suwayda,
    #[serde(rename = "القنيطرة")]
    Quneitra,
}

impl Province {
    /// All provinces in display order (used to fill the city filter).
    pub const ALL: [Province; 14] = [
        Province::Damascus,
        Province::DamascusCountryside,
        Province::Aleppo,
        Province::Homs,
        Province::Hama,
        Province::Latakia,
        Province::Tartus,
        Province::Idlib,
        Province::Raqqa,
        Province::DeirEzZor,
        Province::Hasakah,
        Province::Daraa,
        Province::Suwayda,
        Province::Quneitra,
    ];

    /// The Arabic label, identical to the serialized value.
    pub const fn label(&self) -> &'static str {
        match self {
            Province::Damascus => "دمشق",
            Province::DamascusCountryside => "ريف دمشق",
            Province::Aleppo => "حلب",
            Province::Homs => "حمص",
            Province::Hama => "حماة",
            Province::Latakia => "اللاذقية",
            Province::Tartus => "طروطوس",
            Province::Idlib => "إدلب",
            Province::Raqqa => "الرقة",
            Province::DeirEzZor => "دير الزور",
            Province::Hasakah => "الحسكة",
            Province::Daraa => "درعا",
            Province::Suwayda => "السويداء",
            Province::Quneitra => "القنيطرة",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Province {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Province::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "city".to_string(),
                allowed: Province::ALL.iter().map(|p| p.label().to_string()).collect(),
            })
    }
}

// =============================================================================
// Coordinates & Rating
// =============================================================================

/// Geographic position of a store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Central Damascus, used when a store form carries no location.
    pub const DEFAULT: Coordinates = Coordinates {
        lat: 33.5138,
        lng: 36.2965,
    };
}

impl Default for Coordinates {
    fn default() -> Self {
        Coordinates::DEFAULT
    }
}

/// A single user's star rating (1 to 5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: String,
    pub value: u8,
}

// =============================================================================
// Category
// =============================================================================

/// Icon shown next to a category.
///
/// A closed set: each variant maps to one concrete icon in the rendering
/// layer. Slot contents naming an icon outside the set load as
/// [`CategoryIcon::Layers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[ts(export)]
pub enum CategoryIcon {
    #[default]
    Layers,
    HardHat,
    Waves,
    Paintbrush,
    Pipette,
    Zap,
    Hammer,
    Wrench,
    Truck,
    BrickWall,
    Lightbulb,
    Droplets,
}

impl CategoryIcon {
    pub const ALL: [CategoryIcon; 12] = [
        CategoryIcon::Layers,
        CategoryIcon::HardHat,
        CategoryIcon::Waves,
        CategoryIcon::Paintbrush,
        CategoryIcon::Pipette,
        CategoryIcon::Zap,
        CategoryIcon::Hammer,
        CategoryIcon::Wrench,
        CategoryIcon::Truck,
        CategoryIcon::BrickWall,
        CategoryIcon::Lightbulb,
        CategoryIcon::Droplets,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            CategoryIcon::Layers => "Layers",
            CategoryIcon::HardHat => "HardHat",
            CategoryIcon::Waves => "Waves",
            CategoryIcon::Paintbrush => "Paintbrush",
            CategoryIcon::Pipette => "Pipette",
            CategoryIcon::Zap => "Zap",
            CategoryIcon::Hammer => "Hammer",
            CategoryIcon::Wrench => "Wrench",
            CategoryIcon::Truck => "Truck",
            CategoryIcon::BrickWall => "BrickWall",
            CategoryIcon::Lightbulb => "Lightbulb",
            CategoryIcon::Droplets => "Droplets",
        }
    }
}

impl FromStr for CategoryIcon {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryIcon::ALL
            .into_iter()
            .find(|icon| icon.name() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "icon".to_string(),
                allowed: CategoryIcon::ALL.iter().map(|i| i.name().to_string()).collect(),
            })
    }
}

impl<'de> Deserialize<'de> for CategoryIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// A store category (cement, steel, paint, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon_name: CategoryIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Presentation color token (e.g. `bg-blue-100 text-blue-600`).
    pub color: String,
}

// =============================================================================
// Store
// =============================================================================

/// A listed building-materials store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Weak reference to [`Category::id`].
    pub category_id: String,
    pub city: Province,
    pub neighborhood: String,
    /// Image URLs or data URLs, first one is the cover.
    pub images: Vec<String>,
    /// WhatsApp contact handle (international number without `+`).
    pub whatsapp: String,
    pub location: Coordinates,
    pub working_hours: String,
    /// Mean of `ratings`, one decimal. Derived, see [`crate::rating`].
    pub rating: f64,
    pub ratings: Vec<Rating>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Store {
    /// Returns the rating given by `user_id`, if any.
    pub fn rating_by(&self, user_id: &str) -> Option<u8> {
        self.ratings
            .iter()
            .find(|r| r.user_id == user_id)
            .map(|r| r.value)
    }

    /// WhatsApp deep link for the contact button.
    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }
}

// =============================================================================
// Users
// =============================================================================

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    SuperAdmin,
    #[default]
    Member,
}

impl UserRole {
    /// Admin and super-admin are staff roles.
    pub const fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }
}

/// Moderation status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UserStatus {
    #[serde(rename = "قيد الانتظار")]
    Pending,
    #[serde(rename = "مقبول")]
    Approved,
    #[serde(rename = "مرفوض")]
    Rejected,
}

impl UserStatus {
    /// The ban/unban switch used in the members tab.
    ///
    /// Approved accounts become rejected; pending and rejected accounts
    /// become approved.
    pub const fn toggled(self) -> Self {
        match self {
            UserStatus::Approved => UserStatus::Rejected,
            UserStatus::Pending | UserStatus::Rejected => UserStatus::Approved,
        }
    }
}

/// Fine-grained permission flags carried by every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub can_manage_categories: bool,
    pub can_manage_stores: bool,
    pub can_ban_users: bool,
    pub can_manage_reports: bool,
    pub can_delete_posts: bool,
    pub can_delete_comments: bool,
    pub can_edit_settings: bool,
}

impl UserPermissions {
    /// Every flag set (super-admin).
    pub const fn all() -> Self {
        UserPermissions {
            can_manage_categories: true,
            can_manage_stores: true,
            can_ban_users: true,
            can_manage_reports: true,
            can_delete_posts: true,
            can_delete_comments: true,
            can_edit_settings: true,
        }
    }

    /// No flag set (new members).
    pub const fn none() -> Self {
        UserPermissions {
            can_manage_categories: false,
            can_manage_stores: false,
            can_ban_users: false,
            can_manage_reports: false,
            can_delete_posts: false,
            can_delete_comments: false,
            can_edit_settings: false,
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    /// Stored and compared as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    #[ts(as = "String")]
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub permissions: UserPermissions,
}

impl User {
    /// The reserved super-admin account seeded on first load.
    pub fn super_admin(join_date: DateTime<Utc>) -> Self {
        User {
            id: crate::SUPER_ADMIN_ID.to_string(),
            email: crate::SUPER_ADMIN_EMAIL.to_string(),
            username: crate::SUPER_ADMIN_USERNAME.to_string(),
            password: Some(crate::SUPER_ADMIN_PASSWORD.to_string()),
            role: UserRole::SuperAdmin,
            status: UserStatus::Approved,
            join_date,
            avatar: None,
            bio: None,
            phone: None,
            permissions: UserPermissions::all(),
        }
    }

    /// True when this account holds the reserved super-admin identity.
    pub fn is_reserved_super_admin(&self) -> bool {
        self.username == crate::SUPER_ADMIN_USERNAME || self.email == crate::SUPER_ADMIN_EMAIL
    }

    pub fn is_approved(&self) -> bool {
        self.status == UserStatus::Approved
    }

    /// True when `identifier` names this account by username or e-mail.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.username == identifier || self.email == identifier
    }

    /// First letter of the username, upper-cased, for avatar placeholders.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// Posts & Comments
// =============================================================================

/// Moderation status of a store post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Pending,
    Approved,
}

impl PostStatus {
    pub const fn toggled(self) -> Self {
        match self {
            PostStatus::Pending => PostStatus::Approved,
            PostStatus::Approved => PostStatus::Pending,
        }
    }
}

/// A topic or question posted on a store page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorePost {
    pub id: String,
    /// Weak reference to [`Store::id`].
    pub store_id: String,
    /// Weak reference to [`User::id`].
    pub author_id: String,
    /// Username at posting time (never refreshed).
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: PostStatus,
    pub ratings: Vec<Rating>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A comment under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    pub author_id: String,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub content: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    /// Reserved for threaded replies; nothing sets it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

// =============================================================================
// Moderation
// =============================================================================

/// What a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportTarget {
    Post,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Resolved,
}

/// A user complaint about a post or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub target_id: String,
    pub target_type: ReportTarget,
    pub reason: String,
    pub status: ReportStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Audit entry for a successful administrative action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ActionLog {
    pub id: String,
    pub admin_id: String,
    pub admin_name: String,
    pub action: String,
    pub details: String,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

/// A direct message between two accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InternalMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: String,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Settings
// =============================================================================

/// Display currency for prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Currency {
    #[default]
    #[serde(rename = "ليرة سورية")]
    Syp,
    #[serde(rename = "دولار")]
    Usd,
}

/// The nine selectable color themes.
///
/// Unknown identifiers (in slots or from callers) resolve to the first
/// theme, [`AppTheme::ModernBlue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppTheme {
    #[default]
    ModernBlue,
    RoyalGold,
    EmeraldCity,
    NeonCyber,
    RoseGarden,
    OceanBreeze,
    LavaFlow,
    SpaceNebula,
    AutumnLeaves,
}

impl AppTheme {
    pub const ALL: [AppTheme; 9] = [
        AppTheme::ModernBlue,
        AppTheme::RoyalGold,
        AppTheme::EmeraldCity,
        AppTheme::NeonCyber,
        AppTheme::RoseGarden,
        AppTheme::OceanBreeze,
        AppTheme::LavaFlow,
        AppTheme::SpaceNebula,
        AppTheme::AutumnLeaves,
    ];

    /// The identifier as stored in settings.
    pub const fn id(&self) -> &'static str {
        match self {
            AppTheme::ModernBlue => "MODERN_BLUE",
            AppTheme::RoyalGold => "ROYAL_GOLD",
            AppTheme::EmeraldCity => "EMERALD_CITY",
            AppTheme::NeonCyber => "NEON_CYBER",
            AppTheme::RoseGarden => "ROSE_GARDEN",
            AppTheme::OceanBreeze => "OCEAN_BREEZE",
            AppTheme::LavaFlow => "LAVA_FLOW",
            AppTheme::SpaceNebula => "SPACE_NEBULA",
            AppTheme::AutumnLeaves => "AUTUMN_LEAVES",
        }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AppTheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AppTheme::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "theme".to_string(),
                allowed: AppTheme::ALL.iter().map(|t| t.id().to_string()).collect(),
            })
    }
}

impl<'de> Deserialize<'de> for AppTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// The application-wide settings singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub app_name: String,
    pub currency: Currency,
    /// SYP per USD.
    pub exchange_rate: f64,
    /// Emoji or image (data) URL.
    pub app_logo: String,
    pub owner_whatsapp: String,
    pub admin_email: String,
    pub admin_phone: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub notifications_enabled: bool,
    pub is_dark_mode: bool,
    pub auto_approve_posts: bool,
    pub theme: AppTheme,
}

impl AppSettings {
    /// True when the logo is an image reference rather than an emoji.
    pub fn logo_is_image(&self) -> bool {
        self.app_logo.chars().count() > 10
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            app_name: "دليل البناء".to_string(),
            currency: Currency::Syp,
            exchange_rate: 15000.0,
            app_logo: "🏗️".to_string(),
            owner_whatsapp: "963900000000".to_string(),
            admin_email: "support@binaaguide.com".to_string(),
            admin_phone: "+963 11 000 0000".to_string(),
            hero_title: "ابحث عن أفضل مواد البناء في منطقتك".to_string(),
            hero_subtitle: "دليلك الشامل لمتاجر الإسمنت والحديد في سوريا".to_string(),
            notifications_enabled: false,
            is_dark_mode: false,
            auto_approve_posts: true,
            theme: AppTheme::ModernBlue,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_serializes_as_arabic_label() {
        let json = serde_json::to_string(&Province::Aleppo).unwrap();
        assert_eq!(json, "\"حلب\"");

        let back: Province = serde_json::from_str("\"ريف دمشق\"").unwrap();
        assert_eq!(back, Province::DamascusCountryside);
    }

    #[test]
    fn test_province_from_str() {
        assert_eq!("حمص".parse::<Province>().unwrap(), Province::Homs);
        assert!("Paris".parse::<Province>().is_err());
    }

    #[test]
    fn test_unknown_theme_deserializes_to_default() {
        let theme: AppTheme = serde_json::from_str("\"DISCO_FEVER\"").unwrap();
        assert_eq!(theme, AppTheme::ModernBlue);

        let theme: AppTheme = serde_json::from_str("\"LAVA_FLOW\"").unwrap();
        assert_eq!(theme, AppTheme::LavaFlow);
    }

    #[test]
    fn test_unknown_icon_deserializes_to_layers() {
        let icon: CategoryIcon = serde_json::from_str("\"Sparkles\"").unwrap();
        assert_eq!(icon, CategoryIcon::Layers);
        assert!("Sparkles".parse::<CategoryIcon>().is_err());
    }

    #[test]
    fn test_user_status_toggle() {
        assert_eq!(UserStatus::Approved.toggled(), UserStatus::Rejected);
        assert_eq!(UserStatus::Rejected.toggled(), UserStatus::Approved);
        assert_eq!(UserStatus::Pending.toggled(), UserStatus::Approved);
    }

    #[test]
    fn test_user_wire_shape() {
        let user = User::super_admin(Utc::now());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["role"], "SUPER_ADMIN");
        assert_eq!(value["status"], "مقبول");
        assert_eq!(value["permissions"]["canEditSettings"], true);
        assert!(value.get("avatar").is_none());
        assert!(value.get("joinDate").is_some());
    }

    #[test]
    fn test_settings_default() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, AppTheme::ModernBlue);
        assert!(settings.auto_approve_posts);
        assert!(!settings.is_dark_mode);
        assert!(!settings.logo_is_image());
    }

    #[test]
    fn test_user_initial() {
        let mut user = User::super_admin(Utc::now());
        user.username = "ali".to_string();
        assert_eq!(user.initial(), "A");
    }
}
