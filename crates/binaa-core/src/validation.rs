//! # Validation Module
//!
//! Form parsing for the Binaa directory.
//!
//! Every user-facing form arrives as a loosely typed `*Form` struct (strings,
//! optional fields). Before anything can enter the state store it is parsed
//! into a `*Draft`: trimmed, bounded, every enum resolved and every default
//! filled in. A draft is always complete; the command layer only adds IDs and
//! timestamps.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering layer                                              │
//! │  └── Required markers, immediate feedback                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Form ──parse()──► Draft  (or ValidationError)                     │
//! │  └── Provinces, icons and ratings checked against closed sets          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Commands (binaa-app)                                         │
//! │  └── Session/role checks, ID + timestamp, commit to state              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use binaa_core::validation::{RegisterForm, validate_rating};
//!
//! let draft = RegisterForm {
//!     username: " Ali ".into(),
//!     email: "ali@x.com".into(),
//!     password: "pw123".into(),
//! }
//! .parse()
//! .unwrap();
//! assert_eq!(draft.username, "Ali");
//!
//! assert!(validate_rating(6).is_err());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{CategoryIcon, Coordinates, Currency, Province, ReportTarget};
use crate::DEFAULT_STORE_IMAGE;

pub use crate::error::ValidationResult;

/// Color token for categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "bg-blue-100 text-blue-600";

const MAX_NAME_LEN: usize = 100;
const MAX_TEXT_LEN: usize = 5000;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// Field Helpers
// =============================================================================

/// Trims `value` and rejects it when blank or longer than `max` characters.
fn required(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    bounded(field, value, max)
}

fn bounded(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(value.to_string())
}

/// Trims an optional field, mapping blank to `None`.
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn email(field: &str, value: &str) -> ValidationResult<String> {
    let value = required(field, value, MAX_NAME_LEN)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(ValidationError::invalid_format(field, "must be an e-mail address")),
    }
}

fn coordinates(location: Coordinates) -> ValidationResult<Coordinates> {
    if !(-90.0..=90.0).contains(&location.lat) || !(-180.0..=180.0).contains(&location.lng) {
        return Err(ValidationError::invalid_format(
            "location",
            "latitude must be within ±90 and longitude within ±180",
        ));
    }
    Ok(location)
}

// =============================================================================
// Scalar Validators
// =============================================================================

/// Validates a star rating.
///
/// ## Rules
/// - Must be between 1 and 5 inclusive
pub fn validate_rating(value: i64) -> ValidationResult<u8> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        });
    }
    Ok(value as u8)
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    bounded("query", query.trim(), MAX_QUERY_LEN)
}

/// Validates comment text. Blank comments are rejected.
pub fn validate_comment(content: &str) -> ValidationResult<String> {
    required("content", content, MAX_TEXT_LEN)
}

// =============================================================================
// Accounts
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// The password is kept as typed; only blank passwords are rejected.
    pub fn parse(&self) -> ValidationResult<RegisterDraft> {
        if self.password.is_empty() {
            return Err(ValidationError::required("password"));
        }
        Ok(RegisterDraft {
            username: required("username", &self.username, MAX_NAME_LEN)?,
            email: email("email", &self.email)?,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileForm {
    pub fn parse(&self) -> ValidationResult<ProfileDraft> {
        let bio = optional(self.bio.as_deref());
        if let Some(bio) = &bio {
            bounded("bio", bio, MAX_TEXT_LEN)?;
        }
        Ok(ProfileDraft {
            username: required("username", &self.username, MAX_NAME_LEN)?,
            // The reserved super-admin logs in with a bare word, so only
            // blankness is checked here.
            email: required("email", &self.email, MAX_NAME_LEN)?,
            phone: optional(self.phone.as_deref()),
            bio,
            avatar: optional(self.avatar.as_deref()),
        })
    }
}

// =============================================================================
// Stores & Categories
// =============================================================================

/// The add/edit store form of the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: String,
    /// Province label, e.g. `دمشق`.
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub whatsapp: String,
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(default)]
    pub working_hours: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreDraft {
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub city: Province,
    pub neighborhood: String,
    pub images: Vec<String>,
    pub whatsapp: String,
    pub location: Coordinates,
    pub working_hours: String,
}

impl StoreForm {
    /// Parses the form.
    ///
    /// Missing images become the placeholder image and a missing location
    /// becomes [`Coordinates::DEFAULT`]. The WhatsApp handle keeps digits only.
    pub fn parse(&self) -> ValidationResult<StoreDraft> {
        let whatsapp: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        if whatsapp.is_empty() {
            return Err(ValidationError::required("whatsapp"));
        }

        let mut images: Vec<String> = self
            .images
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();
        if images.is_empty() {
            images.push(DEFAULT_STORE_IMAGE.to_string());
        }

        Ok(StoreDraft {
            name: required("name", &self.name, MAX_NAME_LEN)?,
            description: bounded("description", self.description.trim(), MAX_TEXT_LEN)?,
            category_id: required("categoryId", &self.category_id, MAX_NAME_LEN)?,
            city: self.city.parse()?,
            neighborhood: bounded("neighborhood", self.neighborhood.trim(), MAX_NAME_LEN)?,
            images,
            whatsapp,
            location: coordinates(self.location.unwrap_or_default())?,
            working_hours: bounded("workingHours", self.working_hours.trim(), MAX_NAME_LEN)?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub name: String,
    /// Icon name, e.g. `Paintbrush`.
    pub icon_name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub icon_name: CategoryIcon,
    pub image: Option<String>,
    pub color: String,
}

impl CategoryForm {
    /// Unknown icon names are rejected here; they never reach the store.
    pub fn parse(&self) -> ValidationResult<CategoryDraft> {
        Ok(CategoryDraft {
            name: required("name", &self.name, MAX_NAME_LEN)?,
            icon_name: self.icon_name.parse()?,
            image: optional(self.image.as_deref()),
            color: optional(self.color.as_deref())
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
        })
    }
}

// =============================================================================
// Community
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PostForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub content: String,
    pub image_url: Option<String>,
}

impl PostForm {
    /// A post needs text, an image, or both.
    pub fn parse(&self) -> ValidationResult<PostDraft> {
        let image_url = optional(self.image_url.as_deref());
        let content = bounded("content", self.content.trim(), MAX_TEXT_LEN)?;
        if content.is_empty() && image_url.is_none() {
            return Err(ValidationError::required("content"));
        }
        Ok(PostDraft { content, image_url })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    pub target_id: String,
    pub target_type: ReportTarget,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub target_id: String,
    pub target_type: ReportTarget,
    pub reason: String,
}

impl ReportForm {
    pub fn parse(&self) -> ValidationResult<ReportDraft> {
        Ok(ReportDraft {
            target_id: required("targetId", &self.target_id, MAX_NAME_LEN)?,
            target_type: self.target_type,
            reason: required("reason", &self.reason, MAX_TEXT_LEN)?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MessageForm {
    pub receiver_id: String,
    pub subject: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub receiver_id: String,
    pub subject: String,
    pub content: String,
}

impl MessageForm {
    pub fn parse(&self) -> ValidationResult<MessageDraft> {
        Ok(MessageDraft {
            receiver_id: required("receiverId", &self.receiver_id, MAX_NAME_LEN)?,
            subject: required("subject", &self.subject, MAX_NAME_LEN)?,
            content: required("content", &self.content, MAX_TEXT_LEN)?,
        })
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Application name and logo (super-admin only).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IdentityForm {
    pub app_name: String,
    pub app_logo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityDraft {
    pub app_name: String,
    pub app_logo: String,
}

impl IdentityForm {
    pub fn parse(&self) -> ValidationResult<IdentityDraft> {
        let app_logo = self.app_logo.trim();
        if app_logo.is_empty() {
            return Err(ValidationError::required("appLogo"));
        }
        Ok(IdentityDraft {
            app_name: required("appName", &self.app_name, MAX_NAME_LEN)?,
            app_logo: app_logo.to_string(),
        })
    }
}

/// Contact details and hero texts shown on the public pages.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub owner_whatsapp: String,
    pub admin_email: String,
    pub admin_phone: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub currency: Currency,
    pub exchange_rate: f64,
    pub auto_approve_posts: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub owner_whatsapp: String,
    pub admin_email: String,
    pub admin_phone: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub currency: Currency,
    pub exchange_rate: f64,
    pub auto_approve_posts: bool,
}

impl ContactForm {
    pub fn parse(&self) -> ValidationResult<ContactDraft> {
        if !(self.exchange_rate.is_finite() && self.exchange_rate > 0.0) {
            return Err(ValidationError::invalid_format(
                "exchangeRate",
                "must be a positive number",
            ));
        }
        let owner_whatsapp: String = self
            .owner_whatsapp
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if owner_whatsapp.is_empty() {
            return Err(ValidationError::required("ownerWhatsapp"));
        }
        Ok(ContactDraft {
            owner_whatsapp,
            admin_email: email("adminEmail", &self.admin_email)?,
            admin_phone: required("adminPhone", &self.admin_phone, MAX_NAME_LEN)?,
            hero_title: required("heroTitle", &self.hero_title, MAX_NAME_LEN * 2)?,
            hero_subtitle: bounded("heroSubtitle", self.hero_subtitle.trim(), MAX_NAME_LEN * 2)?,
            currency: self.currency,
            exchange_rate: self.exchange_rate,
            auto_approve_posts: self.auto_approve_posts,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_trimmed_and_bounded() {
        assert_eq!(validate_search_query("  حديد ").unwrap(), "حديد");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"س".repeat(100)).is_ok());
        assert!(validate_search_query(&"س".repeat(101)).is_err());
    }

    fn store_form() -> StoreForm {
        StoreForm {
            name: "  مؤسسة النور  ".to_string(),
            description: "إسمنت وبلوك".to_string(),
            category_id: "1".to_string(),
            city: "حماة".to_string(),
            neighborhood: "الحاضر".to_string(),
            images: vec![],
            whatsapp: "+963 933 111 222".to_string(),
            location: None,
            working_hours: "8:00 AM - 5:00 PM".to_string(),
        }
    }

    #[test]
    fn test_validate_rating() {
        assert_eq!(validate_rating(1).unwrap(), 1);
        assert_eq!(validate_rating(5).unwrap(), 5);
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_register_form() {
        let form = RegisterForm {
            username: "Ali".to_string(),
            email: "ali@x.com".to_string(),
            password: "pw123".to_string(),
        };
        assert!(form.parse().is_ok());

        let bad = RegisterForm {
            email: "not-an-email".to_string(),
            ..form.clone()
        };
        assert!(matches!(bad.parse(), Err(ValidationError::InvalidFormat { .. })));

        let blank = RegisterForm {
            username: "   ".to_string(),
            ..form
        };
        assert!(matches!(blank.parse(), Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_store_form_fills_defaults() {
        let draft = store_form().parse().unwrap();

        assert_eq!(draft.name, "مؤسسة النور");
        assert_eq!(draft.city, Province::Hama);
        assert_eq!(draft.whatsapp, "963933111222");
        assert_eq!(draft.images, vec![DEFAULT_STORE_IMAGE.to_string()]);
        assert_eq!(draft.location, Coordinates::DEFAULT);
    }

    #[test]
    fn test_store_form_rejects_unknown_city() {
        let form = StoreForm {
            city: "Berlin".to_string(),
            ..store_form()
        };
        assert!(matches!(form.parse(), Err(ValidationError::NotAllowed { .. })));
    }

    #[test]
    fn test_store_form_rejects_bad_location() {
        let form = StoreForm {
            location: Some(Coordinates { lat: 123.0, lng: 0.0 }),
            ..store_form()
        };
        assert!(form.parse().is_err());
    }

    #[test]
    fn test_category_form_rejects_unknown_icon() {
        let form = CategoryForm {
            name: "بلاط".to_string(),
            icon_name: "Sparkles".to_string(),
            image: None,
            color: None,
        };
        assert!(matches!(form.parse(), Err(ValidationError::NotAllowed { .. })));

        let form = CategoryForm {
            icon_name: "Hammer".to_string(),
            ..form
        };
        let draft = form.parse().unwrap();
        assert_eq!(draft.icon_name, CategoryIcon::Hammer);
        assert_eq!(draft.color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_post_form_needs_text_or_image() {
        assert!(PostForm::default().parse().is_err());

        let image_only = PostForm {
            content: "  ".to_string(),
            image_url: Some("data:image/png;base64,AAAA".to_string()),
        };
        assert!(image_only.parse().is_ok());
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment("   ").is_err());
        assert_eq!(validate_comment(" شكراً ").unwrap(), "شكراً");
    }

    #[test]
    fn test_contact_form_rate_must_be_positive() {
        let form = ContactForm {
            owner_whatsapp: "963900000000".to_string(),
            admin_email: "support@binaaguide.com".to_string(),
            admin_phone: "+963 11 000 0000".to_string(),
            hero_title: "عنوان".to_string(),
            hero_subtitle: String::new(),
            currency: Currency::Usd,
            exchange_rate: 0.0,
            auto_approve_posts: false,
        };
        assert!(form.parse().is_err());

        let form = ContactForm {
            exchange_rate: 14500.0,
            ..form
        };
        assert_eq!(form.parse().unwrap().currency, Currency::Usd);
    }
}
