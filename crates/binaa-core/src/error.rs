//! # Error Types
//!
//! Domain-specific error types for binaa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  binaa-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule failures                           │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  binaa-db errors (separate crate)                                      │
//! │  └── DbError          - Slot storage failures                          │
//! │                                                                         │
//! │  App errors (in binaa-app)                                             │
//! │  └── ApiError         - What the rendering layer sees (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                          DbError ───┴──► ApiError → Rendering layer    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending ID or field in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by directory operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store cannot be found.
    ///
    /// ## When This Occurs
    /// - A `/store/:id` link points at a deleted store
    /// - Rating or posting against a stale store ID
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// No account matches the identifier/password pair.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account exists but is pending or rejected.
    ///
    /// ## When This Occurs
    /// - Registration ran under moderation and nobody approved the account yet
    /// - An admin banned the account from the members tab
    #[error("Account {username} is not approved")]
    AccountNotApproved { username: String },

    /// The action needs a signed-in user.
    #[error("You must be signed in to {action}")]
    NotAuthenticated { action: String },

    /// The signed-in user lacks the role for this action.
    #[error("Not allowed to {action}")]
    Forbidden { action: String },

    /// The reserved super-admin account cannot be banned or deleted.
    #[error("The account {0} is protected")]
    ProtectedAccount(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub fn not_authenticated(action: impl Into<String>) -> Self {
        CoreError::NotAuthenticated {
            action: action.into(),
        }
    }

    pub fn forbidden(action: impl Into<String>) -> Self {
        CoreError::Forbidden {
            action: action.into(),
        }
    }

    /// True for every `*NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::StoreNotFound(_)
                | CoreError::CategoryNotFound(_)
                | CoreError::PostNotFound(_)
                | CoreError::UserNotFound(_)
                | CoreError::ReportNotFound(_)
                | CoreError::MessageNotFound(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while a form is parsed into a draft, before anything reaches the
/// state store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. malformed e-mail or coordinates).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set (provinces, icons, themes).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. a username that is already taken).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for form parsing.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::StoreNotFound("s-1".to_string());
        assert_eq!(err.to_string(), "Store not found: s-1");
        assert!(err.is_not_found());

        let err = CoreError::not_authenticated("rate a store");
        assert_eq!(err.to_string(), "You must be signed in to rate a store");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "rating must be between 1 and 5");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("content").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
