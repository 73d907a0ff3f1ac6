//! # Platform Collaborators
//!
//! The outside world the state store talks to, kept behind small seams so a
//! windowed shell, the CLI and tests can each plug in their own:
//!
//! - [`Notifier`]: system notifications (permission query, request, display)
//! - [`RootStyle`]: the document root's dark flag and CSS custom properties
//! - [`encode_data_url`]: turns an attached file into an inline image URL

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use tracing::{debug, info};

// =============================================================================
// Notifications
// =============================================================================

/// Notification permission as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Never asked.
    #[default]
    Prompt,
    Granted,
    Denied,
}

/// System notification capability.
pub trait Notifier: Send + Sync {
    /// Current permission, without prompting.
    fn permission(&self) -> Permission;

    /// Prompts for permission. The answer may arrive later; callers must not
    /// assume the returned value is final.
    fn request_permission(&self) -> Permission;

    /// Displays a notification. Only called while permission is granted.
    fn show(&self, title: &str, body: &str, icon: &str);
}

/// Shows a notification when the user enabled them.
///
/// When enabled but not yet granted, permission is requested and nothing is
/// shown for this event; later events display once the grant is in place.
pub fn notify(notifier: &dyn Notifier, enabled: bool, title: &str, body: &str, icon: &str) {
    if !enabled {
        return;
    }
    let permission = notifier.permission();
    if permission != Permission::Granted {
        debug!(?permission, "Requesting notification permission");
        notifier.request_permission();
        return;
    }
    notifier.show(title, body, icon);
}

/// Notifier that writes notifications to the log.
///
/// Requests are granted immediately.
#[derive(Debug, Default)]
pub struct LogNotifier {
    permission: Mutex<Permission>,
}

impl LogNotifier {
    pub fn new(permission: Permission) -> Self {
        LogNotifier {
            permission: Mutex::new(permission),
        }
    }

    /// A notifier that already holds permission (headless shells).
    pub fn granted() -> Self {
        Self::new(Permission::Granted)
    }
}

impl Notifier for LogNotifier {
    fn permission(&self) -> Permission {
        self.permission.lock().map(|p| *p).unwrap_or_default()
    }

    fn request_permission(&self) -> Permission {
        match self.permission.lock() {
            Ok(mut permission) => {
                if *permission == Permission::Prompt {
                    *permission = Permission::Granted;
                }
                *permission
            }
            Err(_) => Permission::Denied,
        }
    }

    fn show(&self, title: &str, body: &str, icon: &str) {
        info!(%title, %body, %icon, "Notification");
    }
}

// =============================================================================
// Root Style
// =============================================================================

/// CSS custom property carrying the theme color.
pub const THEME_PRIMARY_PROPERTY: &str = "--theme-primary";

/// CSS custom property carrying the translucent ripple color.
pub const THEME_RIPPLE_PROPERTY: &str = "--theme-ripple";

/// Presentation state of the document root: the `dark` class and the CSS
/// custom properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootStyle {
    pub dark: bool,
    properties: BTreeMap<String, String>,
}

impl RootStyle {
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        self.properties.insert(name.to_string(), value.into());
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Renders the properties as a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// Data URLs
// =============================================================================

/// Encodes `bytes` as a `data:` URL.
///
/// ## Example
/// ```rust
/// use binaa_app_lib::platform::encode_data_url;
///
/// assert_eq!(encode_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
/// ```
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guesses an image MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Reads a file and returns it as a data URL.
pub fn file_to_data_url(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Encoding attachment");
    Ok(encode_data_url(mime_for_path(path), &bytes))
}

// =============================================================================
// Unit Tests
// =============================================================================
