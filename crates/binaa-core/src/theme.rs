//! # Theme Resolver
//!
//! Maps a theme identifier and the dark-mode flag to the bag of presentation
//! tokens the rendering layer applies.
//!
//! ```text
//!   (AppTheme, is_dark) ──► THEME TABLE ──► ThemeTokens
//!                             9 × 2 rows      primary / primary_text /
//!                                             primary_hover / primary_light / hex
//! ```
//!
//! The hover effect is shared by both modes of a theme. The table is fixed at
//! compile time; there is no way to register a theme at runtime.

use serde::Serialize;
use ts_rs::TS;

use crate::types::AppTheme;

/// Alpha suffix appended to the theme hex for the ripple color (30%).
pub const RIPPLE_ALPHA: &str = "4D";

/// Presentation tokens for one theme in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    /// Background class for primary surfaces.
    pub primary: &'static str,
    pub primary_text: &'static str,
    pub primary_hover: &'static str,
    pub primary_light: &'static str,
    /// Theme color as `#rrggbb`.
    pub hex: &'static str,
}

impl ThemeTokens {
    /// The translucent ripple variant of [`ThemeTokens::hex`].
    pub fn ripple(&self) -> String {
        format!("{}{}", self.hex, RIPPLE_ALPHA)
    }
}

/// One row of the theme table: dark tokens, light tokens, shared hover.
struct Palette {
    primary: (&'static str, &'static str),
    text: (&'static str, &'static str),
    light: (&'static str, &'static str),
    hex: (&'static str, &'static str),
    hover: &'static str,
}

const fn palette(theme: AppTheme) -> Palette {
    match theme {
        AppTheme::RoyalGold => Palette {
            primary: ("bg-amber-500", "bg-amber-600"),
            text: ("text-amber-400", "text-amber-700"),
            light: ("bg-amber-500/10", "bg-amber-50"),
            hex: ("#f59e0b", "#d97706"),
            hover: "hover:brightness-110 hover:shadow-lg hover:shadow-amber-500/20",
        },
        AppTheme::EmeraldCity => Palette {
            primary: ("bg-emerald-500", "bg-emerald-600"),
            text: ("text-emerald-400", "text-emerald-700"),
            light: ("bg-emerald-500/10", "bg-emerald-50"),
            hex: ("#10b981", "#059669"),
            hover: "hover:-translate-y-1 hover:shadow-emerald-500/30 hover:shadow-xl",
        },
        AppTheme::NeonCyber => Palette {
            primary: ("bg-fuchsia-600", "bg-fuchsia-700"),
            text: ("text-fuchsia-400", "text-fuchsia-800"),
            light: ("bg-fuchsia-500/10", "bg-fuchsia-50"),
            hex: ("#c026d3", "#a21caf"),
            hover: "hover:shadow-[0_0_20px_rgba(192,38,211,0.5)] hover:scale-[1.02]",
        },
        AppTheme::RoseGarden => Palette {
            primary: ("bg-rose-500", "bg-rose-600"),
            text: ("text-rose-400", "text-rose-700"),
            light: ("bg-rose-500/10", "bg-rose-50"),
            hex: ("#f43f5e", "#e11d48"),
            hover: "hover:scale-105 hover:shadow-rose-500/20",
        },
        AppTheme::OceanBreeze => Palette {
            primary: ("bg-cyan-500", "bg-cyan-600"),
            text: ("text-cyan-400", "text-cyan-700"),
            light: ("bg-cyan-500/10", "bg-cyan-50"),
            hex: ("#06b6d4", "#0891b2"),
            hover: "hover:opacity-90 hover:backdrop-blur-sm",
        },
        AppTheme::LavaFlow => Palette {
            primary: ("bg-red-500", "bg-red-600"),
            text: ("text-red-400", "text-red-700"),
            light: ("bg-red-500/10", "bg-red-50"),
            hex: ("#ef4444", "#dc2626"),
            hover: "hover:shadow-[0_0_25px_rgba(220,38,38,0.5)] hover:brightness-125",
        },
        AppTheme::SpaceNebula => Palette {
            primary: ("bg-indigo-600", "bg-indigo-700"),
            text: ("text-indigo-400", "text-indigo-800"),
            light: ("bg-indigo-500/10", "bg-indigo-50"),
            hex: ("#4f46e5", "#4338ca"),
            hover: "hover:-translate-y-2 hover:rotate-1 hover:shadow-2xl hover:shadow-indigo-500/40",
        },
        AppTheme::AutumnLeaves => Palette {
            primary: ("bg-orange-700", "bg-orange-800"),
            text: ("text-orange-500", "text-orange-900"),
            light: ("bg-orange-500/10", "bg-orange-50"),
            hex: ("#c2410c", "#9a3412"),
            hover: "hover:scale-[1.03] hover:shadow-orange-900/40",
        },
        AppTheme::ModernBlue => Palette {
            primary: ("bg-blue-500", "bg-blue-600"),
            text: ("text-blue-400", "text-blue-700"),
            light: ("bg-blue-500/10", "bg-blue-50"),
            hex: ("#3b82f6", "#2563eb"),
            hover: "hover:brightness-110 hover:shadow-blue-500/20",
        },
    }
}

/// Resolves the token bag for `theme` in dark or light mode.
pub fn resolve_theme(theme: AppTheme, is_dark: bool) -> ThemeTokens {
    let p = palette(theme);
    let pick = |(dark, light): (&'static str, &'static str)| if is_dark { dark } else { light };
    ThemeTokens {
        primary: pick(p.primary),
        primary_text: pick(p.text),
        primary_hover: p.hover,
        primary_light: pick(p.light),
        hex: pick(p.hex),
    }
}

/// Like [`resolve_theme`], for identifiers coming from outside the type
/// system. Unrecognized names resolve to [`AppTheme::ModernBlue`].
pub fn resolve_theme_name(name: &str, is_dark: bool) -> ThemeTokens {
    resolve_theme(name.parse().unwrap_or_default(), is_dark)
}

// =============================================================================
// Unit Tests
// =============================================================================
