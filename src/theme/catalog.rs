//! Static theme catalog.

use serde::Serialize;
use tracing::warn;

use crate::utils::DEFAULT_THEME;

/// Named bundle of color roles and a font stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub secondary: &'static str,
    pub gradient_start: &'static str,
    pub gradient_end: &'static str,
    pub sidebar: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text_main: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub soft_background: &'static str,
    pub font_family: &'static str,
}

pub const INDIGO: Theme = Theme {
    name: "indigo",
    primary: "#4f46e5",
    primary_hover: "#4338ca",
    secondary: "#818cf8",
    gradient_start: "#4f46e5",
    gradient_end: "#7c3aed",
    sidebar: "#312e81",
    background: "#f8fafc",
    surface: "#ffffff",
    text_main: "#1e293b",
    text_muted: "#64748b",
    border: "#e2e8f0",
    soft_background: "#eef2ff",
    font_family: "'Inter', sans-serif",
};

pub const OCEAN: Theme = Theme {
    name: "ocean",
    primary: "#0284c7",
    primary_hover: "#0369a1",
    secondary: "#38bdf8",
    gradient_start: "#0284c7",
    gradient_end: "#06b6d4",
    sidebar: "#0c4a6e",
    background: "#f0f9ff",
    surface: "#ffffff",
    text_main: "#0f172a",
    text_muted: "#475569",
    border: "#bae6fd",
    soft_background: "#e0f2fe",
    font_family: "'Roboto', sans-serif",
};

pub const EMERALD: Theme = Theme {
    name: "emerald",
    primary: "#059669",
    primary_hover: "#047857",
    secondary: "#34d399",
    gradient_start: "#059669",
    gradient_end: "#10b981",
    sidebar: "#064e3b",
    background: "#f0fdf4",
    surface: "#ffffff",
    text_main: "#14532d",
    text_muted: "#4b5563",
    border: "#bbf7d0",
    soft_background: "#dcfce7",
    font_family: "'Poppins', sans-serif",
};

pub const SUNSET: Theme = Theme {
    name: "sunset",
    primary: "#ea580c",
    primary_hover: "#c2410c",
    secondary: "#fb923c",
    gradient_start: "#f97316",
    gradient_end: "#db2777",
    sidebar: "#7c2d12",
    background: "#fff7ed",
    surface: "#ffffff",
    text_main: "#431407",
    text_muted: "#78716c",
    border: "#fed7aa",
    soft_background: "#ffedd5",
    font_family: "'Montserrat', sans-serif",
};

pub const MIDNIGHT: Theme = Theme {
    name: "midnight",
    primary: "#6366f1",
    primary_hover: "#4f46e5",
    secondary: "#a5b4fc",
    gradient_start: "#1e1b4b",
    gradient_end: "#312e81",
    sidebar: "#0f172a",
    background: "#020617",
    surface: "#1e293b",
    text_main: "#f1f5f9",
    text_muted: "#94a3b8",
    border: "#334155",
    soft_background: "#1e293b",
    font_family: "'Inter', sans-serif",
};

pub const ROSE: Theme = Theme {
    name: "rose",
    primary: "#e11d48",
    primary_hover: "#be123c",
    secondary: "#fb7185",
    gradient_start: "#e11d48",
    gradient_end: "#ec4899",
    sidebar: "#881337",
    background: "#fff1f2",
    surface: "#ffffff",
    text_main: "#4c0519",
    text_muted: "#6b7280",
    border: "#fecdd3",
    soft_background: "#ffe4e6",
    font_family: "'Nunito', sans-serif",
};

pub const SLATE: Theme = Theme {
    name: "slate",
    primary: "#475569",
    primary_hover: "#334155",
    secondary: "#94a3b8",
    gradient_start: "#334155",
    gradient_end: "#64748b",
    sidebar: "#1e293b",
    background: "#f8fafc",
    surface: "#ffffff",
    text_main: "#0f172a",
    text_muted: "#64748b",
    border: "#cbd5e1",
    soft_background: "#f1f5f9",
    font_family: "system-ui, sans-serif",
};

static CATALOG: [Theme; 7] = [INDIGO, OCEAN, EMERALD, SUNSET, MIDNIGHT, ROSE, SLATE];

/// Every theme, default first
#[must_use]
pub fn all() -> &'static [Theme] {
    &CATALOG
}

#[must_use]
pub fn names() -> Vec<&'static str> {
    CATALOG.iter().map(|theme| theme.name).collect()
}

/// Case-insensitive lookup by name
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Theme> {
    let name = name.trim();
    CATALOG.iter().find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Look up `name`, falling back to `default_name` and then to the built-in
/// default. Never fails.
#[must_use]
pub fn resolve(name: &str, default_name: &str) -> &'static Theme {
    if let Some(theme) = lookup(name) {
        return theme;
    }
    warn!("Unknown theme '{}', using '{}'", name, default_name);
    lookup(default_name)
        .or_else(|| lookup(DEFAULT_THEME))
        .unwrap_or(&CATALOG[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("Ocean").map(|t| t.name), Some("ocean"));
        assert_eq!(lookup(" slate ").map(|t| t.name), Some("slate"));
        assert!(lookup("neon").is_none());
    }

    #[test]
    fn test_resolve_unknown_uses_default() {
        assert_eq!(resolve("neon", "emerald").name, "emerald");
        assert_eq!(resolve("neon", "also-missing").name, DEFAULT_THEME);
    }

    #[test]
    fn test_catalog_colors_are_hex() {
        for theme in all() {
            for color in [
                theme.primary,
                theme.primary_hover,
                theme.secondary,
                theme.gradient_start,
                theme.gradient_end,
                theme.sidebar,
                theme.background,
                theme.surface,
                theme.text_main,
                theme.text_muted,
                theme.border,
                theme.soft_background,
            ] {
                assert!(
                    color.len() == 7 && color.starts_with('#'),
                    "{}: {}",
                    theme.name,
                    color
                );
            }
        }
        assert_eq!(names()[0], DEFAULT_THEME);
    }
}
