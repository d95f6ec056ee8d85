//! Themes and style options.
//!
//! A selected theme becomes one generated `<style id="rebrand-theme">` block
//! appended to the document head. `ThemeSelection::Original` leaves the
//! document's own styling untouched.

pub mod catalog;
pub mod stylesheet;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RebrandError;
use crate::utils::ORIGINAL_THEME;

pub use catalog::Theme;
pub use stylesheet::{STYLE_ELEMENT_ID, adjust_hue, build_stylesheet, parse_hex};

/// Which theme, if any, to inject
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ThemeSelection {
    /// Keep the document's styling
    #[default]
    Original,
    /// Catalog theme by name; unknown names fall back to the default
    Named(String),
}

impl ThemeSelection {
    /// `"original"` (any case) or blank selects `Original`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(ORIGINAL_THEME) {
            ThemeSelection::Original
        } else {
            ThemeSelection::Named(name.to_string())
        }
    }

    #[must_use]
    pub fn is_original(&self) -> bool {
        matches!(self, ThemeSelection::Original)
    }

    /// Catalog theme to inject, `None` for `Original`
    #[must_use]
    pub fn resolve(&self, default_name: &str) -> Option<&'static Theme> {
        match self {
            ThemeSelection::Original => None,
            ThemeSelection::Named(name) => Some(catalog::resolve(name, default_name)),
        }
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSelection::Original => f.write_str(ORIGINAL_THEME),
            ThemeSelection::Named(name) => f.write_str(name),
        }
    }
}

/// Generates `FromStr`/`Display`/`as_str` for the lowercase option enums
macro_rules! style_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = RebrandError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(RebrandError::Config(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Solid,
    Gradient,
}

style_enum!(ColorMode {
    Solid => "solid",
    Gradient => "gradient",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    Default,
    Gradient,
    Dark,
}

style_enum!(BackgroundStyle {
    Default => "default",
    Gradient => "gradient",
    Dark => "dark",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Default,
    Top,
    Left,
    Right,
}

style_enum!(NavPosition {
    Default => "default",
    Top => "top",
    Left => "left",
    Right => "right",
});

/// Style sub-options layered on top of the selected theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub color_mode: ColorMode,
    pub background: BackgroundStyle,
    pub nav_position: NavPosition,
    /// Overrides the theme font stack
    pub font_family: Option<String>,
    /// `#rrggbb`; replaces the theme primary and gradient
    pub primary_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_name() {
        assert_eq!(ThemeSelection::from_name(""), ThemeSelection::Original);
        assert_eq!(ThemeSelection::from_name("Original"), ThemeSelection::Original);
        assert_eq!(
            ThemeSelection::from_name("ocean"),
            ThemeSelection::Named("ocean".into())
        );
    }

    #[test]
    fn test_selection_resolve() {
        assert!(ThemeSelection::Original.resolve("indigo").is_none());
        let theme = ThemeSelection::Named("nope".into()).resolve("indigo");
        assert_eq!(theme.map(|t| t.name), Some("indigo"));
    }

    #[test]
    fn test_option_enums_parse() {
        assert_eq!("Gradient".parse::<ColorMode>().unwrap(), ColorMode::Gradient);
        assert_eq!("dark".parse::<BackgroundStyle>().unwrap(), BackgroundStyle::Dark);
        assert_eq!(" left ".parse::<NavPosition>().unwrap(), NavPosition::Left);
        assert!("sideways".parse::<NavPosition>().is_err());
        assert_eq!(NavPosition::Right.to_string(), "right");
    }
}
