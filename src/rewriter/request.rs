//! Input to one rewrite pass.

use serde::{Deserialize, Serialize};

use crate::detector::DetectionResult;
use crate::navigation::NavOverride;
use crate::theme::{StyleOptions, ThemeSelection};

/// The four user replacement values; empty means "no change requested"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replacements {
    pub brand: String,
    pub slogan: String,
    /// Replacement image URL
    pub logo: String,
    pub company: String,
}

impl Replacements {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.brand, &self.slogan, &self.logo, &self.company]
            .iter()
            .all(|v| v.trim().is_empty())
    }
}

/// Everything one rewrite pass depends on.
///
/// Built fresh for every preview update; the rewriter never keeps one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub(crate) original: String,
    pub(crate) detected: DetectionResult,
    pub(crate) replacements: Replacements,
    pub(crate) nav_overrides: Vec<NavOverride>,
    pub(crate) theme: ThemeSelection,
    pub(crate) style: StyleOptions,
    pub(crate) enforce_runtime: bool,
}

impl RewriteRequest {
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn detected(mut self, detected: DetectionResult) -> Self {
        self.detected = detected;
        self
    }

    #[must_use]
    pub fn replacements(mut self, replacements: Replacements) -> Self {
        self.replacements = replacements;
        self
    }

    #[must_use]
    pub fn brand(mut self, value: impl Into<String>) -> Self {
        self.replacements.brand = value.into();
        self
    }

    #[must_use]
    pub fn slogan(mut self, value: impl Into<String>) -> Self {
        self.replacements.slogan = value.into();
        self
    }

    #[must_use]
    pub fn logo(mut self, value: impl Into<String>) -> Self {
        self.replacements.logo = value.into();
        self
    }

    #[must_use]
    pub fn company(mut self, value: impl Into<String>) -> Self {
        self.replacements.company = value.into();
        self
    }

    #[must_use]
    pub fn nav_overrides(mut self, overrides: Vec<NavOverride>) -> Self {
        self.nav_overrides = overrides;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: ThemeSelection) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn style(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }

    /// Append the runtime enforcement script to the output
    #[must_use]
    pub fn enforce_runtime(mut self, enabled: bool) -> Self {
        self.enforce_runtime = enabled;
        self
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn detection(&self) -> &DetectionResult {
        &self.detected
    }

    #[must_use]
    pub fn replacement_values(&self) -> &Replacements {
        &self.replacements
    }

    #[must_use]
    pub fn overrides(&self) -> &[NavOverride] {
        &self.nav_overrides
    }

    #[must_use]
    pub fn theme_selection(&self) -> &ThemeSelection {
        &self.theme
    }

    #[must_use]
    pub fn style_options(&self) -> &StyleOptions {
        &self.style
    }

    #[must_use]
    pub fn runtime_enforced(&self) -> bool {
        self.enforce_runtime
    }
}
