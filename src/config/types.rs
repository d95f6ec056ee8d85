//! Core configuration types for rebranding
//!
//! `RebrandConfig` holds every tunable list the detector, navigation extractor
//! and rewriter consult. Fields are `pub(crate)`; read them through the
//! getters and change them through `RebrandConfigBuilder`.

use serde::{Deserialize, Serialize};

use crate::errors::{RebrandError, RebrandResult};
use crate::utils::{
    BRAND_FALLBACK_SELECTORS, BRAND_SELECTORS, BYLINE_CONTAINER_SELECTORS,
    COMPANY_FALLBACK_TOKENS, COPYRIGHT_CONTAINER_SELECTORS, DEFAULT_THEME, ENFORCER_RETRY_BUDGET,
    ENFORCER_RETRY_INTERVAL_MS, FOOTER_CONTAINER_SELECTORS, LOGO_SELECTORS, NAV_BADGE_WORDS,
    NAV_SELECTORS, SLOGAN_EXCLUDED_WORDS, SLOGAN_FALLBACK_SELECTORS, SLOGAN_SELECTORS,
};

use super::builder::RebrandConfigBuilder;

/// Main configuration struct for detection and rewriting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebrandConfig {
    /// Brand selectors in priority order (first match per selector is checked)
    pub(crate) brand_selectors: Vec<String>,
    pub(crate) slogan_selectors: Vec<String>,
    /// Lowercase words that disqualify a slogan candidate
    pub(crate) slogan_excluded_words: Vec<String>,
    pub(crate) logo_selectors: Vec<String>,
    /// Footer-like containers scanned in document order for copyright lines
    pub(crate) copyright_selectors: Vec<String>,
    /// Containers whose leaf descendants may carry a "by NAME" line
    pub(crate) byline_selectors: Vec<String>,
    /// Containers whose text the company rewrite pass may touch
    pub(crate) footer_selectors: Vec<String>,
    /// Literal company names searched in the whole document as a last resort,
    /// and rewritten inside footers
    pub(crate) company_fallback_tokens: Vec<String>,
    pub(crate) nav_selectors: Vec<String>,
    pub(crate) nav_badge_words: Vec<String>,
    /// Brand elements overwritten when exact substitution changed nothing
    pub(crate) brand_fallback_selectors: Vec<String>,
    /// Slogan elements (first match) overwritten when exact substitution changed nothing
    pub(crate) slogan_fallback_selectors: Vec<String>,
    /// Delayed re-applications performed by the runtime enforcer script
    pub(crate) enforcer_retry_budget: u32,
    pub(crate) enforcer_retry_interval_ms: u32,
    /// Catalog theme used when a requested theme name is unknown
    pub(crate) default_theme: String,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for RebrandConfig {
    fn default() -> Self {
        Self {
            brand_selectors: owned(BRAND_SELECTORS),
            slogan_selectors: owned(SLOGAN_SELECTORS),
            slogan_excluded_words: owned(SLOGAN_EXCLUDED_WORDS),
            logo_selectors: owned(LOGO_SELECTORS),
            copyright_selectors: owned(COPYRIGHT_CONTAINER_SELECTORS),
            byline_selectors: owned(BYLINE_CONTAINER_SELECTORS),
            footer_selectors: owned(FOOTER_CONTAINER_SELECTORS),
            company_fallback_tokens: owned(COMPANY_FALLBACK_TOKENS),
            nav_selectors: owned(NAV_SELECTORS),
            nav_badge_words: owned(NAV_BADGE_WORDS),
            brand_fallback_selectors: owned(BRAND_FALLBACK_SELECTORS),
            slogan_fallback_selectors: owned(SLOGAN_FALLBACK_SELECTORS),
            enforcer_retry_budget: ENFORCER_RETRY_BUDGET,
            enforcer_retry_interval_ms: ENFORCER_RETRY_INTERVAL_MS,
            default_theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl RebrandConfig {
    /// Create a new builder seeded with the default lists
    #[must_use]
    pub fn builder() -> RebrandConfigBuilder {
        RebrandConfigBuilder::default()
    }

    /// Parse a JSON configuration. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::Serialization` for malformed JSON and
    /// `RebrandError::Config` / `InvalidSelector` when validation fails.
    pub fn from_json_str(json: &str) -> RebrandResult<Self> {
        let config: RebrandConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every selector parses and every required list is non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first selector that fails to parse, or `RebrandError::Config`
    /// for empty lists, a zero retry interval with a non-zero budget, and
    /// unknown default themes.
    pub fn validate(&self) -> RebrandResult<()> {
        let selector_lists = [
            ("brand_selectors", &self.brand_selectors),
            ("slogan_selectors", &self.slogan_selectors),
            ("logo_selectors", &self.logo_selectors),
            ("copyright_selectors", &self.copyright_selectors),
            ("byline_selectors", &self.byline_selectors),
            ("footer_selectors", &self.footer_selectors),
            ("nav_selectors", &self.nav_selectors),
            ("brand_fallback_selectors", &self.brand_fallback_selectors),
            ("slogan_fallback_selectors", &self.slogan_fallback_selectors),
        ];

        for (name, list) in selector_lists {
            if list.is_empty() {
                return Err(RebrandError::Config(format!("{name} must not be empty")));
            }
            for selector in list {
                scraper::Selector::parse(selector)
                    .map_err(|e| RebrandError::invalid_selector(selector, e))?;
            }
        }

        if self.enforcer_retry_budget > 0 && self.enforcer_retry_interval_ms == 0 {
            return Err(RebrandError::Config(
                "enforcer_retry_interval_ms must be positive when a retry budget is set".into(),
            ));
        }

        if crate::theme::catalog::lookup(&self.default_theme).is_none() {
            return Err(RebrandError::Config(format!(
                "default_theme '{}' is not in the theme catalog",
                self.default_theme
            )));
        }

        Ok(())
    }
}
