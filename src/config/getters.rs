//! Getter methods for `RebrandConfig`

use super::types::RebrandConfig;

impl RebrandConfig {
    #[must_use]
    pub fn brand_selectors(&self) -> &[String] {
        &self.brand_selectors
    }

    #[must_use]
    pub fn slogan_selectors(&self) -> &[String] {
        &self.slogan_selectors
    }

    #[must_use]
    pub fn slogan_excluded_words(&self) -> &[String] {
        &self.slogan_excluded_words
    }

    #[must_use]
    pub fn logo_selectors(&self) -> &[String] {
        &self.logo_selectors
    }

    #[must_use]
    pub fn copyright_selectors(&self) -> &[String] {
        &self.copyright_selectors
    }

    #[must_use]
    pub fn byline_selectors(&self) -> &[String] {
        &self.byline_selectors
    }

    #[must_use]
    pub fn footer_selectors(&self) -> &[String] {
        &self.footer_selectors
    }

    #[must_use]
    pub fn company_fallback_tokens(&self) -> &[String] {
        &self.company_fallback_tokens
    }

    #[must_use]
    pub fn nav_selectors(&self) -> &[String] {
        &self.nav_selectors
    }

    #[must_use]
    pub fn nav_badge_words(&self) -> &[String] {
        &self.nav_badge_words
    }

    #[must_use]
    pub fn brand_fallback_selectors(&self) -> &[String] {
        &self.brand_fallback_selectors
    }

    #[must_use]
    pub fn slogan_fallback_selectors(&self) -> &[String] {
        &self.slogan_fallback_selectors
    }

    #[must_use]
    pub fn enforcer_retry_budget(&self) -> u32 {
        self.enforcer_retry_budget
    }

    #[must_use]
    pub fn enforcer_retry_interval_ms(&self) -> u32 {
        self.enforcer_retry_interval_ms
    }

    #[must_use]
    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }
}
