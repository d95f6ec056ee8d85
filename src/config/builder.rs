//! Fluent builder for `RebrandConfig`
//!
//! Every field has a default, so the builder has no required state; `build()`
//! validates selectors and the default theme before handing the config out.

use crate::errors::RebrandResult;

use super::types::RebrandConfig;

fn owned<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, Default)]
pub struct RebrandConfigBuilder {
    pub(crate) config: RebrandConfig,
}

impl RebrandConfigBuilder {
    #[must_use]
    pub fn brand_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.brand_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn slogan_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.slogan_selectors = owned(selectors);
        self
    }

    /// Words are matched case-insensitively; they are stored lowercased.
    #[must_use]
    pub fn slogan_excluded_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.slogan_excluded_words = words
            .into_iter()
            .map(|w| Into::<String>::into(w).to_lowercase())
            .collect();
        self
    }

    #[must_use]
    pub fn logo_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.logo_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn copyright_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.copyright_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn byline_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.byline_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn footer_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.footer_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn company_fallback_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.company_fallback_tokens = owned(tokens);
        self
    }

    #[must_use]
    pub fn nav_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.nav_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn nav_badge_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.nav_badge_words = owned(words);
        self
    }

    #[must_use]
    pub fn brand_fallback_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.brand_fallback_selectors = owned(selectors);
        self
    }

    #[must_use]
    pub fn slogan_fallback_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.slogan_fallback_selectors = owned(selectors);
        self
    }

    /// Number of delayed re-applications the runtime enforcer performs before
    /// relying on mutation observation alone. Zero disables the delayed passes.
    #[must_use]
    pub fn enforcer_retry_budget(mut self, budget: u32) -> Self {
        self.config.enforcer_retry_budget = budget;
        self
    }

    #[must_use]
    pub fn enforcer_retry_interval_ms(mut self, interval_ms: u32) -> Self {
        self.config.enforcer_retry_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn default_theme(mut self, theme: impl Into<String>) -> Self {
        self.config.default_theme = theme.into();
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` for a selector that does not
    /// parse and `RebrandError::Config` for empty lists, a zero retry interval
    /// with a non-zero budget, or an unknown default theme.
    pub fn build(self) -> RebrandResult<RebrandConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
