//! Rebrand rewriting.
//!
//! `rewrite` is a pure function of its `RewriteRequest`: the original text is
//! parsed into a fresh `Document` on every call, the steps run in a fixed
//! order, and the result is serialized with a `<!DOCTYPE html>` prefix.
//!
//! 1. Brand: exact substitution, selector fallback only if nothing matched,
//!    then the document title
//! 2. Slogan: exact substitution, else the first slogan-like element
//! 3. Logo: image `src` rewrite, `srcset` removed
//! 4. Company: exact substitution plus the footer "by NAME"/placeholder pass
//! 5. Theme stylesheet (skipped for `ThemeSelection::Original`)
//! 6. Literal substitution inside inline scripts
//! 7. Navigation relabeling
//! 8. Optional runtime enforcer script
//!
//! Steps 1 to 4 only substitute when their replacement value is non-empty and
//! differs from the detected value. The title is written for any non-empty
//! brand replacement.

pub mod enforcement;
pub mod request;
pub mod steps;
pub mod substitution;

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::config::RebrandConfig;
use crate::errors::RebrandResult;
use crate::markup::Document;
use crate::markup::selectors::parse_selector_group;
use crate::navigation::NavigationExtractor;

pub use enforcement::{ENFORCER_ELEMENT_ID, EnforcedPair, enforceable_pairs, enforcer_script};
pub use request::{Replacements, RewriteRequest};
pub use substitution::{substitute_below, substitute_in_scripts, substitute_text};

static DEFAULT_REWRITER: LazyLock<Rewriter> = LazyLock::new(|| {
    Rewriter::new(&RebrandConfig::default()).expect("BUG: default rewrite selectors are invalid")
});

/// Per-step counts of one rewrite pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteOutcome {
    /// Text nodes changed by the exact brand substitution
    pub brand_nodes: usize,
    /// Elements overwritten by the brand selector fallback
    pub brand_fallback_nodes: usize,
    pub slogan_nodes: usize,
    pub slogan_fallback_nodes: usize,
    /// Images whose `src` was replaced
    pub logo_images: usize,
    pub company_nodes: usize,
    /// Footer text nodes changed by the "by NAME"/placeholder pass
    pub footer_nodes: usize,
    /// Name of the injected theme, if any
    pub theme: Option<&'static str>,
    /// Inline script text nodes changed
    pub script_nodes: usize,
    pub nav_nodes: usize,
    pub enforcer_injected: bool,
}

impl RewriteOutcome {
    /// Total nodes touched by text, attribute and script substitution
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.brand_nodes
            + self.brand_fallback_nodes
            + self.slogan_nodes
            + self.slogan_fallback_nodes
            + self.logo_images
            + self.company_nodes
            + self.footer_nodes
            + self.script_nodes
            + self.nav_nodes
    }
}

/// A step runs for a non-empty replacement that differs from what was
/// detected; an unchanged value (the auto-filled default) is a no-op.
fn requested(detected: Option<&str>, replacement: &str) -> bool {
    let replacement = replacement.trim();
    !replacement.is_empty() && detected.map(str::trim) != Some(replacement)
}

/// Configured rewrite pipeline
#[derive(Debug, Clone)]
pub struct Rewriter {
    pub(crate) logo_images: Selector,
    pub(crate) brand_fallback: Selector,
    pub(crate) slogan_fallback: Selector,
    pub(crate) footer_containers: Selector,
    pub(crate) navigation: NavigationExtractor,
    pub(crate) fallback_tokens: Vec<String>,
    pub(crate) retry_budget: u32,
    pub(crate) retry_interval_ms: u32,
    pub(crate) default_theme: String,
}

impl Rewriter {
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` if a configured selector list
    /// does not parse.
    pub fn new(config: &RebrandConfig) -> RebrandResult<Self> {
        Ok(Self {
            logo_images: parse_selector_group(config.logo_selectors())?,
            brand_fallback: parse_selector_group(config.brand_fallback_selectors())?,
            slogan_fallback: parse_selector_group(config.slogan_fallback_selectors())?,
            footer_containers: parse_selector_group(config.footer_selectors())?,
            navigation: NavigationExtractor::new(config)?,
            fallback_tokens: config.company_fallback_tokens().to_vec(),
            retry_budget: config.enforcer_retry_budget(),
            retry_interval_ms: config.enforcer_retry_interval_ms(),
            default_theme: config.default_theme().to_string(),
        })
    }

    #[must_use]
    pub fn with_defaults() -> &'static Rewriter {
        &DEFAULT_REWRITER
    }

    /// Rewrite and serialize.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidColor` for a bad primary color override
    /// or `RebrandError::Serialization` if the enforcer pairs cannot be encoded.
    pub fn rewrite(&self, request: &RewriteRequest) -> RebrandResult<String> {
        self.rewrite_with_report(request).map(|(html, _)| html)
    }

    /// Rewrite, serialize and report what each step changed.
    ///
    /// # Errors
    ///
    /// See [`Rewriter::rewrite`].
    pub fn rewrite_with_report(
        &self,
        request: &RewriteRequest,
    ) -> RebrandResult<(String, RewriteOutcome)> {
        let mut doc = Document::parse(request.original());
        let outcome = self.apply(&mut doc, request)?;
        let html = doc.serialize();

        info!(
            changes = outcome.total_changes(),
            theme = outcome.theme.unwrap_or("original"),
            enforcer = outcome.enforcer_injected,
            bytes = html.len(),
            "Rewrite complete"
        );
        Ok((html, outcome))
    }

    fn apply(&self, doc: &mut Document, request: &RewriteRequest) -> RebrandResult<RewriteOutcome> {
        let detected = request.detection();
        let values = request.replacement_values();
        let mut outcome = RewriteOutcome::default();

        if requested(detected.brand.value(), &values.brand) {
            (outcome.brand_nodes, outcome.brand_fallback_nodes) =
                self.replace_brand(doc, &detected.brand, &values.brand);
        }
        if !values.brand.trim().is_empty() {
            doc.set_title(&values.brand);
        }
        if requested(detected.slogan.value(), &values.slogan) {
            (outcome.slogan_nodes, outcome.slogan_fallback_nodes) =
                self.replace_slogan(doc, &detected.slogan, &values.slogan);
        }
        if requested(detected.logo.source(), &values.logo) {
            outcome.logo_images = self.replace_logo(doc, &detected.logo, &values.logo);
        }
        if requested(detected.company.value(), &values.company) {
            (outcome.company_nodes, outcome.footer_nodes) =
                self.replace_company(doc, &detected.company, &values.company);
        }

        outcome.theme = self.inject_theme(doc, request.theme_selection(), request.style_options())?;

        let literal_pairs = self.literal_pairs(request);
        outcome.script_nodes = substitute_in_scripts(doc, &literal_pairs);

        outcome.nav_nodes = self.relabel_navigation(doc, request.overrides());

        if request.runtime_enforced() {
            outcome.enforcer_injected = self.inject_enforcer(doc, request, literal_pairs)?;
        }

        debug!(?outcome, "Rewrite steps applied");
        Ok(outcome)
    }

    /// Detected value → replacement pairs for brand, slogan and company, plus
    /// the placeholder company tokens
    fn literal_pairs(&self, request: &RewriteRequest) -> Vec<(String, String)> {
        let detected = request.detection();
        let values = request.replacement_values();
        let mut pairs = Vec::new();

        for (detection, replacement) in [
            (&detected.brand, &values.brand),
            (&detected.slogan, &values.slogan),
            (&detected.company, &values.company),
        ] {
            if let Some(value) = detection.value() {
                pairs.push((value.to_string(), replacement.clone()));
            }
        }
        for token in &self.fallback_tokens {
            pairs.push((token.clone(), values.company.clone()));
        }

        pairs.retain(|(search, replacement)| substitution::is_substitutable(search, replacement));
        pairs
    }

    fn inject_enforcer(
        &self,
        doc: &mut Document,
        request: &RewriteRequest,
        mut pairs: Vec<(String, String)>,
    ) -> RebrandResult<bool> {
        pairs.extend(
            request
                .overrides()
                .iter()
                .filter(|o| o.is_change())
                .map(|o| (o.original_label.clone(), o.replacement.trim().to_string())),
        );

        let enforced = enforceable_pairs(&pairs);
        let Some(script) = enforcer_script(&enforced, self.retry_budget, self.retry_interval_ms)?
        else {
            return Ok(false);
        };
        let Some(body) = doc.body() else {
            return Ok(false);
        };
        doc.remove_elements_with_id(ENFORCER_ELEMENT_ID);
        doc.append_markup(body, &script);
        debug!(pairs = enforced.len(), "Runtime enforcer appended");
        Ok(true)
    }
}

/// Rewrite with the default configuration
///
/// # Errors
///
/// See [`Rewriter::rewrite`].
pub fn rewrite(request: &RewriteRequest) -> RebrandResult<String> {
    Rewriter::with_defaults().rewrite(request)
}

/// Rewrite with the default configuration and report per-step counts
///
/// # Errors
///
/// See [`Rewriter::rewrite`].
pub fn rewrite_with_report(request: &RewriteRequest) -> RebrandResult<(String, RewriteOutcome)> {
    Rewriter::with_defaults().rewrite_with_report(request)
}
