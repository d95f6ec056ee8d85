//! Detection strategies and the first-success combinator.
//!
//! Each facet is an ordered list of `Strategy` values. `first_success`
//! evaluates them in order and returns the first match, or `NotFound`.

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;
use tracing::trace;

use crate::markup::Document;
use crate::markup::selectors::HEADING_SELECTOR;
use crate::utils::{char_len, truncate_with_ellipsis, COMPANY_MAX_LEN, FOUND_IMAGE};

use super::types::Detection;

/// A 4-digit year (optionally a range) followed by the holder name up to the
/// next period: "© 2019-2024 Acme Inc. All rights reserved." → "Acme Inc"
static COPYRIGHT_HOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{4}\b(?:\s*[-–]\s*\d{4}\b)?\s*,?\s*([^.]+?)\s*\.")
        .expect("COPYRIGHT_HOLDER_RE: hardcoded regex is valid")
});

/// Exclusive character-length window `(min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min_exclusive: usize,
    pub max_exclusive: usize,
}

impl LengthWindow {
    #[must_use]
    pub const fn new(min_exclusive: usize, max_exclusive: usize) -> Self {
        Self {
            min_exclusive,
            max_exclusive,
        }
    }

    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        let len = char_len(text);
        len > self.min_exclusive && len < self.max_exclusive
    }
}

/// One detection attempt
#[derive(Debug, Clone)]
pub enum Strategy {
    /// First match of each selector, in priority order, whose trimmed text
    /// fits the window and contains none of the excluded words
    Selector {
        selectors: Vec<Selector>,
        window: LengthWindow,
        excluded_words: Vec<String>,
    },
    /// Every `h1`/`h2` in document order
    HeadingScan { window: LengthWindow },
    /// Document title with any " - " / " | " suffix removed
    TitleFallback { separators: Vec<String> },
    /// Images matched by each selector in priority order; first non-empty `src`
    ImageSelector { selectors: Vec<Selector> },
    /// Footer-like containers (document order) holding "©" or "copyright"
    CopyrightScan { containers: Selector },
    /// Leaf elements inside footer/sidebar containers reading "by NAME"
    ByLineScan {
        containers: Vec<Selector>,
        max_len: usize,
    },
    /// Known literal company names anywhere in the body text
    LiteralToken { tokens: Vec<String> },
}

impl Strategy {
    /// Short name for tracing
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Selector { .. } => "selector",
            Strategy::HeadingScan { .. } => "heading-scan",
            Strategy::TitleFallback { .. } => "title-fallback",
            Strategy::ImageSelector { .. } => "image-selector",
            Strategy::CopyrightScan { .. } => "copyright-scan",
            Strategy::ByLineScan { .. } => "by-line-scan",
            Strategy::LiteralToken { .. } => "literal-token",
        }
    }

    /// Run this strategy; `None` means "no qualifying match, try the next one"
    #[must_use]
    pub fn evaluate(&self, doc: &Document) -> Option<Detection> {
        match self {
            Strategy::Selector {
                selectors,
                window,
                excluded_words,
            } => selectors.iter().find_map(|selector| {
                let id = doc.select_first(selector)?;
                let text = doc.text(id);
                let lowered = text.to_lowercase();
                let excluded = excluded_words
                    .iter()
                    .any(|word| lowered.contains(&word.to_lowercase()));
                (window.accepts(&text) && !excluded).then(|| Detection::found(text))
            }),

            Strategy::HeadingScan { window } => doc
                .select(&HEADING_SELECTOR)
                .into_iter()
                .map(|id| doc.text(id))
                .find(|text| window.accepts(text))
                .map(Detection::found),

            Strategy::TitleFallback { separators } => {
                let title = doc.title()?;
                let stripped = strip_title_suffix(&title, separators);
                (!stripped.is_empty()).then(|| Detection::found(stripped))
            }

            Strategy::ImageSelector { selectors } => selectors.iter().find_map(|selector| {
                doc.select(selector)
                    .into_iter()
                    .filter(|id| doc.tag_name(*id) == Some("img"))
                    .find_map(|id| {
                        let src = doc.attr(id, "src")?.trim();
                        (!src.is_empty()).then(|| Detection::found_with_source(FOUND_IMAGE, src))
                    })
            }),

            Strategy::CopyrightScan { containers } => doc
                .select(containers)
                .into_iter()
                .map(|id| doc.flat_text(id))
                .find(|text| is_copyright_line(text))
                .map(|text| Detection::found(company_from_copyright(&text))),

            Strategy::ByLineScan {
                containers,
                max_len,
            } => containers.iter().find_map(|container| {
                doc.select(container).into_iter().find_map(|scope| {
                    doc.leaf_elements(scope).into_iter().find_map(|leaf| {
                        let text = doc.flat_text(leaf);
                        if char_len(&text) >= *max_len {
                            return None;
                        }
                        by_line_name(&text).map(Detection::found)
                    })
                })
            }),

            Strategy::LiteralToken { tokens } => {
                let body = doc.body_text();
                tokens
                    .iter()
                    .find(|token| !token.is_empty() && body.contains(token.as_str()))
                    .map(|token| Detection::found(token.clone()))
            }
        }
    }
}

/// Evaluate strategies in order; the first match wins.
#[must_use]
pub fn first_success(strategies: &[Strategy], doc: &Document) -> Detection {
    for strategy in strategies {
        if let Some(found) = strategy.evaluate(doc) {
            trace!(strategy = strategy.name(), value = %found, "Strategy matched");
            return found;
        }
        trace!(strategy = strategy.name(), "Strategy found nothing");
    }
    Detection::NotFound
}

/// Drop the trailing suffix after the last separator:
/// "Acme - Pro Tools | Home" → "Acme - Pro Tools"
#[must_use]
pub fn strip_title_suffix(title: &str, separators: &[String]) -> String {
    let cut = separators
        .iter()
        .filter(|sep| !sep.is_empty())
        .filter_map(|sep| title.rfind(sep.as_str()))
        .max()
        .unwrap_or(title.len());
    title[..cut].trim().to_string()
}

/// Whether a line reads like a copyright notice
#[must_use]
pub fn is_copyright_line(text: &str) -> bool {
    text.contains('©') || text.to_lowercase().contains("copyright")
}

/// Holder name between the year and the next period, else the (truncated)
/// line itself
#[must_use]
pub fn company_from_copyright(text: &str) -> String {
    COPYRIGHT_HOLDER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| truncate_with_ellipsis(text, COMPANY_MAX_LEN))
}

/// "by Acme Labs" → "Acme Labs" (case-insensitive prefix)
#[must_use]
pub fn by_line_name(text: &str) -> Option<String> {
    let prefix = text.get(..3)?;
    if !prefix.eq_ignore_ascii_case("by ") {
        return None;
    }
    let name = text[3..].trim();
    (!name.is_empty()).then(|| name.to_string())
}
