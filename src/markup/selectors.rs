//! Selector parsing with crate errors instead of panics.
//!
//! Hardcoded selectors used on hot paths are parsed once into `LazyLock`
//! statics; configurable lists go through `parse_selector_list`.

use scraper::Selector;
use std::sync::LazyLock;

use crate::errors::{RebrandError, RebrandResult};

pub(crate) static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("head title").expect("BUG: hardcoded CSS selector 'head title' is invalid")
});

pub(crate) static HEAD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("head").expect("BUG: hardcoded CSS selector 'head' is invalid")
});

pub(crate) static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

pub(crate) static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img").expect("BUG: hardcoded CSS selector 'img' is invalid")
});

pub(crate) static INLINE_SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script:not([src])")
        .expect("BUG: hardcoded CSS selector 'script:not([src])' is invalid")
});

pub(crate) static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2").expect("BUG: hardcoded CSS selector 'h1, h2' is invalid")
});

/// Parse one selector.
///
/// # Errors
///
/// Returns `RebrandError::InvalidSelector` carrying the parser message.
pub fn parse_selector(selector: &str) -> RebrandResult<Selector> {
    Selector::parse(selector).map_err(|e| RebrandError::invalid_selector(selector, e))
}

/// Parse a priority list, keeping order.
///
/// # Errors
///
/// Fails on the first selector that does not parse.
pub fn parse_selector_list<S: AsRef<str>>(selectors: &[S]) -> RebrandResult<Vec<Selector>> {
    selectors.iter().map(|s| parse_selector(s.as_ref())).collect()
}

/// Parse a list into a single selector group (`a, b, c`), which matches in
/// document order rather than list order.
///
/// # Errors
///
/// Fails when the joined group does not parse.
pub fn parse_selector_group<S: AsRef<str>>(selectors: &[S]) -> RebrandResult<Selector> {
    let joined = selectors
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    parse_selector(&joined)
}
