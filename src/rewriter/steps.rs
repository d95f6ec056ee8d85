//! The individual rewrite steps, applied in order by `Rewriter::apply`.

use ego_tree::NodeId;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::detector::Detection;
use crate::errors::RebrandResult;
use crate::markup::Document;
use crate::markup::selectors::IMG_SELECTOR;
use crate::navigation::NavOverride;
use crate::theme::{STYLE_ELEMENT_ID, StyleOptions, ThemeSelection, build_stylesheet};
use crate::utils::{BRAND_FALLBACK_MAX_LEN, BYLINE_MAX_LEN, char_len};

use super::Rewriter;
use super::substitution::{is_substitutable, substitute_text};

/// "by NAME" as a whole text node, keeping surrounding whitespace
static BYLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(\s*by\s+)(.*?\S)(\s*)$").expect("BYLINE_RE: hardcoded regex is valid")
});

/// Exact substitution of a detected value; `NotFound` never substitutes
fn substitute_detected(doc: &mut Document, detected: &Detection, replacement: &str) -> usize {
    match detected.value() {
        Some(value) => substitute_text(doc, value, replacement),
        None => 0,
    }
}

impl Rewriter {
    /// Step 1 substitution; the title is written by the caller. Returns
    /// (exact nodes, fallback nodes).
    pub(crate) fn replace_brand(
        &self,
        doc: &mut Document,
        detected: &Detection,
        replacement: &str,
    ) -> (usize, usize) {
        let exact = substitute_detected(doc, detected, replacement);

        let mut fallback = 0;
        if exact == 0 {
            let targets: Vec<NodeId> = doc
                .select(&self.brand_fallback)
                .into_iter()
                .filter(|id| {
                    let len = char_len(&doc.text(*id));
                    len > 0 && len < BRAND_FALLBACK_MAX_LEN
                })
                .collect();
            for id in &targets {
                doc.set_text(*id, replacement);
            }
            fallback = targets.len();
        }
        (exact, fallback)
    }

    /// Step 2. Returns (exact nodes, fallback nodes).
    pub(crate) fn replace_slogan(
        &self,
        doc: &mut Document,
        detected: &Detection,
        replacement: &str,
    ) -> (usize, usize) {
        let exact = substitute_detected(doc, detected, replacement);
        if exact > 0 {
            return (exact, 0);
        }
        match doc.select_first(&self.slogan_fallback) {
            Some(id) => {
                doc.set_text(id, replacement);
                (0, 1)
            }
            None => (0, 0),
        }
    }

    /// Step 3. Every image whose `src` is the detected logo source, or that
    /// sits where a logo usually does, gets the new URL and loses `srcset`.
    pub(crate) fn replace_logo(&self, doc: &mut Document, detected: &Detection, url: &str) -> usize {
        let source = detected.source().map(str::trim).filter(|s| !s.is_empty());
        let logo_slots: HashSet<NodeId> = doc.select(&self.logo_images).into_iter().collect();

        let targets: Vec<NodeId> = doc
            .select(&IMG_SELECTOR)
            .into_iter()
            .filter(|id| {
                logo_slots.contains(id)
                    || source.is_some_and(|src| doc.attr(*id, "src").map(str::trim) == Some(src))
            })
            .collect();

        for id in &targets {
            doc.set_attr(*id, "src", url);
            doc.remove_attr(*id, "srcset");
        }
        targets.len()
    }

    /// Step 4. Returns (exact nodes, footer nodes).
    pub(crate) fn replace_company(
        &self,
        doc: &mut Document,
        detected: &Detection,
        replacement: &str,
    ) -> (usize, usize) {
        let exact = substitute_detected(doc, detected, replacement);
        let footer = self.rewrite_footer(doc, replacement);
        (exact, footer)
    }

    /// "by NAME" lines and placeholder company tokens inside footer-like
    /// containers.
    fn rewrite_footer(&self, doc: &mut Document, replacement: &str) -> usize {
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut targets: Vec<(NodeId, String)> = Vec::new();

        for container in doc.select(&self.footer_containers) {
            for id in doc.text_nodes(container) {
                if !seen.insert(id) {
                    continue;
                }
                let Some(value) = doc.text_value(id) else {
                    continue;
                };
                let rewritten = self.rewrite_footer_text(value, replacement);
                if rewritten != value {
                    targets.push((id, rewritten));
                }
            }
        }

        for (id, value) in &targets {
            doc.set_text_node(*id, value);
        }
        targets.len()
    }

    fn rewrite_footer_text(&self, value: &str, replacement: &str) -> String {
        let mut out = value.to_string();

        if char_len(value.trim()) < BYLINE_MAX_LEN {
            if let Some(caps) = BYLINE_RE.captures(value) {
                let lead = caps.get(1).map_or("", |m| m.as_str());
                let trail = caps.get(3).map_or("", |m| m.as_str());
                out = format!("{lead}{replacement}{trail}");
            }
        }

        for token in &self.fallback_tokens {
            if is_substitutable(token, replacement) {
                out = out.replace(token.trim(), replacement);
            }
        }
        out
    }

    /// Step 5. A stylesheet left by an earlier rewrite is replaced. Returns
    /// the injected theme's name.
    pub(crate) fn inject_theme(
        &self,
        doc: &mut Document,
        selection: &ThemeSelection,
        style: &StyleOptions,
    ) -> RebrandResult<Option<&'static str>> {
        let Some(theme) = selection.resolve(&self.default_theme) else {
            return Ok(None);
        };
        let css = build_stylesheet(theme, style)?;

        let Some(head) = doc.head() else {
            debug!("Document has no head, theme '{}' not injected", theme.name);
            return Ok(None);
        };
        let replaced = doc.remove_elements_with_id(STYLE_ELEMENT_ID);
        if replaced > 0 {
            debug!(replaced, "Earlier theme stylesheet replaced");
        }
        let markup = format!("<style id=\"{STYLE_ELEMENT_ID}\">\n{css}</style>");
        doc.append_markup(head, &markup);
        Ok(Some(theme.name))
    }

    /// Step 7. Only overrides that change their label are applied.
    ///
    /// The cleaned label is substituted literally first. A label that never
    /// appears in one text node (collapsed whitespace, nested markup) is
    /// written into the candidate found at its ordinal instead.
    pub(crate) fn relabel_navigation(&self, doc: &mut Document, overrides: &[NavOverride]) -> usize {
        let changes: Vec<&NavOverride> = overrides.iter().filter(|o| o.is_change()).collect();
        if changes.is_empty() {
            return 0;
        }
        // Ordinals refer to the document before any relabeling
        let located = self.navigation.locate(doc);

        let mut changed = 0;
        for o in changes {
            let replacement = o.replacement.trim();
            let exact = substitute_text(doc, &o.original_label, replacement);
            if exact > 0 {
                changed += exact;
                continue;
            }
            let target = located.iter().find(|(_, item)| {
                item.ordinal_index == o.ordinal_index && item.original_label == o.original_label
            });
            match target {
                Some((id, _)) if self.navigation.relabel(doc, *id, replacement) => changed += 1,
                _ => debug!(
                    label = %o.original_label,
                    ordinal = o.ordinal_index,
                    "Navigation label not found, override skipped"
                ),
            }
        }
        changed
    }
}
