//! Navigation extraction.
//!
//! Collects link/button labels that look like navigation, cleans them, and
//! assigns ordinal indices. The ordinal index is positional: it joins a label
//! to its user override and is rebuilt from 0 on every extraction.

pub mod label;
pub mod overrides;

use ego_tree::NodeId;
use scraper::Selector;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use serde::{Deserialize, Serialize};

use crate::config::RebrandConfig;
use crate::errors::RebrandResult;
use crate::markup::Document;
use crate::markup::selectors::parse_selector_group;

pub use label::LabelCleaner;
pub use overrides::{NavOverride, NavOverrideStore};

static DEFAULT_EXTRACTOR: LazyLock<NavigationExtractor> = LazyLock::new(|| {
    NavigationExtractor::new(&RebrandConfig::default())
        .expect("BUG: default navigation selectors are invalid")
});

/// One accepted navigation label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub original_label: String,
    pub ordinal_index: usize,
}

#[derive(Debug, Clone)]
pub struct NavigationExtractor {
    candidates: Selector,
    cleaner: LabelCleaner,
}

impl NavigationExtractor {
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` if the candidate selectors do
    /// not form a valid group.
    pub fn new(config: &RebrandConfig) -> RebrandResult<Self> {
        Ok(Self {
            candidates: parse_selector_group(config.nav_selectors())?,
            cleaner: LabelCleaner::new(config.nav_badge_words()),
        })
    }

    #[must_use]
    pub fn with_defaults() -> &'static NavigationExtractor {
        &DEFAULT_EXTRACTOR
    }

    /// Scan candidates in document order. Empty, icon-only, over-long and
    /// duplicate labels are dropped; the first occurrence of a label wins.
    #[must_use]
    pub fn extract(&self, doc: &Document) -> Vec<NavigationItem> {
        let items: Vec<NavigationItem> =
            self.locate(doc).into_iter().map(|(_, item)| item).collect();
        debug!(count = items.len(), "Extracted navigation items");
        items
    }

    /// Same scan as [`extract`](Self::extract), keeping the element each
    /// item was read from
    #[must_use]
    pub fn locate(&self, doc: &Document) -> Vec<(NodeId, NavigationItem)> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut located: Vec<(NodeId, NavigationItem)> = Vec::new();

        for id in doc.select(&self.candidates) {
            let Some(label) = self.cleaner.clean(&doc.text(id)) else {
                continue;
            };
            if !seen.insert(label.clone()) {
                continue;
            }
            let item = NavigationItem {
                original_label: label,
                ordinal_index: located.len(),
            };
            located.push((id, item));
        }
        located
    }

    /// Write `value` over the label text of a candidate element. The first
    /// text node carrying label text receives the value, later label text
    /// nodes shrink to their whitespace. Icon and badge nodes are left alone.
    ///
    /// Returns `false` when the element holds no label text.
    pub fn relabel(&self, doc: &mut Document, id: NodeId, value: &str) -> bool {
        let label_nodes: Vec<(NodeId, String)> = doc
            .text_nodes(id)
            .filter_map(|text_id| {
                let text = doc.text_value(text_id)?;
                if self.cleaner.strip(text).is_empty() {
                    return None;
                }
                Some((text_id, text.to_string()))
            })
            .collect();

        let Some(((first, original), rest)) = label_nodes.split_first() else {
            return false;
        };
        doc.set_text_node(*first, &keep_padding(original, value));
        for (text_id, original) in rest {
            let spacer = if original.chars().any(char::is_whitespace) { " " } else { "" };
            doc.set_text_node(*text_id, spacer);
        }
        true
    }
}

/// `value` wrapped in the leading and trailing whitespace of `original`
fn keep_padding(original: &str, value: &str) -> String {
    let lead = &original[..original.len() - original.trim_start().len()];
    let trail = &original[original.trim_end().len()..];
    format!("{lead}{value}{trail}")
}

/// Extract with the default selectors and badge words
#[must_use]
pub fn extract(doc: &Document) -> Vec<NavigationItem> {
    NavigationExtractor::with_defaults().extract(doc)
}
