//! User-entered replacement labels, joined to extracted items by ordinal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::NavigationItem;

/// One navigation label and the label the user wants in its place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOverride {
    pub original_label: String,
    pub ordinal_index: usize,
    /// Empty means "leave as is"
    pub replacement: String,
}

impl NavOverride {
    /// Whether applying this override would change the document
    #[must_use]
    pub fn is_change(&self) -> bool {
        let replacement = self.replacement.trim();
        !replacement.is_empty() && replacement != self.original_label
    }
}

/// Blank overrides for a fresh extraction
#[must_use]
pub fn overrides_for(items: &[NavigationItem]) -> Vec<NavOverride> {
    items
        .iter()
        .map(|item| NavOverride {
            original_label: item.original_label.clone(),
            ordinal_index: item.ordinal_index,
            replacement: String::new(),
        })
        .collect()
}

/// Ordered ordinal → replacement mapping, rebuilt with every extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOverrideStore {
    items: Vec<NavigationItem>,
    replacements: BTreeMap<usize, String>,
}

impl NavOverrideStore {
    #[must_use]
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self {
            items,
            replacements: BTreeMap::new(),
        }
    }

    /// Replace the item list and drop every stored replacement
    pub fn rebuild(&mut self, items: Vec<NavigationItem>) {
        self.items = items;
        self.replacements.clear();
    }

    /// Store a replacement; returns `false` for an ordinal with no item
    pub fn set(&mut self, ordinal_index: usize, replacement: impl Into<String>) -> bool {
        if ordinal_index >= self.items.len() {
            return false;
        }
        self.replacements.insert(ordinal_index, replacement.into());
        true
    }

    #[must_use]
    pub fn get(&self, ordinal_index: usize) -> Option<&str> {
        self.replacements.get(&ordinal_index).map(String::as_str)
    }

    #[must_use]
    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One override per item, in ordinal order
    #[must_use]
    pub fn to_overrides(&self) -> Vec<NavOverride> {
        let mut overrides = overrides_for(&self.items);
        for entry in &mut overrides {
            if let Some(value) = self.replacements.get(&entry.ordinal_index) {
                entry.replacement.clone_from(value);
            }
        }
        overrides
    }
}
