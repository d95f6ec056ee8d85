//! Navigation label cleaning.

use regex::Regex;
use tracing::warn;

use crate::utils::{NAV_LABEL_MAX_LEN, NAV_LABEL_MIN_LEN, char_len, collapse_whitespace};

/// Private Use Area code points, where icon fonts put their glyphs
#[inline]
fn is_private_use(c: char) -> bool {
    matches!(c as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

/// Strips badge words and icon glyphs, then applies the length bounds
#[derive(Debug, Clone)]
pub struct LabelCleaner {
    badges: Option<Regex>,
}

impl LabelCleaner {
    #[must_use]
    pub fn new<S: AsRef<str>>(badge_words: &[S]) -> Self {
        let words: Vec<String> = badge_words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();

        let badges = if words.is_empty() {
            None
        } else {
            let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
            match Regex::new(&pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("Badge pattern rejected, badges will not be stripped: {}", e);
                    None
                }
            }
        };

        Self { badges }
    }

    /// Text with icons and badge words removed, whitespace collapsed, no
    /// length bounds applied
    #[must_use]
    pub fn strip(&self, raw: &str) -> String {
        let without_icons: String = raw.chars().filter(|c| !is_private_use(*c)).collect();
        let without_badges = match &self.badges {
            Some(re) => re.replace_all(&without_icons, " ").into_owned(),
            None => without_icons,
        };
        collapse_whitespace(&without_badges)
    }

    /// Cleaned label, or `None` when it falls outside [2, 30] characters
    #[must_use]
    pub fn clean(&self, raw: &str) -> Option<String> {
        let label = self.strip(raw);

        let len = char_len(&label);
        (NAV_LABEL_MIN_LEN..=NAV_LABEL_MAX_LEN)
            .contains(&len)
            .then_some(label)
    }
}
