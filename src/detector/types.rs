//! Detection records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::NOT_DETECTED;

/// One of the four branding attributes detected and replaced independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Brand,
    Slogan,
    Logo,
    Company,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Brand, Facet::Slogan, Facet::Logo, Facet::Company];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Brand => "brand",
            Facet::Slogan => "slogan",
            Facet::Logo => "logo",
            Facet::Company => "company",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one facet's waterfall.
///
/// `NotFound` is distinct from an empty string and is never used as a
/// substitution key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Detection {
    Found {
        value: String,
        /// Original identifier used to find the element again (logo `src`)
        #[serde(skip_serializing_if = "Option::is_none", default)]
        source: Option<String>,
    },
    #[default]
    NotFound,
}

impl Detection {
    #[must_use]
    pub fn found(value: impl Into<String>) -> Self {
        Detection::Found {
            value: value.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn found_with_source(value: impl Into<String>, source: impl Into<String>) -> Self {
        Detection::Found {
            value: value.into(),
            source: Some(source.into()),
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Detection::Found { .. })
    }

    /// Detected value, `None` for `NotFound`
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Detection::Found { value, .. } => Some(value),
            Detection::NotFound => None,
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            Detection::Found { source, .. } => source.as_deref(),
            Detection::NotFound => None,
        }
    }

    /// Text shown to the user: the value, or `"Not detected"`
    #[must_use]
    pub fn display_value(&self) -> &str {
        self.value().unwrap_or(NOT_DETECTED)
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

/// Result of one full detection pass, handed explicitly to the rewriter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    pub brand: Detection,
    pub slogan: Detection,
    pub logo: Detection,
    pub company: Detection,
}

impl DetectionResult {
    #[must_use]
    pub fn get(&self, facet: Facet) -> &Detection {
        match facet {
            Facet::Brand => &self.brand,
            Facet::Slogan => &self.slogan,
            Facet::Logo => &self.logo,
            Facet::Company => &self.company,
        }
    }

    /// Number of facets with a match
    #[must_use]
    pub fn found_count(&self) -> usize {
        Facet::ALL.iter().filter(|f| self.get(**f).is_found()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(Detection::NotFound.to_string(), "Not detected");
        assert_eq!(Detection::NotFound.value(), None);
        assert_eq!(Detection::found("Acme").to_string(), "Acme");
    }

    #[test]
    fn test_serialized_shape() {
        let logo = Detection::found_with_source("Found image", "https://x/old.png");
        let json = serde_json::to_value(&logo).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["source"], "https://x/old.png");

        let json = serde_json::to_value(Detection::NotFound).unwrap();
        assert_eq!(json["status"], "not_found");
    }
}
