//! Branding detection.
//!
//! Produces best-guess values for brand name, slogan, logo and company line.
//! Every facet is an independent waterfall of strategies:
//!
//! - Brand: priority selectors (0, 40) → `h1`/`h2` scan (2, 30) → `<title>`
//! - Slogan: priority selectors (0, 80) without "admin"/"menu"/"copyright"
//! - Logo: priority image selectors with a non-empty `src`
//! - Company: copyright line → "by NAME" leaf → known literal token
//!
//! Detection is pure: the same document always yields the same result.

pub mod strategy;
pub mod types;

use std::sync::LazyLock;
use tracing::debug;

use crate::config::RebrandConfig;
use crate::errors::RebrandResult;
use crate::markup::Document;
use crate::markup::selectors::{parse_selector_group, parse_selector_list};
use crate::utils::{
    BRAND_HEADING_MAX_LEN, BRAND_HEADING_MIN_LEN, BRAND_SELECTOR_MAX_LEN, BYLINE_MAX_LEN,
    SLOGAN_MAX_LEN, TITLE_SUFFIX_SEPARATORS,
};

pub use strategy::{LengthWindow, Strategy, first_success};
pub use types::{Detection, DetectionResult, Facet};

static DEFAULT_DETECTOR: LazyLock<BrandingDetector> = LazyLock::new(|| {
    BrandingDetector::new(&RebrandConfig::default())
        .expect("BUG: default detection selectors are invalid")
});

/// Ordered strategies for every facet
#[derive(Debug, Clone)]
pub struct BrandingDetector {
    brand: Vec<Strategy>,
    slogan: Vec<Strategy>,
    logo: Vec<Strategy>,
    company: Vec<Strategy>,
}

impl BrandingDetector {
    /// Build the waterfalls from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` for a selector that does not parse.
    pub fn new(config: &RebrandConfig) -> RebrandResult<Self> {
        let brand = vec![
            Strategy::Selector {
                selectors: parse_selector_list(config.brand_selectors())?,
                window: LengthWindow::new(0, BRAND_SELECTOR_MAX_LEN),
                excluded_words: Vec::new(),
            },
            Strategy::HeadingScan {
                window: LengthWindow::new(BRAND_HEADING_MIN_LEN, BRAND_HEADING_MAX_LEN),
            },
            Strategy::TitleFallback {
                separators: TITLE_SUFFIX_SEPARATORS.iter().map(|s| (*s).to_string()).collect(),
            },
        ];

        let slogan = vec![Strategy::Selector {
            selectors: parse_selector_list(config.slogan_selectors())?,
            window: LengthWindow::new(0, SLOGAN_MAX_LEN),
            excluded_words: config.slogan_excluded_words().to_vec(),
        }];

        let logo = vec![Strategy::ImageSelector {
            selectors: parse_selector_list(config.logo_selectors())?,
        }];

        let company = vec![
            Strategy::CopyrightScan {
                containers: parse_selector_group(config.copyright_selectors())?,
            },
            Strategy::ByLineScan {
                containers: parse_selector_list(config.byline_selectors())?,
                max_len: BYLINE_MAX_LEN,
            },
            Strategy::LiteralToken {
                tokens: config.company_fallback_tokens().to_vec(),
            },
        ];

        Ok(Self {
            brand,
            slogan,
            logo,
            company,
        })
    }

    /// Detector built from `RebrandConfig::default()`, parsed once
    #[must_use]
    pub fn with_defaults() -> &'static BrandingDetector {
        &DEFAULT_DETECTOR
    }

    #[must_use]
    pub fn strategies(&self, facet: Facet) -> &[Strategy] {
        match facet {
            Facet::Brand => &self.brand,
            Facet::Slogan => &self.slogan,
            Facet::Logo => &self.logo,
            Facet::Company => &self.company,
        }
    }

    /// Run one facet's waterfall
    #[must_use]
    pub fn detect_facet(&self, doc: &Document, facet: Facet) -> Detection {
        first_success(self.strategies(facet), doc)
    }

    /// Run every facet; each is found or not independently.
    #[must_use]
    pub fn detect(&self, doc: &Document) -> DetectionResult {
        let result = DetectionResult {
            brand: self.detect_facet(doc, Facet::Brand),
            slogan: self.detect_facet(doc, Facet::Slogan),
            logo: self.detect_facet(doc, Facet::Logo),
            company: self.detect_facet(doc, Facet::Company),
        };
        debug!(
            brand = %result.brand,
            slogan = %result.slogan,
            logo = result.logo.source().unwrap_or("-"),
            company = %result.company,
            "Detection pass complete"
        );
        result
    }
}

/// Detect with the default heuristics
#[must_use]
pub fn detect(doc: &Document) -> DetectionResult {
    BrandingDetector::with_defaults().detect(doc)
}
