pub mod config;
pub mod detector;
pub mod errors;
pub mod markup;
pub mod navigation;
pub mod rewriter;
pub mod session;
pub mod theme;
pub mod unpacker;
pub mod utils;

pub use config::{RebrandConfig, RebrandConfigBuilder};
pub use detector::{BrandingDetector, Detection, DetectionResult, Facet, Strategy};
pub use errors::{RebrandError, RebrandResult};
pub use markup::{Document, NodeId};
pub use navigation::{NavOverride, NavOverrideStore, NavigationExtractor, NavigationItem};
pub use rewriter::{Replacements, RewriteOutcome, RewriteRequest, Rewriter};
pub use session::{ExportFormat, Field, FieldStore, Preview, Session};
pub use theme::{BackgroundStyle, ColorMode, NavPosition, StyleOptions, Theme, ThemeSelection};
pub use unpacker::{UnpackOutcome, pack, unpack};

/// Detect every branding facet with the default heuristics
#[must_use]
pub fn detect(html: &str) -> DetectionResult {
    detector::detect(&Document::parse(html))
}

/// Extract navigation items with the default selectors
#[must_use]
pub fn extract_navigation(html: &str) -> Vec<NavigationItem> {
    navigation::extract(&Document::parse(html))
}

/// Rewrite with the default configuration
///
/// # Errors
///
/// See [`Rewriter::rewrite`].
pub fn rewrite(request: &RewriteRequest) -> RebrandResult<String> {
    rewriter::rewrite(request)
}
