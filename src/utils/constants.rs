//! Shared configuration constants for rebranding
//!
//! Default selector lists, length bounds and sentinel strings used by the
//! detector, the navigation extractor and the rewriter. `RebrandConfig`
//! starts from these values.

/// Display value of a facet that no strategy matched
pub const NOT_DETECTED: &str = "Not detected";

/// Display value of a detected logo (the URL itself travels as the source)
pub const FOUND_IMAGE: &str = "Found image";

/// Brand selectors, highest priority first
pub const BRAND_SELECTORS: &[&str] = &[
    ".navbar-brand",
    ".brand",
    ".logo",
    ".logo-text",
    ".brand-name",
    ".sidebar-header h1",
    ".sidebar-header h2",
    ".sidebar-header h3",
    "header h1",
    "header h2",
    ".app-name",
    ".site-title",
];

/// Brand text accepted by the selector strategy: exclusive (0, 40)
pub const BRAND_SELECTOR_MAX_LEN: usize = 40;

/// Brand text accepted by the heading scan: exclusive (2, 30)
pub const BRAND_HEADING_MIN_LEN: usize = 2;
pub const BRAND_HEADING_MAX_LEN: usize = 30;

/// Separators that start a trailing `<title>` suffix
pub const TITLE_SUFFIX_SEPARATORS: &[&str] = &[" - ", " | "];

/// Slogan selectors, highest priority first
pub const SLOGAN_SELECTORS: &[&str] = &[
    ".slogan",
    ".subtitle",
    ".tagline",
    ".description",
    ".sidebar-header p",
    ".sidebar-header small",
    ".sidebar-header span",
    "header p",
    "header small",
    ".hero p",
    ".hero-subtitle",
];

/// Slogan text accepted: exclusive (0, 80)
pub const SLOGAN_MAX_LEN: usize = 80;

/// Slogan candidates containing any of these (case-insensitive) are UI chrome
pub const SLOGAN_EXCLUDED_WORDS: &[&str] = &["admin", "menu", "copyright"];

/// Logo image selectors, highest priority first
pub const LOGO_SELECTORS: &[&str] = &[
    ".navbar-brand img",
    ".brand img",
    ".logo img",
    "header img",
    ".sidebar-header img",
    "img.logo",
];

/// Footer-like containers scanned for copyright lines (document order)
pub const COPYRIGHT_CONTAINER_SELECTORS: &[&str] = &[
    "footer p",
    "footer div",
    ".copyright",
    ".footer-text",
    ".footer-copyright",
];

/// Containers whose leaf descendants are scanned for "by NAME" lines
pub const BYLINE_CONTAINER_SELECTORS: &[&str] = &["footer", ".footer", ".sidebar", "aside"];

/// Containers rewritten by the company step's "by NAME"/placeholder pass.
/// Sidebars are left out: their links often read "By Region", "By date".
pub const FOOTER_CONTAINER_SELECTORS: &[&str] = &[
    "footer",
    ".footer",
    ".copyright",
    ".footer-text",
    ".footer-copyright",
];

/// "by NAME" candidates must be shorter than this
pub const BYLINE_MAX_LEN: usize = 40;

/// Raw copyright lines longer than this are truncated
pub const COMPANY_MAX_LEN: usize = 50;

/// Placeholder company names found in stock templates
pub const COMPANY_FALLBACK_TOKENS: &[&str] = &["Company Name", "Your Company"];

/// Navigation candidates: generic nav anchors plus menu-button text spans
pub const NAV_SELECTORS: &[&str] = &[
    "nav a",
    ".navbar a",
    ".menu a",
    ".sidebar a",
    "ul.nav li a",
    ".nav-item a",
    "a.nav-link",
    ".menu-item span",
    ".menu-btn span",
    "button.nav-btn span",
];

/// Badge words stripped from navigation labels
pub const NAV_BADGE_WORDS: &[&str] = &["New", "Pro", "Beta", "Hot"];

/// Navigation labels accepted: inclusive [2, 30]
pub const NAV_LABEL_MIN_LEN: usize = 2;
pub const NAV_LABEL_MAX_LEN: usize = 30;

/// Brand elements overwritten when the detected brand text is nowhere to be found
pub const BRAND_FALLBACK_SELECTORS: &[&str] = &[".navbar-brand", ".brand", ".logo", ".brand-name", "h1"];

/// Fallback brand elements are only overwritten when their text is shorter than this
pub const BRAND_FALLBACK_MAX_LEN: usize = 50;

/// Slogan elements overwritten (first match only) when the detected slogan is missing
pub const SLOGAN_FALLBACK_SELECTORS: &[&str] = &[".slogan", ".subtitle", "p.description"];

/// Delayed re-applications performed by the runtime enforcer before it
/// switches to mutation-driven reconciliation
pub const ENFORCER_RETRY_BUDGET: u32 = 5;

/// Delay between enforcer re-applications
pub const ENFORCER_RETRY_INTERVAL_MS: u32 = 400;

/// Typed input shorter than this does not trigger detection
pub const TYPED_DETECTION_MIN_LEN: usize = 20;

/// Theme used when a requested theme name is not in the catalog
pub const DEFAULT_THEME: &str = "indigo";

/// Theme selection that disables stylesheet injection
pub const ORIGINAL_THEME: &str = "original";
