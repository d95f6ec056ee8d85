//! Editing session: the glue between an editing surface and the engine.
//!
//! A `Session` owns the original text, the field store and the navigation
//! override store. Every preview or export builds a fresh `RewriteRequest`
//! from that state, so the rewrite output never feeds back into the input.

pub mod fields;

use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::RebrandConfig;
use crate::detector::{BrandingDetector, Detection, DetectionResult};
use crate::errors::RebrandResult;
use crate::markup::Document;
use crate::navigation::{NavOverrideStore, NavigationExtractor, NavigationItem};
use crate::rewriter::{Replacements, RewriteRequest, Rewriter};
use crate::theme::{StyleOptions, ThemeSelection};
use crate::unpacker::{pack, unpack_with_outcome};
use crate::utils::{FOUND_IMAGE, NOT_DETECTED, TYPED_DETECTION_MIN_LEN, char_len};

pub use fields::{Field, FieldStore};

/// What the preview renderer should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Rewritten document
    Document(String),
    /// Error panel markup replacing the previous preview
    Error(String),
}

impl Preview {
    /// Markup to render, whichever variant this is
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Preview::Document(html) | Preview::Error(html) => html,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Preview::Error(_))
    }
}

/// Panel shown instead of the preview when a rewrite fails
#[must_use]
pub fn error_panel(message: &str) -> String {
    format!(
        "<div style=\"color:red;padding:20px;\">Error generating preview: {}</div>",
        html_escape::encode_text(message)
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Rewritten markup as is
    #[default]
    Plain,
    /// Wrapped in a self-writing script
    Packed,
}

#[derive(Debug, Clone)]
pub struct Session {
    detector: BrandingDetector,
    extractor: NavigationExtractor,
    rewriter: Rewriter,
    original: String,
    fields: FieldStore,
    detection: DetectionResult,
    nav: NavOverrideStore,
    enforce_runtime: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_parts(
            BrandingDetector::with_defaults().clone(),
            NavigationExtractor::with_defaults().clone(),
            Rewriter::with_defaults().clone(),
        )
    }
}

impl Session {
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` for a configured selector that
    /// does not parse.
    pub fn new(config: &RebrandConfig) -> RebrandResult<Self> {
        Ok(Self::from_parts(
            BrandingDetector::new(config)?,
            NavigationExtractor::new(config)?,
            Rewriter::new(config)?,
        ))
    }

    fn from_parts(
        detector: BrandingDetector,
        extractor: NavigationExtractor,
        rewriter: Rewriter,
    ) -> Self {
        Self {
            detector,
            extractor,
            rewriter,
            original: String::new(),
            fields: FieldStore::default(),
            detection: DetectionResult::default(),
            nav: NavOverrideStore::default(),
            enforce_runtime: false,
        }
    }

    /// Text typed or pasted into the editor.
    ///
    /// Detection only runs for input longer than 20 characters while no brand
    /// replacement has been entered, so typing does not clobber user edits.
    /// Navigation is always re-extracted.
    pub fn load_typed(&mut self, text: impl Into<String>) {
        self.original = text.into();
        if char_len(self.original.trim()) > TYPED_DETECTION_MIN_LEN
            && self.fields.non_empty(Field::BrandReplacement).is_none()
        {
            self.run_detection();
        }
        self.refresh_navigation();
    }

    /// Full contents of an uploaded file: unpacked first, then every detected
    /// and replacement field starts over.
    pub fn load_file(&mut self, text: &str) {
        let (markup, outcome) = unpack_with_outcome(text);
        info!(?outcome, bytes = markup.len(), "Loaded file");

        self.original = markup;
        self.fields.reset_detected();
        self.fields.clear_replacements();
        self.detection = DetectionResult::default();
        self.run_detection();
        self.refresh_navigation();
    }

    /// Read a file from disk and `load_file` it.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::Io` if the file cannot be read.
    pub async fn load_path(&mut self, path: impl AsRef<Path>) -> RebrandResult<()> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        debug!("Read {}", path.display());
        self.load_file(&text);
        Ok(())
    }

    /// Detect and auto-fill: detected brand/slogan/company overwrite their
    /// replacement fields, the logo source only fills an empty one.
    fn run_detection(&mut self) {
        let doc = Document::parse(&self.original);
        self.detection = self.detector.detect(&doc);

        for (field, detection) in [
            (Field::DetectedBrand, &self.detection.brand),
            (Field::DetectedSlogan, &self.detection.slogan),
            (Field::DetectedLogo, &self.detection.logo),
            (Field::DetectedCompany, &self.detection.company),
        ] {
            self.fields.set(field, detection.display_value());
        }

        for (field, detection) in [
            (Field::BrandReplacement, &self.detection.brand),
            (Field::SloganReplacement, &self.detection.slogan),
            (Field::CompanyReplacement, &self.detection.company),
        ] {
            if let Some(value) = detection.value() {
                self.fields.set(field, value);
            }
        }
        if let Some(source) = self.detection.logo.source() {
            if self.fields.non_empty(Field::LogoReplacement).is_none() {
                self.fields.set(Field::LogoReplacement, source);
            }
        }

        info!(found = self.detection.found_count(), "Branding detected");
    }

    /// Rebuild navigation items and drop every override
    pub fn refresh_navigation(&mut self) {
        let doc = Document::parse(&self.original);
        let items = self.extractor.extract(&doc);
        debug!(items = items.len(), "Navigation refreshed");
        self.nav.rebuild(items);
    }

    /// Set a field. Writing a detected field also updates the detection
    /// record used as the substitution key.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let record = || {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == NOT_DETECTED {
                Detection::NotFound
            } else {
                Detection::found(trimmed)
            }
        };
        match field {
            Field::DetectedBrand => self.detection.brand = record(),
            Field::DetectedSlogan => self.detection.slogan = record(),
            Field::DetectedCompany => self.detection.company = record(),
            Field::DetectedLogo => {
                self.detection.logo = match record() {
                    Detection::Found { value, .. } if value != FOUND_IMAGE => {
                        Detection::found_with_source(FOUND_IMAGE, value)
                    }
                    Detection::Found { .. } => self.detection.logo.clone(),
                    Detection::NotFound => Detection::NotFound,
                };
            }
            _ => {}
        }
        self.fields.set(field, value);
    }

    /// Returns `false` for an ordinal with no navigation item
    pub fn set_nav_override(&mut self, ordinal_index: usize, replacement: impl Into<String>) -> bool {
        self.nav.set(ordinal_index, replacement)
    }

    pub fn set_enforce_runtime(&mut self, enabled: bool) {
        self.enforce_runtime = enabled;
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    #[must_use]
    pub fn detection(&self) -> &DetectionResult {
        &self.detection
    }

    #[must_use]
    pub fn navigation(&self) -> &[NavigationItem] {
        self.nav.items()
    }

    #[must_use]
    pub fn nav_overrides(&self) -> &NavOverrideStore {
        &self.nav
    }

    /// Style options read from the field store; unparsable values fall back
    /// to their defaults.
    #[must_use]
    pub fn style_options(&self) -> StyleOptions {
        fn parsed<T: std::str::FromStr<Err = crate::errors::RebrandError> + Default>(
            raw: &str,
        ) -> T {
            if raw.trim().is_empty() {
                return T::default();
            }
            raw.parse().unwrap_or_else(|e| {
                warn!("{}, using default", e);
                T::default()
            })
        }

        StyleOptions {
            color_mode: parsed(self.fields.get(Field::ColorMode)),
            background: parsed(self.fields.get(Field::BackgroundStyle)),
            nav_position: parsed(self.fields.get(Field::NavPosition)),
            font_family: self.fields.non_empty(Field::FontFamily).map(str::to_string),
            primary_color: self.fields.non_empty(Field::PrimaryColor).map(str::to_string),
        }
    }

    /// Snapshot the current state as a rewrite request
    #[must_use]
    pub fn build_request(&self) -> RewriteRequest {
        let replacements = Replacements {
            brand: self.fields.get(Field::BrandReplacement).to_string(),
            slogan: self.fields.get(Field::SloganReplacement).to_string(),
            logo: self.fields.get(Field::LogoReplacement).to_string(),
            company: self.fields.get(Field::CompanyReplacement).to_string(),
        };

        RewriteRequest::new(self.original.clone())
            .detected(self.detection.clone())
            .replacements(replacements)
            .nav_overrides(self.nav.to_overrides())
            .theme(ThemeSelection::from_name(self.fields.get(Field::ThemeName)))
            .style(self.style_options())
            .enforce_runtime(self.enforce_runtime)
    }

    /// Rewrite for the preview renderer. Never fails: an error becomes an
    /// error panel that replaces the previous preview.
    #[must_use]
    pub fn preview(&self) -> Preview {
        match self.rewriter.rewrite(&self.build_request()) {
            Ok(html) => Preview::Document(html),
            Err(e) => {
                if e.is_input_error() {
                    warn!("Preview rejected input: {}", e);
                } else {
                    error!("Preview generation failed: {}", e);
                }
                Preview::Error(error_panel(&e.to_string()))
            }
        }
    }

    /// Rewritten markup for the clipboard or a download.
    ///
    /// # Errors
    ///
    /// Propagates the rewrite error.
    pub fn export(&self, format: ExportFormat) -> RebrandResult<String> {
        let html = self.rewriter.rewrite(&self.build_request())?;
        Ok(match format {
            ExportFormat::Plain => html,
            ExportFormat::Packed => pack(&html),
        })
    }

    /// `export` straight to a file.
    ///
    /// # Errors
    ///
    /// Propagates the rewrite error or `RebrandError::Io` from the write.
    pub async fn export_to(&self, path: impl AsRef<Path>, format: ExportFormat) -> RebrandResult<()> {
        let output = self.export(format)?;
        tokio::fs::write(path.as_ref(), output).await?;
        info!("Exported to {}", path.as_ref().display());
        Ok(())
    }
}
