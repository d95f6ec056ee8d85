//! Obfuscation unpacking.
//!
//! Some exported pages ship their whole body as one encoded string handed to
//! `document.write` at load time. `unpack` recovers the markup so detection
//! and rewriting see real elements; `pack` produces the same wrapper for the
//! "copy obfuscated" output.
//!
//! Unpacking never fails: any decode error is logged and the raw input is
//! returned untouched.

pub mod decode;

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

use crate::errors::RebrandResult;

pub use decode::{decode_js_string, js_unescape, uri_component_decode};

/// `document.write(unescape('...'))`, single or double quoted
static UNESCAPE_WRITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(?:window\.)?document\.write(?:ln)?\s*\(\s*unescape\s*\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*\)\s*\)"#,
    )
    .expect("UNESCAPE_WRITE_RE: hardcoded regex is valid")
});

/// `document.write(decodeURIComponent('...'))`, single or double quoted
static URI_WRITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(?:window\.)?document\.write(?:ln)?\s*\(\s*decodeURIComponent\s*\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*\)\s*\)"#,
    )
    .expect("URI_WRITE_RE: hardcoded regex is valid")
});

/// Which wrapper, if any, was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpackOutcome {
    /// `document.write(unescape(...))` decoded
    Unescape,
    /// `document.write(decodeURIComponent(...))` decoded
    UriComponent,
    /// No wrapper matched, or decoding failed
    Unchanged,
}

fn literal<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

fn try_pattern(
    raw: &str,
    pattern: &Regex,
    decode: fn(&str) -> RebrandResult<String>,
) -> Option<RebrandResult<String>> {
    let caps = pattern.captures(raw)?;
    let encoded = literal(&caps)?;
    Some(decode_js_string(encoded).and_then(|value| decode(&value)))
}

/// Unpack and report which wrapper fired.
#[must_use]
pub fn unpack_with_outcome(raw: &str) -> (String, UnpackOutcome) {
    let attempts: [(&Regex, fn(&str) -> RebrandResult<String>, UnpackOutcome); 2] = [
        (&UNESCAPE_WRITE_RE, js_unescape, UnpackOutcome::Unescape),
        (&URI_WRITE_RE, uri_component_decode, UnpackOutcome::UriComponent),
    ];

    for (pattern, decoder, outcome) in attempts {
        match try_pattern(raw, pattern, decoder) {
            Some(Ok(markup)) => {
                debug!(?outcome, bytes = markup.len(), "Unpacked self-writing document");
                return (markup, outcome);
            }
            Some(Err(e)) => {
                debug!(?outcome, "Encoded literal did not decode, keeping raw input: {}", e);
                return (raw.to_string(), UnpackOutcome::Unchanged);
            }
            None => {}
        }
    }

    (raw.to_string(), UnpackOutcome::Unchanged)
}

/// Recover plain markup from a `document.write(...)` wrapper, or return the
/// input unchanged.
#[must_use]
pub fn unpack(raw: &str) -> String {
    unpack_with_outcome(raw).0
}

/// Wrap markup in a self-writing script: the inverse of `unpack`.
#[must_use]
pub fn pack(markup: &str) -> String {
    format!(
        "<script>document.write(decodeURIComponent('{}'))</script>",
        urlencoding::encode(markup)
    )
}
