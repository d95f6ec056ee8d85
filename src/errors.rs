//! Error types for rebranding operations
//!
//! Detection misses are not errors (they are `Detection::NotFound`) and unpack
//! failures degrade to the raw input, so this enum only covers the failures a
//! rewrite or preview pass can surface to the caller.

use thiserror::Error;

/// Result type alias for rebranding operations
pub type RebrandResult<T> = Result<T, RebrandError>;

/// Error types for rebranding operations
#[derive(Debug, Error)]
pub enum RebrandError {
    /// A CSS selector could not be parsed
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A color value is not a `#rrggbb` hex triple
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// Encoded payload could not be decoded
    #[error("Failed to decode payload: {0}")]
    Decode(String),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for RebrandError {
    fn from(error: anyhow::Error) -> Self {
        RebrandError::Other(error.to_string())
    }
}

impl RebrandError {
    /// Build an `InvalidSelector` from any displayable parser error
    pub fn invalid_selector(selector: &str, message: impl std::fmt::Display) -> Self {
        RebrandError::InvalidSelector {
            selector: selector.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the error came from user-supplied input rather than the document
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RebrandError::InvalidSelector { .. }
                | RebrandError::InvalidColor(_)
                | RebrandError::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_error_message() {
        let err = RebrandError::invalid_selector("div[", "unexpected end");
        assert_eq!(
            err.to_string(),
            "Invalid CSS selector 'div[': unexpected end"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: RebrandError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, RebrandError::Other(ref m) if m == "boom"));
        assert!(!err.is_input_error());
    }
}
