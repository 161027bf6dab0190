//! Error types for palette definition, generation and stylesheet reading.
//!
//! Every failure surfaces as a [`PaletteError`]. Generation errors are detected
//! before any output is produced, so a caller either receives a complete
//! [`Palette`](crate::Palette) or an error, never a partial result.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, generating or reading palettes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Structural problem in the input: a missing axis or fixed color,
    /// mismatched scale lengths, duplicate theme ids and similar.
    #[error("invalid spec ({context}): {message}")]
    InvalidSpec {
        /// Where the problem was found, e.g. `theme 'dark'` or `shade scale`.
        context: String,
        /// What was wrong.
        message: String,
    },

    /// A numeric value lies outside its domain. For lightness this is
    /// `[0, 1]`, checked on the value that would be emitted.
    #[error("{field} of theme '{theme}' is {value}, outside {bounds}")]
    InvalidRange {
        /// Theme id.
        theme: String,
        /// The offending field, e.g. `lightness of --neutral-100`.
        field: String,
        /// The rejected value.
        value: f64,
        /// Human readable domain, e.g. `[0, 1]`.
        bounds: &'static str,
    },

    /// A definition document could not be deserialized.
    #[error("failed to parse definitions{}: {message}", display_path(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML/JSON parser.
        message: String,
    },

    /// A preference file is not a JSON object of strings.
    #[error("failed to parse preferences in {}: {message}", .path.display())]
    Preferences {
        /// Path of the preference file.
        path: PathBuf,
        /// Error message from the JSON parser.
        message: String,
    },

    /// A definition or preference file could not be read or written.
    #[error("failed to load: {message}")]
    Load {
        /// Error message, including the path.
        message: String,
    },

    /// A stylesheet could not be read back into a palette.
    #[error("invalid stylesheet: {message}")]
    Css {
        /// Description of the offending construct.
        message: String,
    },

    /// A palette could not be serialized to a structured format.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl PaletteError {
    pub(crate) fn spec(context: impl Into<String>, message: impl Into<String>) -> Self {
        PaletteError::InvalidSpec {
            context: context.into(),
            message: message.into(),
        }
    }

    pub(crate) fn css(message: impl Into<String>) -> Self {
        PaletteError::Css {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        PaletteError::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for PaletteError {
    fn from(err: serde_yaml::Error) -> Self {
        PaletteError::Serialize(err.to_string())
    }
}

impl From<csv::Error> for PaletteError {
    fn from(err: csv::Error) -> Self {
        PaletteError::Serialize(err.to_string())
    }
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spec_display() {
        let err = PaletteError::spec("theme 'dark'", "missing axis 'neutral'");
        let msg = err.to_string();
        assert!(msg.contains("theme 'dark'"));
        assert!(msg.contains("missing axis 'neutral'"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = PaletteError::InvalidRange {
            theme: "light".to_string(),
            field: "lightness of --neutral-100".to_string(),
            value: 1.2,
            bounds: "[0, 1]",
        };
        assert_eq!(
            err.to_string(),
            "lightness of --neutral-100 of theme 'light' is 1.2, outside [0, 1]"
        );
    }

    #[test]
    fn test_parse_display_with_path() {
        let err = PaletteError::Parse {
            path: Some(PathBuf::from("themes.yaml")),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse definitions in themes.yaml: bad indent"
        );
    }

    #[test]
    fn test_parse_display_without_path() {
        let err = PaletteError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse definitions: bad indent");
    }

    #[test]
    fn test_preferences_display() {
        let err = PaletteError::Preferences {
            path: PathBuf::from(".tonekit/preferences.json"),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse preferences in .tonekit/preferences.json: expected value"
        );
    }
}
