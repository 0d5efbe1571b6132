//! Unified error types for sbom-quality.
//!
//! Errors split into two tiers: per-document problems that are recovered
//! locally during assessment (malformed purls, unparseable documents) and
//! run-level problems that abort before any document is processed (missing
//! schema, unloadable license list).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-quality operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomQualityError {
    /// Errors during SBOM document parsing
    #[error("Failed to parse SBOM document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors (schema or license-list loading)
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Reasons a purl cannot be used downstream.
///
/// These never escape the assessment loop: the offending purl lands in the
/// invalid set and processing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PurlError {
    #[error("Malformed purl: {purl} - {reason}")]
    Malformed { purl: String, reason: String },

    /// The generic purl grammar allows omitting the version; this system
    /// requires one for a purl to count as valid.
    #[error("purl has no version: {purl}")]
    MissingVersion { purl: String },

    #[error("library component carries no purl field")]
    MissingField,
}

/// Convenient Result type for sbom-quality operations
pub type Result<T> = std::result::Result<T, SbomQualityError>;

impl SbomQualityError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }
}

impl From<std::io::Error> for SbomQualityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomQualityError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SbomQualityError::parse(
            "reading components",
            ParseErrorKind::MissingField {
                field: "type".to_string(),
                context: "component".to_string(),
            },
        );
        let display = err.to_string();
        assert!(display.contains("parse"), "unexpected message: {display}");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SbomQualityError::io("/path/to/sbom.json", io_err);
        assert!(err.to_string().contains("/path/to/sbom.json"));
    }

    #[test]
    fn test_purl_error_display() {
        let err = PurlError::MissingVersion {
            purl: "pkg:npm/lodash".to_string(),
        };
        assert!(err.to_string().contains("pkg:npm/lodash"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SbomQualityError = json_err.into();
        assert!(matches!(err, SbomQualityError::Parse { .. }));
    }
}
