//! Error types for the cvmark library.

use std::io;
use thiserror::Error;

/// Result type alias for cvmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the conversion boundary.
///
/// The core transformations (frontmatter extraction, parsing,
/// Markdown serialization) are total and never return these; errors
/// are reserved for I/O, format detection, and the JSON transport
/// form. Structural problems with a document are not errors either --
/// they are reported by [`crate::validate`] as a defect list.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither the Markdown dialect nor the structured JSON form.
    #[error("Unknown input format: neither CV Markdown nor structured JSON")]
    UnknownFormat,

    /// The structured JSON form could not be read or written.
    #[error("JSON transport error: {0}")]
    Json(String),

    /// A persisted document used a legacy shape that could not be normalized.
    #[error("Unrecognized legacy document shape: {0}")]
    LegacyShape(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(
            err.to_string(),
            "Unknown input format: neither CV Markdown nor structured JSON"
        );

        let err = Error::Json("eof".to_string());
        assert_eq!(err.to_string(), "JSON transport error: eof");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_serde_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{");
        let err: Error = bad.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
