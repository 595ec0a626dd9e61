//! Error types for the unslide library.

use std::io;
use thiserror::Error;

/// Result type alias for unslide operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, validating, or rendering slides.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input JSON failed to parse or lacks a required top-level field.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The presentation file could not be parsed.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// The input format could not be determined.
    #[error("Unknown input format")]
    UnknownFormat,

    /// A measurement carries a unit with no defined conversion.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// A color value is rgb-shaped but not representable as hex.
    #[error("Unsupported color format: {0}")]
    UnsupportedColorFormat(String),

    /// A page element populates more than one content kind.
    #[error("Conflicting element content: {0}")]
    ContentConflict(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Error serializing to or from JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
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
        assert_eq!(err.to_string(), "Unknown input format");

        let err = Error::UnsupportedUnit("FURLONG".to_string());
        assert_eq!(err.to_string(), "Unsupported unit: FURLONG");

        let err = Error::MalformedInput("missing field `pageElements`".to_string());
        assert!(err.to_string().contains("pageElements"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
