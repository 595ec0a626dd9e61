//! Input format detection.
//!
//! CLI inputs are either PPTX packages (ZIP containers) or slide JSON;
//! detection goes by magic bytes with an extension fallback.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Detected input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A PPTX presentation package
    Presentation,
    /// A slide document in the JSON intermediate form
    SlideJson,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Presentation => write!(f, "PowerPoint Presentation"),
            InputFormat::SlideJson => write!(f, "Slide JSON"),
        }
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Detect the input format from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if is_zip_file(data) {
        return Ok(InputFormat::Presentation);
    }

    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | Some(b'[') => Ok(InputFormat::SlideJson),
        _ => Err(Error::UnknownFormat),
    }
}

/// Detect the input format from a file path.
///
/// Reads the file head for magic bytes; falls back to the extension when
/// the head is inconclusive.
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<InputFormat> {
    let path = path.as_ref();

    let mut head = [0u8; 16];
    let mut file = File::open(path)?;
    let read = file.read(&mut head)?;

    if let Ok(format) = detect_format_from_bytes(&head[..read]) {
        return Ok(format);
    }

    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("pptx") => Ok(InputFormat::Presentation),
        Some("json") => Ok(InputFormat::SlideJson),
        _ => Err(Error::UnknownFormat),
    }
}
