//! # unslide
//!
//! PowerPoint slide extraction to a JSON intermediate form and HTML
//! rendering.
//!
//! This library parses PPTX presentations into a slide schema (positioned
//! page elements with geometry, fills, outlines, text runs, paths, and
//! images), normalizes units and colors, and renders slides as HTML or as
//! inch-unit specifications for an export library.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unslide::render::RenderOptions;
//!
//! // Parse a presentation into the JSON intermediate form
//! let deck = unslide::parse_file("slides.pptx")?;
//! println!("Slides: {}", deck.slide_count());
//!
//! // Render a pasted slide document to HTML
//! let doc = unslide::document_from_json(r#"{"pageElements": []}"#)?;
//! let html = unslide::render_html(&doc, &RenderOptions::default())?;
//! # Ok::<(), unslide::Error>(())
//! ```
//!
//! ## Features
//!
//! - `pptx` (default): PPTX presentation front-end

pub mod assemble;
pub mod color;
pub mod detect;
pub mod error;
pub mod mapper;
pub mod model;
pub mod render;
pub mod session;
pub mod units;

#[cfg(feature = "pptx")]
pub mod pptx;

// Re-exports
pub use assemble::{assemble_slide, RenderedSlide};
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use mapper::{map_element, Primitive, RenderWarning};
pub use model::{Deck, PageElement, SlideDocument};
pub use session::ViewerSession;

use std::path::Path;

/// Parse a presentation file into a deck.
///
/// # Example
///
/// ```no_run
/// let deck = unslide::parse_file("slides.pptx")?;
/// println!("Slides: {}", deck.slide_count());
/// # Ok::<(), unslide::Error>(())
/// ```
#[cfg(feature = "pptx")]
pub fn parse_file(path: impl AsRef<Path>) -> Result<Deck> {
    pptx::PptxParser::open(path)?.parse()
}

/// Parse a presentation from bytes.
#[cfg(feature = "pptx")]
pub fn parse_bytes(data: Vec<u8>) -> Result<Deck> {
    pptx::PptxParser::from_bytes(data)?.parse()
}

/// Parse a slide document from its JSON intermediate form.
///
/// Rejects input missing the top-level `pageElements` sequence with a
/// descriptive error.
pub fn document_from_json(json: &str) -> Result<SlideDocument> {
    SlideDocument::from_json(json)
}

/// Render a slide document to HTML.
pub fn render_html(doc: &SlideDocument, options: &render::RenderOptions) -> Result<String> {
    render::render_document(doc, options)
}
