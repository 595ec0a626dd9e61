//! Output rendering for slide documents.
//!
//! This module provides renderers for converting assembled slides to the
//! two render targets plus JSON: `html` (DOM boxes in percent coordinates),
//! `deck` (inch-unit specifications for an export collaborator), and `json`.
//!
//! # Example
//!
//! ```no_run
//! use unslide::render::*;
//! use unslide::model::SlideDocument;
//!
//! let doc = SlideDocument::from_json(r#"{"pageElements": []}"#)?;
//!
//! // Render to HTML
//! let html = render_document(&doc, &RenderOptions::default())?;
//!
//! // Build an export spec
//! let spec = document_spec(&doc);
//!
//! // Render to JSON
//! let json = to_json(&doc, JsonFormat::Pretty)?;
//! # Ok::<(), unslide::Error>(())
//! ```

mod deck;
mod html;
mod json;
mod options;

pub use deck::{
    deck_spec, document_spec, slide_spec, SlideSpec, SpecElement, SpecFrame, SpecLine,
    SpecParagraph, SpecRun,
};
pub use html::{render_deck, render_document, render_slide};
pub use json::{deck_to_json, to_json, JsonFormat};
pub use options::RenderOptions;
