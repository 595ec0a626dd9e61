//! Deck renderer: the presentation-library target.
//!
//! Produces serializable slide specifications with inch-unit geometry, the
//! contract handed to an export collaborator. The exporter's artifact
//! layout is its own concern.

use serde::Serialize;

use crate::assemble::{assemble_slide, RenderedSlide};
use crate::mapper::{Frame, Primitive, Stroke};
use crate::model::{Deck, SlideDocument};
use crate::units::PIXELS_PER_POINT;

/// Inch-unit placement of a spec element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecFrame {
    /// Left edge in inches
    pub x: f64,
    /// Top edge in inches
    pub y: f64,
    /// Width in inches
    pub width: f64,
    /// Height in inches
    pub height: f64,
    /// Rotation in degrees
    #[serde(skip_serializing_if = "is_zero")]
    pub rotation: f64,
    /// Mirror horizontally
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub flip_h: bool,
    /// Mirror vertically
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub flip_v: bool,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl From<&Frame> for SpecFrame {
    fn from(frame: &Frame) -> Self {
        let rect = frame.inches();
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rotation: frame.rotation,
            flip_h: frame.flip_h,
            flip_v: frame.flip_v,
        }
    }
}

/// Stroke for a spec element, width in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecLine {
    /// Normalized stroke color
    pub color: String,
    /// Stroke width in points
    pub width_pt: f64,
}

impl From<&Stroke> for SpecLine {
    fn from(stroke: &Stroke) -> Self {
        Self {
            color: stroke.color.clone(),
            width_pt: stroke.width / PIXELS_PER_POINT,
        }
    }
}

/// One styled run of a spec paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecRun {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,
}

/// One paragraph of a spec text element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecParagraph {
    /// Alignment keyword: left, center, or right
    pub align: String,
    pub runs: Vec<SpecRun>,
}

/// One element of a slide specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SpecElement {
    /// A filled/stroked box (shapes and placeholders)
    Box {
        frame: SpecFrame,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<SpecLine>,
    },
    /// A text box
    Text {
        frame: SpecFrame,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<SpecLine>,
        paragraphs: Vec<SpecParagraph>,
    },
    /// A vector path
    Path {
        frame: SpecFrame,
        data: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<SpecLine>,
    },
    /// A raster image with cover-fit semantics
    Image {
        frame: SpecFrame,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        clip: Option<String>,
    },
}

/// A slide specification for the export collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSpec {
    /// Normalized background color
    pub background: String,

    /// Elements in paint order
    pub elements: Vec<SpecElement>,
}

/// Build a slide specification from an assembled slide.
pub fn slide_spec(slide: &RenderedSlide) -> SlideSpec {
    let elements = slide
        .primitives
        .iter()
        .map(|primitive| match primitive {
            Primitive::Shape(shape) => SpecElement::Box {
                frame: SpecFrame::from(&shape.frame),
                fill: shape.style.fill.clone(),
                line: shape.style.outline.as_ref().map(SpecLine::from),
            },
            Primitive::Placeholder { frame, style } => SpecElement::Box {
                frame: SpecFrame::from(frame),
                fill: style.fill.clone(),
                line: style.outline.as_ref().map(SpecLine::from),
            },
            Primitive::Text(text) => SpecElement::Text {
                frame: SpecFrame::from(&text.frame),
                fill: text.style.fill.clone(),
                line: text.style.outline.as_ref().map(SpecLine::from),
                paragraphs: text
                    .blocks
                    .iter()
                    .map(|block| SpecParagraph {
                        align: block.alignment.css().to_string(),
                        runs: block
                            .runs
                            .iter()
                            .map(|run| SpecRun {
                                text: run.text.clone(),
                                color: run.color.clone(),
                                font_face: run.font_family.clone(),
                                font_size: run.font_size_pt,
                                bold: run.bold,
                                italic: run.italic,
                                underline: run.underline.is_some(),
                            })
                            .collect(),
                    })
                    .collect(),
            },
            Primitive::Path(path) => SpecElement::Path {
                frame: SpecFrame::from(&path.frame),
                data: path.data.clone(),
                fill: path.fill.clone(),
                line: path.stroke.as_ref().map(SpecLine::from),
            },
            Primitive::Image(image) => SpecElement::Image {
                frame: SpecFrame::from(&image.frame),
                url: image.url.clone(),
                clip: image.clip_polygon.clone(),
            },
        })
        .collect();

    SlideSpec {
        background: slide.background.clone(),
        elements,
    }
}

/// Build a slide specification straight from a document.
pub fn document_spec(doc: &SlideDocument) -> SlideSpec {
    slide_spec(&assemble_slide(doc))
}

/// Build specifications for every slide of a deck, in deck order.
pub fn deck_spec(deck: &Deck) -> Vec<SlideSpec> {
    deck.slides.iter().map(document_spec).collect()
}
