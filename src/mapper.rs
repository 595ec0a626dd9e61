//! Element-to-primitive mapping.
//!
//! Converts one page element into a renderer-agnostic primitive carrying
//! normalized pixel geometry. Both render targets (DOM percentages, deck
//! inches) project from the same [`Frame`], so they stay visually
//! consistent.

use crate::color::normalize_color;
use crate::error::Error;
use crate::model::{
    Alignment, CropProperties, ElementContent, Fill, Measure, Outline, PageElement, Paragraph,
    TextBody,
};
use crate::units::{
    points_from_font_size, to_inches, to_pixels, CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX,
};

/// Kind of non-fatal normalization warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A measurement could not be converted to pixels
    UnsupportedUnit,
    /// A color string could not be normalized to hex
    UnsupportedColorFormat,
}

/// A non-fatal warning attached to the element that produced it.
///
/// One malformed property degrades to a warning instead of blanking the
/// whole slide; the raw value is kept in place of the normalized one.
#[derive(Debug, Clone)]
pub struct RenderWarning {
    /// Name of the affected element
    pub element: String,
    /// Warning kind
    pub kind: WarningKind,
    /// Human-readable detail
    pub detail: String,
}

/// Normalized placement: pixels on the 16:9 canvas, plus rotation and flips.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// Rotation in degrees
    pub rotation: f64,
    /// Mirror horizontally
    pub flip_h: bool,
    /// Mirror vertically
    pub flip_v: bool,
}

/// A rectangle in percent-of-canvas coordinates (DOM target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A rectangle in inches (deck target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InchRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Project onto the canvas as percentages.
    pub fn percent(&self) -> PercentRect {
        PercentRect {
            left: self.x / CANVAS_WIDTH_PX * 100.0,
            top: self.y / CANVAS_HEIGHT_PX * 100.0,
            width: self.width / CANVAS_WIDTH_PX * 100.0,
            height: self.height / CANVAS_HEIGHT_PX * 100.0,
        }
    }

    /// Project into inches.
    pub fn inches(&self) -> InchRect {
        InchRect {
            x: to_inches(self.x),
            y: to_inches(self.y),
            width: to_inches(self.width),
            height: to_inches(self.height),
        }
    }

    /// CSS transform for this frame, or `None` when untransformed.
    ///
    /// Rotation is applied first, then mirrors, so flips act in the
    /// element's own local frame.
    pub fn css_transform(&self) -> Option<String> {
        if self.rotation == 0.0 && !self.flip_h && !self.flip_v {
            return None;
        }
        let mut transform = format!("rotate({}deg)", self.rotation);
        if self.flip_h {
            transform.push_str(" scaleX(-1)");
        }
        if self.flip_v {
            transform.push_str(" scaleY(-1)");
        }
        Some(transform)
    }
}

/// Stroke styling derived from an element outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Normalized stroke color
    pub color: String,
    /// Stroke width in pixels
    pub width: f64,
}

/// Fill and outline styling shared by box-like primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxStyle {
    /// Normalized fill color
    pub fill: Option<String>,
    /// Stroke, when the element carries an outline
    pub outline: Option<Stroke>,
}

/// Pixel insets applied uniformly to every paragraph of a text body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Underline paint for a styled run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnderlinePaint {
    /// Normalized underline color, when one is given
    pub color: Option<String>,
}

/// One styled run of a mapped paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub font_size_pt: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub underline: Option<UnderlinePaint>,
}

/// One mapped paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    pub alignment: Alignment,
    /// Space before the paragraph, in pixels
    pub space_before: Option<f64>,
    /// Space after the paragraph, in pixels
    pub space_after: Option<f64>,
    pub runs: Vec<StyledRun>,
}

/// Text primitive: a styled box with paragraphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPrimitive {
    pub frame: Frame,
    pub style: BoxStyle,
    pub padding: EdgeInsets,
    pub blocks: Vec<TextBlock>,
}

/// Filled/stroked shape primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePrimitive {
    pub frame: Frame,
    pub style: BoxStyle,
    /// Shape kind tag; rectangle when the element left it unspecified
    pub shape_type: String,
}

/// Vector path primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPrimitive {
    pub frame: Frame,
    /// Path fragments joined into one drawable path
    pub data: String,
    /// Fill color, or `None` for transparent
    pub fill: Option<String>,
    /// Stroke, or `None` for no stroke
    pub stroke: Option<Stroke>,
}

/// Image primitive with cover-fit semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePrimitive {
    pub frame: Frame,
    /// Element name, used as alternative text
    pub alt: String,
    pub url: String,
    /// Clip polygon point list, comma-joined, when clip points exist
    pub clip_polygon: Option<String>,
    /// Crop offsets, carried but not applied to geometry
    pub crop: Option<CropProperties>,
}

/// A renderer-agnostic slide primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(TextPrimitive),
    Shape(ShapePrimitive),
    Path(PathPrimitive),
    Image(ImagePrimitive),
    /// Empty positioned box for a content-less element
    Placeholder { frame: Frame, style: BoxStyle },
}

impl Primitive {
    /// The normalized frame of this primitive.
    pub fn frame(&self) -> &Frame {
        match self {
            Primitive::Text(t) => &t.frame,
            Primitive::Shape(s) => &s.frame,
            Primitive::Path(p) => &p.frame,
            Primitive::Image(i) => &i.frame,
            Primitive::Placeholder { frame, .. } => frame,
        }
    }
}

/// Collects warnings for one element while resolving its properties.
struct ElementScope<'a> {
    element: &'a str,
    warnings: Vec<RenderWarning>,
}

impl<'a> ElementScope<'a> {
    fn new(element: &'a str) -> Self {
        Self {
            element,
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, kind: WarningKind, detail: String) {
        log::warn!("element `{}`: {}", self.element, detail);
        self.warnings.push(RenderWarning {
            element: self.element.to_string(),
            kind,
            detail,
        });
    }

    /// Resolve a measure to pixels; on an unsupported unit, keep the raw
    /// magnitude and attach a warning.
    fn px(&mut self, measure: Measure, what: &str) -> f64 {
        match to_pixels(measure) {
            Ok(px) => px,
            Err(e) => {
                self.warn(
                    WarningKind::UnsupportedUnit,
                    format!("{} for {}, raw magnitude kept", e, what),
                );
                measure.value
            }
        }
    }

    /// Normalize a color; on failure, keep the raw string and attach a
    /// warning.
    fn color(&mut self, raw: &str) -> String {
        match normalize_color(raw) {
            Ok(normalized) => normalized.into_owned(),
            Err(e) => {
                let detail = match &e {
                    Error::UnsupportedColorFormat(msg) => msg.clone(),
                    other => other.to_string(),
                };
                self.warn(
                    WarningKind::UnsupportedColorFormat,
                    format!("{}, raw value kept", detail),
                );
                raw.to_string()
            }
        }
    }

    fn fill_color(&mut self, fill: Option<&Fill>) -> Option<String> {
        fill.and_then(|f| f.solid_color().map(|c| c.to_string()))
            .map(|c| self.color(&c))
    }

    fn stroke(&mut self, outline: Option<&Outline>) -> Option<Stroke> {
        let outline = outline?;
        let color = outline
            .outline_fill
            .as_ref()
            .and_then(|f| f.solid_color().map(|c| c.to_string()))
            .unwrap_or_else(|| "black".to_string());
        let color = self.color(&color);
        let width = outline
            .weight
            .map(|w| self.px(w, "outline weight"))
            .unwrap_or(1.0);
        Some(Stroke { color, width })
    }
}

/// Map one page element to a primitive.
///
/// Never fails: unit and color problems degrade to warnings, and an
/// element with no content maps to an empty positioned placeholder.
pub fn map_element(element: &PageElement) -> (Primitive, Vec<RenderWarning>) {
    let mut scope = ElementScope::new(&element.name);

    let frame = Frame {
        x: scope.px(element.position.x, "position.x"),
        y: scope.px(element.position.y, "position.y"),
        width: scope.px(element.size.width, "size.width"),
        height: scope.px(element.size.height, "size.height"),
        rotation: element.rotate.unwrap_or(0.0),
        flip_h: element.flip_h,
        flip_v: element.flip_v,
    };

    let style = BoxStyle {
        fill: scope.fill_color(element.fill.as_ref()),
        outline: scope.stroke(element.outline.as_ref()),
    };

    let primitive = match &element.content {
        ElementContent::Shape(shape) => match shape.text.as_ref().filter(|t| !t.is_empty()) {
            Some(body) => Primitive::Text(map_text(body, frame, style, &mut scope)),
            None => Primitive::Shape(ShapePrimitive {
                frame,
                style,
                shape_type: shape
                    .shape_type
                    .clone()
                    .unwrap_or_else(|| "RECTANGLE".to_string()),
            }),
        },
        ElementContent::Path(path) => Primitive::Path(PathPrimitive {
            frame,
            data: path.joined(),
            fill: style.fill,
            stroke: style.outline,
        }),
        ElementContent::Image(image) => Primitive::Image(ImagePrimitive {
            frame,
            alt: element.name.clone(),
            url: image.content_url.clone(),
            clip_polygon: if image.clip_path.is_empty() {
                None
            } else {
                Some(image.clip_path.join(", "))
            },
            crop: image.crop_properties.clone(),
        }),
        ElementContent::Empty => Primitive::Placeholder { frame, style },
    };

    (primitive, scope.warnings)
}

fn map_text(
    body: &TextBody,
    frame: Frame,
    style: BoxStyle,
    scope: &mut ElementScope<'_>,
) -> TextPrimitive {
    // Body insets apply uniformly to every paragraph.
    let padding = EdgeInsets {
        top: scope.px(body.body_property.padding_top, "padding top"),
        right: scope.px(body.body_property.padding_right, "padding right"),
        bottom: scope.px(body.body_property.padding_bottom, "padding bottom"),
        left: scope.px(body.body_property.padding_left, "padding left"),
    };

    let blocks = body
        .paragraphs
        .iter()
        .map(|p| map_paragraph(p, scope))
        .collect();

    TextPrimitive {
        frame,
        style,
        padding,
        blocks,
    }
}

fn map_paragraph(paragraph: &Paragraph, scope: &mut ElementScope<'_>) -> TextBlock {
    let props = &paragraph.paragraph_property;

    // Spans without a run (line-break markers) contribute nothing and do
    // not disturb their siblings.
    let runs = paragraph
        .text_spans
        .iter()
        .filter_map(|span| span.text_run.as_ref())
        .map(|run| StyledRun {
            text: run.content.clone(),
            color: run
                .style
                .foreground_color
                .as_deref()
                .map(|c| scope.color(c)),
            font_family: run.style.font_family.clone(),
            font_size_pt: run.style.font_size.map(points_from_font_size),
            bold: run.style.bold,
            italic: run.style.italic,
            underline: run
                .style
                .underline
                .as_ref()
                .filter(|u| u.is_visible())
                .map(|u| UnderlinePaint {
                    color: u.color.as_deref().map(|c| scope.color(c)),
                }),
        })
        .collect();

    TextBlock {
        alignment: props.alignment,
        space_before: props.space_before.map(|m| scope.px(m, "space before")),
        space_after: props.space_after.map(|m| scope.px(m, "space after")),
        runs,
    }
}
