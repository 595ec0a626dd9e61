//! Page element model.
//!
//! The wire schema represents element content as simultaneously-optional
//! keys (`shape` carrying either text or path data, and a separate `image`).
//! Here the content is a closed sum with a single discriminant, validated
//! when the document is constructed: an element populating more than one
//! content kind is rejected instead of being resolved by dispatch order.

use serde::{Deserialize, Serialize};

use super::geometry::{Measure, Position, Size};
use super::text::TextBody;

/// Wire tag for a solid fill.
pub const SOLID_FILL: &str = "SOLID_FILL";

/// A fill descriptor: a type tag plus an optional solid color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Fill type tag (`SOLID_FILL`, ...)
    #[serde(default)]
    pub fill_type: String,

    /// Solid color in `rgb(r, g, b)` textual form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solid_fill: Option<String>,
}

impl Fill {
    /// Create a solid fill with the given color string.
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            fill_type: SOLID_FILL.to_string(),
            solid_fill: Some(color.into()),
        }
    }

    /// Whether this is a solid fill.
    pub fn is_solid(&self) -> bool {
        self.fill_type.eq_ignore_ascii_case(SOLID_FILL)
            || self.fill_type.eq_ignore_ascii_case("SOLID")
    }

    /// The solid color, if this is a solid fill carrying one.
    pub fn solid_color(&self) -> Option<&str> {
        if self.is_solid() {
            self.solid_fill.as_deref()
        } else {
            None
        }
    }
}

/// An outline: stroke color (fill-shaped) plus stroke weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Stroke color descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_fill: Option<Fill>,

    /// Stroke weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measure>,
}

/// Shape content: a shape kind tag plus an optional text body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeContent {
    /// Shape kind tag; a missing tag renders as a rectangle
    pub shape_type: Option<String>,

    /// Text body, if the shape carries text
    pub text: Option<TextBody>,
}

impl ShapeContent {
    /// Whether the shape carries a populated text body.
    pub fn has_text(&self) -> bool {
        self.text.as_ref().map(|t| !t.is_empty()).unwrap_or(false)
    }
}

/// Vector path content: ordered SVG path command fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathContent {
    /// Path command fragments in draw order
    pub path_data: Vec<String>,
}

impl PathContent {
    /// Join the fragments into one drawable path.
    pub fn joined(&self) -> String {
        self.path_data.join(" ")
    }
}

/// Crop offsets for an image, one per edge.
///
/// Parsed and carried but not applied to the rendered geometry; whether
/// they should alter the visible region is pending a product decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProperties {
    /// Left edge offset
    #[serde(default)]
    pub left_offset: Measure,

    /// Top edge offset
    #[serde(default)]
    pub top_offset: Measure,

    /// Right edge offset
    #[serde(default)]
    pub right_offset: Measure,

    /// Bottom edge offset
    #[serde(default)]
    pub bottom_offset: Measure,
}

/// Raster image content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Image name, informational only
    #[serde(default)]
    pub name: String,

    /// Source URL or package-relative path
    pub content_url: String,

    /// Clip-path polygon point strings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clip_path: Vec<String>,

    /// Crop offsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_properties: Option<CropProperties>,
}

/// The single content discriminant of a page element.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ElementContent {
    /// A shape, with or without text
    Shape(ShapeContent),
    /// A vector path
    Path(PathContent),
    /// A raster image
    Image(ImageContent),
    /// No content: an empty positioned box
    #[default]
    Empty,
}

/// One positioned visual unit on a slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPageElement", into = "RawPageElement")]
pub struct PageElement {
    /// Element name, informational only
    pub name: String,

    /// Extent
    pub size: Size,

    /// Placement from the slide's top-left corner
    pub position: Position,

    /// Z-order; rendering sorts ascending, ties keep input order
    pub order: i64,

    /// Rotation in degrees, applied before flips
    pub rotate: Option<f64>,

    /// Mirror horizontally
    pub flip_h: bool,

    /// Mirror vertically
    pub flip_v: bool,

    /// Fill descriptor
    pub fill: Option<Fill>,

    /// Outline descriptor
    pub outline: Option<Outline>,

    /// Content variant
    pub content: ElementContent,
}

impl PageElement {
    /// Create a content-less element at the given placement.
    pub fn empty(name: impl Into<String>, size: Size, position: Position, order: i64) -> Self {
        Self {
            name: name.into(),
            size,
            position,
            order,
            ..Default::default()
        }
    }

    /// Set the content variant.
    pub fn with_content(mut self, content: ElementContent) -> Self {
        self.content = content;
        self
    }

    /// Set the fill.
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the outline.
    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }
}

/// Wire form of a shape: text and path data share the `shape` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<TextBody>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    path_data: Option<Vec<String>>,
}

/// Wire form of a page element, content kinds as optional keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageElement {
    #[serde(default)]
    name: String,

    size: Size,

    position: Position,

    #[serde(default)]
    order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    rotate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill: Option<Fill>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    outline: Option<Outline>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    flip_h: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    flip_v: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<RawShape>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<ImageContent>,
}

impl TryFrom<RawPageElement> for PageElement {
    type Error = String;

    fn try_from(raw: RawPageElement) -> std::result::Result<Self, Self::Error> {
        let content = match (raw.shape, raw.image) {
            (Some(_), Some(_)) => {
                return Err(format!(
                    "element `{}` populates both shape and image content",
                    raw.name
                ));
            }
            (Some(shape), None) => match (shape.text, shape.path_data) {
                (Some(_), Some(_)) => {
                    return Err(format!(
                        "element `{}` populates both text and path content",
                        raw.name
                    ));
                }
                (text, None) => ElementContent::Shape(ShapeContent {
                    shape_type: shape.shape_type,
                    text,
                }),
                (None, Some(path_data)) => ElementContent::Path(PathContent { path_data }),
            },
            (None, Some(image)) => ElementContent::Image(image),
            (None, None) => ElementContent::Empty,
        };

        Ok(Self {
            name: raw.name,
            size: raw.size,
            position: raw.position,
            order: raw.order,
            rotate: raw.rotate,
            flip_h: raw.flip_h,
            flip_v: raw.flip_v,
            fill: raw.fill,
            outline: raw.outline,
            content,
        })
    }
}

impl From<PageElement> for RawPageElement {
    fn from(element: PageElement) -> Self {
        let (shape, image) = match element.content {
            ElementContent::Shape(s) => (
                Some(RawShape {
                    name: None,
                    shape_type: s.shape_type,
                    text: s.text,
                    path_data: None,
                }),
                None,
            ),
            ElementContent::Path(p) => (
                Some(RawShape {
                    path_data: Some(p.path_data),
                    ..Default::default()
                }),
                None,
            ),
            ElementContent::Image(i) => (None, Some(i)),
            ElementContent::Empty => (None, None),
        };

        Self {
            name: element.name,
            size: element.size,
            position: element.position,
            order: element.order,
            rotate: element.rotate,
            fill: element.fill,
            outline: element.outline,
            flip_h: element.flip_h,
            flip_v: element.flip_v,
            shape,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_json(extra: &str) -> String {
        format!(
            r#"{{
                "name": "el",
                "size": {{"width": {{"value": 10, "unit": "PX"}}, "height": {{"value": 10, "unit": "PX"}}}},
                "position": {{"x": {{"value": 0, "unit": "PX"}}, "y": {{"value": 0, "unit": "PX"}}}},
                "order": 1{}
            }}"#,
            extra
        )
    }

    #[test]
    fn test_empty_element() {
        let el: PageElement = serde_json::from_str(&base_json("")).unwrap();
        assert_eq!(el.content, ElementContent::Empty);
        assert_eq!(el.order, 1);
    }

    #[test]
    fn test_shape_without_path_data() {
        let el: PageElement =
            serde_json::from_str(&base_json(r#", "shape": {"shapeType": "RECTANGLE"}"#)).unwrap();
        match el.content {
            ElementContent::Shape(ref s) => {
                assert_eq!(s.shape_type.as_deref(), Some("RECTANGLE"));
                assert!(!s.has_text());
            }
            ref other => panic!("expected shape content, got {:?}", other),
        }
    }

    #[test]
    fn test_path_data_becomes_path_content() {
        let el: PageElement =
            serde_json::from_str(&base_json(r#", "shape": {"pathData": ["M 0 0", "L 10 10"]}"#))
                .unwrap();
        match el.content {
            ElementContent::Path(ref p) => assert_eq!(p.joined(), "M 0 0 L 10 10"),
            ref other => panic!("expected path content, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_and_image_conflict_rejected() {
        let json = base_json(
            r#", "shape": {"shapeType": "RECTANGLE"},
                "image": {"contentUrl": "media/a.png"}"#,
        );
        let result: std::result::Result<PageElement, _> = serde_json::from_str(&json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("shape and image"), "got: {}", err);
    }

    #[test]
    fn test_text_and_path_conflict_rejected() {
        let json = base_json(
            r#", "shape": {
                "text": {"paragraphs": [{"textSpans": [{"textRun": {"content": "x"}}]}]},
                "pathData": ["M 0 0"]
            }"#,
        );
        let result: std::result::Result<PageElement, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_keeps_wire_shape() {
        let el: PageElement =
            serde_json::from_str(&base_json(r#", "shape": {"pathData": ["M 0 0 Z"]}"#)).unwrap();
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("pathData"));
        let back: PageElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back.content, el.content);
    }

    #[test]
    fn test_fill_helpers() {
        let fill = Fill::solid("rgb(255, 0, 0)");
        assert!(fill.is_solid());
        assert_eq!(fill.solid_color(), Some("rgb(255, 0, 0)"));

        let gradient = Fill {
            fill_type: "GRADIENT_FILL".to_string(),
            solid_fill: Some("rgb(0, 0, 0)".to_string()),
        };
        assert_eq!(gradient.solid_color(), None);
    }
}
