//! Text body, paragraph, and run models.

use serde::{Deserialize, Serialize};

use super::geometry::Measure;

/// Horizontal paragraph alignment.
///
/// Parsed case-insensitively from the wire form (`LEFT`, `center`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` keyword for this alignment.
    pub fn css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl std::str::FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Alignment::Left)
        } else if s.eq_ignore_ascii_case("center") {
            Ok(Alignment::Center)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Alignment::Right)
        } else {
            Err(format!("unknown alignment `{}`", s))
        }
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Uniform text-body insets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProperties {
    /// Top inset
    #[serde(default)]
    pub padding_top: Measure,

    /// Right inset
    #[serde(default)]
    pub padding_right: Measure,

    /// Bottom inset
    #[serde(default)]
    pub padding_bottom: Measure,

    /// Left inset
    #[serde(default)]
    pub padding_left: Measure,
}

/// Underline descriptor. A `form` of `none` suppresses the underline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Underline {
    /// Underline form tag (`sng`, `dbl`, `none`, ...)
    pub form: String,

    /// Underline color in `rgb(r, g, b)` textual form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Underline {
    /// Whether this descriptor draws anything.
    pub fn is_visible(&self) -> bool {
        !self.form.eq_ignore_ascii_case("none")
    }
}

/// Character-level text style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Foreground color in `rgb(r, g, b)` textual form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,

    /// Font family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Measure>,

    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Underline descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
}

/// A styled, contiguous run of literal text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub content: String,

    /// Character styling
    #[serde(default)]
    pub style: TextStyle,
}

impl TextRun {
    /// Create a plain run with no styling.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
        }
    }
}

/// One span within a paragraph.
///
/// A span without a run renders nothing (a line-break marker, for example)
/// and must not disturb sibling spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    /// The run, if this span carries text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

impl TextSpan {
    /// Create a span wrapping a run.
    pub fn run(run: TextRun) -> Self {
        Self {
            text_run: Some(run),
        }
    }

    /// Create a marker span with no run.
    pub fn marker() -> Self {
        Self::default()
    }
}

/// Paragraph-level properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphProperties {
    /// Horizontal alignment
    #[serde(default)]
    pub alignment: Alignment,

    /// Space before the paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<Measure>,

    /// Space after the paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<Measure>,
}

/// An ordered run of spans with shared paragraph properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Spans in document order
    #[serde(default)]
    pub text_spans: Vec<TextSpan>,

    /// Paragraph properties
    #[serde(default)]
    pub paragraph_property: ParagraphProperties,
}

impl Paragraph {
    /// Create a single-run paragraph.
    pub fn with_text(content: impl Into<String>) -> Self {
        Self {
            text_spans: vec![TextSpan::run(TextRun::plain(content))],
            ..Default::default()
        }
    }

    /// Concatenated text of all spans that carry runs.
    pub fn plain_text(&self) -> String {
        self.text_spans
            .iter()
            .filter_map(|s| s.text_run.as_ref())
            .map(|r| r.content.as_str())
            .collect()
    }
}

/// A shape's text body: insets plus ordered paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBody {
    /// Body insets, applied uniformly to every paragraph
    #[serde(default)]
    pub body_property: BodyProperties,

    /// Paragraphs in document order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Whether the body contains any visible text.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.plain_text().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_case_insensitive() {
        let a: Alignment = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(a, Alignment::Center);
        let a: Alignment = serde_json::from_str("\"RIGHT\"").unwrap();
        assert_eq!(a, Alignment::Right);
        let a: Alignment = serde_json::from_str("\"Left\"").unwrap();
        assert_eq!(a, Alignment::Left);
    }

    #[test]
    fn test_alignment_unknown_rejected() {
        let result: std::result::Result<Alignment, _> = serde_json::from_str("\"diagonal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_underline_visibility() {
        let u = Underline {
            form: "sng".to_string(),
            color: Some("rgb(0, 0, 0)".to_string()),
        };
        assert!(u.is_visible());

        let none = Underline {
            form: "NONE".to_string(),
            color: None,
        };
        assert!(!none.is_visible());
    }

    #[test]
    fn test_marker_span_has_no_text() {
        let para = Paragraph {
            text_spans: vec![
                TextSpan::run(TextRun::plain("a")),
                TextSpan::marker(),
                TextSpan::run(TextRun::plain("b")),
            ],
            ..Default::default()
        };
        assert_eq!(para.plain_text(), "ab");
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "bodyProperty": {
                "paddingTop": {"value": 4, "unit": "PX"},
                "paddingRight": {"value": 4, "unit": "PX"},
                "paddingBottom": {"value": 4, "unit": "PX"},
                "paddingLeft": {"value": 4, "unit": "PX"}
            },
            "paragraphs": [{
                "textSpans": [{"textRun": {"content": "hi", "style": {"bold": true}}}],
                "paragraphProperty": {"alignment": "CENTER"}
            }]
        }"#;
        let body: TextBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.body_property.padding_top.value, 4.0);
        assert_eq!(body.paragraphs.len(), 1);
        assert_eq!(
            body.paragraphs[0].paragraph_property.alignment,
            Alignment::Center
        );
        assert!(body.paragraphs[0].text_spans[0]
            .text_run
            .as_ref()
            .unwrap()
            .style
            .bold);
    }

    #[test]
    fn test_default_style_not_serialized() {
        let run = TextRun::plain("x");
        let json = serde_json::to_string(&run).unwrap();
        assert!(!json.contains("bold"));
        assert!(!json.contains("underline"));
    }
}
