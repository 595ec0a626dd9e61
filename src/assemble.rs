//! Slide assembly.
//!
//! Orders elements by z-order, resolves the background, and composes the
//! mapped primitives into one slide representation. Later primitives layer
//! above earlier ones (painter's algorithm).

use crate::color::normalize_color;
use crate::mapper::{map_element, Primitive, RenderWarning};
use crate::model::SlideDocument;

/// Default background when the page carries no solid fill.
pub const DEFAULT_BACKGROUND: &str = "white";

/// An assembled slide, ready for a renderer.
#[derive(Debug, Clone)]
pub struct RenderedSlide {
    /// Normalized background color
    pub background: String,

    /// Primitives in paint order
    pub primitives: Vec<Primitive>,

    /// Non-fatal warnings collected across all elements
    pub warnings: Vec<RenderWarning>,
}

impl RenderedSlide {
    /// Whether the slide has any primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Assemble a document into a rendered slide.
///
/// Elements are mapped in stable ascending `order`; a malformed property
/// on one element degrades to a warning without blanking the slide.
pub fn assemble_slide(doc: &SlideDocument) -> RenderedSlide {
    let background = resolve_background(doc);

    let mut primitives = Vec::with_capacity(doc.page_elements.len());
    let mut warnings = Vec::new();

    for element in doc.sorted_elements() {
        let (primitive, element_warnings) = map_element(element);
        primitives.push(primitive);
        warnings.extend(element_warnings);
    }

    RenderedSlide {
        background,
        primitives,
        warnings,
    }
}

fn resolve_background(doc: &SlideDocument) -> String {
    let Some(color) = doc.background_fill().and_then(|f| f.solid_color()) else {
        return DEFAULT_BACKGROUND.to_string();
    };

    match normalize_color(color) {
        Ok(normalized) => normalized.into_owned(),
        Err(e) => {
            log::warn!("page background: {}, using default", e);
            DEFAULT_BACKGROUND.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::WarningKind;
    use crate::model::{Fill, PageElement, PageProperties, Position, Size};

    fn doc_with_background(fill: Option<Fill>) -> SlideDocument {
        SlideDocument {
            page_elements: Vec::new(),
            page_properties: PageProperties {
                page_background_fill: fill,
            },
        }
    }

    #[test]
    fn test_background_normalized() {
        let doc = doc_with_background(Some(Fill::solid("rgb(255, 255, 255)")));
        assert_eq!(assemble_slide(&doc).background, "#ffffff");
    }

    #[test]
    fn test_background_defaults_to_white() {
        assert_eq!(
            assemble_slide(&doc_with_background(None)).background,
            DEFAULT_BACKGROUND
        );

        // Non-solid fill also falls back.
        let gradient = Fill {
            fill_type: "GRADIENT_FILL".to_string(),
            solid_fill: Some("rgb(1, 2, 3)".to_string()),
        };
        assert_eq!(
            assemble_slide(&doc_with_background(Some(gradient))).background,
            DEFAULT_BACKGROUND
        );
    }

    #[test]
    fn test_invalid_background_color_falls_back() {
        let doc = doc_with_background(Some(Fill::solid("rgb(999, 0, 0)")));
        assert_eq!(assemble_slide(&doc).background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_paint_order_follows_z_order() {
        let mut doc = SlideDocument::new();
        for (name, order, x) in [("top", 5, 1.0), ("bottom", 1, 2.0), ("middle", 3, 3.0)] {
            doc.page_elements.push(PageElement::empty(
                name,
                Size::px(10.0, 10.0),
                Position::px(x, 0.0),
                order,
            ));
        }

        let slide = assemble_slide(&doc);
        let xs: Vec<f64> = slide.primitives.iter().map(|p| p.frame().x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_equal_orders_keep_input_order() {
        let mut doc = SlideDocument::new();
        for (name, x) in [("first", 1.0), ("second", 2.0)] {
            doc.page_elements.push(PageElement::empty(
                name,
                Size::px(10.0, 10.0),
                Position::px(x, 0.0),
                5,
            ));
        }

        let slide = assemble_slide(&doc);
        let xs: Vec<f64> = slide.primitives.iter().map(|p| p.frame().x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_document_renders_background_only() {
        let doc = SlideDocument::from_json(r#"{"pageElements": []}"#).unwrap();
        let slide = assemble_slide(&doc);
        assert!(slide.is_empty());
        assert_eq!(slide.background, DEFAULT_BACKGROUND);
        assert!(slide.warnings.is_empty());
    }

    #[test]
    fn test_warnings_aggregated_across_elements() {
        let mut doc = SlideDocument::new();
        doc.page_elements.push(
            PageElement::empty("bad1", Size::px(1.0, 1.0), Position::px(0.0, 0.0), 0)
                .with_fill(Fill::solid("rgb(300, 0, 0)")),
        );
        doc.page_elements.push(
            PageElement::empty("bad2", Size::px(1.0, 1.0), Position::px(0.0, 0.0), 1)
                .with_fill(Fill::solid("rgb(0, 300, 0)")),
        );

        let slide = assemble_slide(&doc);
        assert_eq!(slide.primitives.len(), 2);
        assert_eq!(slide.warnings.len(), 2);
        assert!(matches!(
            slide.warnings[0].kind,
            WarningKind::UnsupportedColorFormat
        ));
    }
}
