//! JSON renderer implementation.

use crate::error::Result;
use crate::model::{Deck, SlideDocument};

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a slide document to JSON.
pub fn to_json(doc: &SlideDocument, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Compact => doc.to_json_compact(),
        JsonFormat::Pretty => doc.to_json(),
    }
}

/// Convert a whole deck to JSON.
pub fn deck_to_json(deck: &Deck, format: JsonFormat) -> Result<String> {
    deck.to_json(format == JsonFormat::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageElement, Position, Size};

    fn sample_document() -> SlideDocument {
        let mut doc = SlideDocument::new();
        doc.page_elements.push(PageElement::empty(
            "r1",
            Size::px(100.0, 50.0),
            Position::px(10.0, 20.0),
            0,
        ));
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"pageElements\""));
        assert!(json.contains("\"name\": \"r1\""));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"name\":\"r1\""));
    }

    #[test]
    fn test_deck_roundtrip() {
        let mut deck = Deck::new();
        deck.add_slide(sample_document());

        let json = deck_to_json(&deck, JsonFormat::Pretty).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slide_count(), 1);
        assert_eq!(back.slides[0].page_elements[0].name, "r1");
    }
}
