//! Viewer session state.
//!
//! The current-document / current-slide / error triple is an explicit state
//! object passed through action handlers, not ambient globals. Each action
//! is scoped to itself: a failed submission reports its error and leaves
//! any previously loaded document in place.

use crate::error::Result;
use crate::model::{Deck, SlideDocument};

/// State for one viewer session.
#[derive(Debug, Default)]
pub struct ViewerSession {
    deck: Option<Deck>,
    current: usize,
    error: Option<String>,
    loading: bool,
}

impl ViewerSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a pasted slide JSON document.
    ///
    /// On success the session holds a single-slide deck. On failure the
    /// error is recorded and the previously loaded deck, if any, stays
    /// current.
    pub fn submit_json(&mut self, json: &str) {
        match SlideDocument::from_json(json) {
            Ok(doc) => {
                let mut deck = Deck::new();
                deck.add_slide(doc);
                self.deck = Some(deck);
                self.current = 0;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Load a presentation from raw package bytes.
    ///
    /// On failure the error is recorded, the loading flag is cleared, and
    /// no partial deck is retained.
    #[cfg(feature = "pptx")]
    pub fn load_presentation(&mut self, data: Vec<u8>) {
        use crate::pptx::PptxParser;

        self.loading = true;
        self.error = None;

        let result = PptxParser::from_bytes(data).and_then(|parser| parser.parse());
        match result {
            Ok(deck) => {
                self.deck = Some(deck);
                self.current = 0;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// The loaded deck, if any.
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// The current slide, if a deck is loaded.
    pub fn current_slide(&self) -> Option<&SlideDocument> {
        self.deck.as_ref().and_then(|d| d.slide(self.current))
    }

    /// Zero-based index of the current slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The last action's error, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a load is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Move to the next slide, clamped to the deck length.
    pub fn next_slide(&mut self) {
        if let Some(deck) = &self.deck {
            if self.current + 1 < deck.slide_count() {
                self.current += 1;
            }
        }
    }

    /// Move to the previous slide, clamped to zero.
    pub fn prev_slide(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Pretty JSON of the current slide, for the clipboard collaborator.
    pub fn slide_json(&self) -> Option<Result<String>> {
        self.current_slide().map(|slide| slide.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"pageElements": []}"#;

    #[test]
    fn test_submit_valid_json() {
        let mut session = ViewerSession::new();
        session.submit_json(VALID);

        assert!(session.error().is_none());
        assert!(session.current_slide().is_some());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_malformed_json_sets_error_without_document() {
        let mut session = ViewerSession::new();
        session.submit_json(r#"{"pageElements": [],}"#);

        assert!(session.error().is_some());
        assert!(session.current_slide().is_none());
    }

    #[test]
    fn test_failed_submission_keeps_prior_document() {
        let mut session = ViewerSession::new();
        session.submit_json(VALID);
        assert!(session.current_slide().is_some());

        session.submit_json("not json");
        assert!(session.error().is_some());
        // The previously rendered document stays current.
        assert!(session.current_slide().is_some());
    }

    #[test]
    fn test_successful_submission_clears_error() {
        let mut session = ViewerSession::new();
        session.submit_json("not json");
        assert!(session.error().is_some());

        session.submit_json(VALID);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = ViewerSession::new();
        session.prev_slide();
        assert_eq!(session.current_index(), 0);

        session.submit_json(VALID);
        session.next_slide();
        // Single slide: next is clamped.
        assert_eq!(session.current_index(), 0);
        session.prev_slide();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_slide_json_roundtrip() {
        let mut session = ViewerSession::new();
        assert!(session.slide_json().is_none());

        session.submit_json(VALID);
        let json = session.slide_json().unwrap().unwrap();
        assert!(json.contains("pageElements"));
    }

    #[cfg(feature = "pptx")]
    #[test]
    fn test_failed_load_retains_no_partial_deck() {
        let mut session = ViewerSession::new();
        session.load_presentation(b"not a package".to_vec());

        assert!(session.error().is_some());
        assert!(!session.is_loading());
        assert!(session.deck().is_none());
    }
}
