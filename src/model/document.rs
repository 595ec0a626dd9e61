//! Slide document and deck models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

use super::element::{Fill, PageElement};
use super::resource::Resource;

/// Page-level properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProperties {
    /// Background fill; absent means a white background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_background_fill: Option<Fill>,
}

/// One slide: an ordered sequence of page elements plus page properties.
///
/// The document is constructed once from parsed JSON (or from the PPTX
/// front-end) and is immutable for the duration of a render; a new
/// submission replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDocument {
    /// Page elements; rendering order is a stable ascending sort on `order`
    pub page_elements: Vec<PageElement>,

    /// Page properties
    #[serde(default)]
    pub page_properties: PageProperties,
}

impl SlideDocument {
    /// Create an empty document with a white background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from a JSON string.
    ///
    /// A document missing the top-level `pageElements` sequence is rejected
    /// with a descriptive [`Error::MalformedInput`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::MalformedInput(e.to_string()))
    }

    /// Elements in rendering order: stable sort on `order` ascending.
    ///
    /// Ties keep their input order, so later input elements layer above
    /// earlier ones with the same z-order.
    pub fn sorted_elements(&self) -> Vec<&PageElement> {
        let mut elements: Vec<&PageElement> = self.page_elements.iter().collect();
        elements.sort_by_key(|e| e.order);
        elements
    }

    /// The background fill, if one is set.
    pub fn background_fill(&self) -> Option<&Fill> {
        self.page_properties.page_background_fill.as_ref()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to compact JSON.
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A parsed presentation: slides in deck order plus extracted resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<SlideDocument>,

    /// Extracted media resources keyed by package-relative path
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub resources: HashMap<String, Resource>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by zero-based index.
    pub fn slide(&self, index: usize) -> Option<&SlideDocument> {
        self.slides.get(index)
    }

    /// Add a slide to the deck.
    pub fn add_slide(&mut self, slide: SlideDocument) {
        self.slides.push(slide);
    }

    /// Add a resource keyed by its package-relative path.
    pub fn add_resource(&mut self, path: impl Into<String>, resource: Resource) {
        self.resources.insert(path.into(), resource);
    }

    /// Get a resource by its package-relative path.
    pub fn get_resource(&self, path: &str) -> Option<&Resource> {
        self.resources.get(path)
    }

    /// Serialize to JSON, pretty or compact.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
