//! Rendering options configuration.

/// Options for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit a complete HTML page instead of a bare slide fragment
    pub standalone: bool,

    /// Prefix for package-relative image URLs (e.g. "assets/")
    pub asset_prefix: String,

    /// Apply NFC normalization to run text
    pub normalize_text: bool,

    /// Document title for standalone pages
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            asset_prefix: String::new(),
            normalize_text: false,
            title: "Slide".to_string(),
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a complete HTML page.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the prefix for package-relative image URLs.
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// Apply NFC normalization to run text.
    pub fn with_normalize_text(mut self, normalize: bool) -> Self {
        self.normalize_text = normalize;
        self
    }

    /// Set the standalone page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
