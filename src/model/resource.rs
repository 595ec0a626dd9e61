//! Extracted media resource model.

use serde::{Deserialize, Serialize};

/// Type of extracted resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Image (PNG, JPEG, GIF, BMP, TIFF, WMF, EMF, SVG)
    Image,
    /// Other binary data
    Other,
}

impl ResourceType {
    /// Determine resource type from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "tiff" | "tif" | "wmf" | "emf" | "svg" => {
                ResourceType::Image
            }
            _ => ResourceType::Other,
        }
    }
}

/// A binary resource extracted from a presentation package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource type
    pub resource_type: ResourceType,

    /// Filename within the package (e.g. `image1.png`)
    pub filename: String,

    /// MIME type, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Binary data
    #[serde(skip)]
    pub data: Vec<u8>,

    /// Size in bytes
    pub size: usize,
}

impl Resource {
    /// Create a resource, deriving type and MIME from the filename.
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let filename = filename.into();
        let ext = filename.rsplit('.').next().unwrap_or("");
        let resource_type = ResourceType::from_extension(ext);
        let mime_type = Self::mime_from_extension(ext);
        let size = data.len();
        Self {
            resource_type,
            filename,
            mime_type,
            data,
            size,
        }
    }

    /// MIME type for a file extension.
    fn mime_from_extension(ext: &str) -> Option<String> {
        let mime = match ext.to_lowercase().as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "bmp" => "image/bmp",
            "tiff" | "tif" => "image/tiff",
            "svg" => "image/svg+xml",
            "wmf" => "image/x-wmf",
            "emf" => "image/x-emf",
            _ => return None,
        };
        Some(mime.to_string())
    }

    /// Save the resource to a file.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        std::fs::write(path, &self.data)
    }

    /// Whether this resource is an image.
    pub fn is_image(&self) -> bool {
        self.resource_type == ResourceType::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_from_extension() {
        assert_eq!(ResourceType::from_extension("png"), ResourceType::Image);
        assert_eq!(ResourceType::from_extension("JPG"), ResourceType::Image);
        assert_eq!(ResourceType::from_extension("bin"), ResourceType::Other);
    }

    #[test]
    fn test_resource_creation() {
        let data = vec![0x89, 0x50, 0x4E, 0x47];
        let resource = Resource::new("image1.png", data);

        assert!(resource.is_image());
        assert_eq!(resource.size, 4);
        assert_eq!(resource.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_unknown_extension() {
        let resource = Resource::new("blob.xyz", vec![0u8; 8]);
        assert!(!resource.is_image());
        assert!(resource.mime_type.is_none());
    }
}
