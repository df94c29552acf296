use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Placeholder shown for an item whose product name is missing.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Placeholder shown instead of an image that cannot be resolved.
pub const NO_IMAGE: &str = "No image available";

/// Alt text used when an image exists but the product has no name.
pub const DEFAULT_IMAGE_ALT: &str = "Product Image";

/// One product line of an order, dereferenced from the referenced product document.
///
/// Both fields are optional on the wire: the reference may point at a deleted product, or
/// the product may have no uploaded image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            image_url: Some(image_url.into()),
        }
    }

    /// Product name, or [`UNKNOWN_PRODUCT`] when absent or blank.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_PRODUCT,
        }
    }

    /// Image reference with an explicit fallback instead of a broken URL.
    pub fn image(&self) -> ItemImage {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => ItemImage::Url {
                src: url.to_string(),
                alt: match self.name.as_deref() {
                    Some(name) if !name.trim().is_empty() => name.to_string(),
                    _ => DEFAULT_IMAGE_ALT.to_string(),
                },
            },
            _ => ItemImage::Unavailable,
        }
    }
}

/// Resolved image of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemImage {
    Url { src: String, alt: String },
    Unavailable,
}

impl Display for ItemImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemImage::Url { src, .. } => f.write_str(src),
            ItemImage::Unavailable => f.write_str(NO_IMAGE),
        }
    }
}
