//! Core data structures for visionary codes and URLs.

use serde::{Deserialize, Serialize};

use crate::options::token::{ImageFormat, ImageSize};

/// Image metadata carried by a visionary code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFields {
    /// Visionary file id or image URL
    pub file_id: String,
    /// Width of the original upload (also the max width)
    pub source_width: u32,
    /// Height of the original upload (also the max height)
    pub source_height: u32,
    /// Background color code, empty when unknown
    #[serde(default)]
    pub bcc: String,
    /// Blurhash string, empty when unknown
    #[serde(default)]
    pub blurhash: String,
    /// Blurhash x component count (extended codes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurhash_x: Option<u32>,
    /// Blurhash y component count (extended codes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurhash_y: Option<u32>,
    /// Alt text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl ImageFields {
    /// Create fields with only the required values set.
    pub fn new(file_id: impl Into<String>, source_width: u32, source_height: u32) -> Self {
        Self {
            file_id: file_id.into(),
            source_width,
            source_height,
            ..Self::default()
        }
    }

    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc = bcc.into();
        self
    }

    pub fn with_blurhash(mut self, blurhash: impl Into<String>) -> Self {
        self.blurhash = blurhash.into();
        self
    }

    pub fn with_blurhash_components(mut self, x: u32, y: u32) -> Self {
        self.blurhash_x = Some(x);
        self.blurhash_y = Some(y);
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Check if a blurhash is present.
    pub fn has_blurhash(&self) -> bool {
        !self.blurhash.is_empty()
    }

    /// Blurhash component dimensions, when both are set and usable.
    pub fn blurhash_components(&self) -> Option<(u32, u32)> {
        match (self.blurhash_x, self.blurhash_y) {
            (Some(x), Some(y)) if x >= 1 && y >= 1 => Some((x, y)),
            _ => None,
        }
    }

    /// Alt text, if present and non-empty.
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref().filter(|alt| !alt.is_empty())
    }
}

/// Positional layout of a visionary code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CodeSchema {
    /// `fileId!width!height!bcc!blurhash!altText`
    Legacy,
    /// `fileId!width!height!bcc!blurhash!blurhashX!blurhashY!altText`
    #[default]
    Extended,
}

impl CodeSchema {
    /// Slot index of the alt text, which is always last.
    pub fn alt_text_index(self) -> usize {
        match self {
            CodeSchema::Legacy => 5,
            CodeSchema::Extended => 7,
        }
    }
}

/// Display options carried in the options segment of a URL.
///
/// Every field is optional: an absent key is different from a key set to
/// `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,
}

impl ImageOptions {
    /// Number of keys that are set.
    pub fn len(&self) -> usize {
        [
            self.size.is_some(),
            self.format.is_some(),
            self.debug.is_some(),
            self.download.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn with_download(mut self, download: bool) -> Self {
        self.download = Some(download);
        self
    }
}

/// A decoded Visionary URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionaryImage {
    pub fields: ImageFields,
    pub options: ImageOptions,
}

/// The code and raw option tokens pulled out of a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionaryUrlParts {
    pub code: String,
    pub option_tokens: Vec<String>,
}

/// Configuration for building a Visionary URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOptions {
    /// Custom endpoint; only its origin is used. Defaults to the Visionary CDN.
    pub endpoint: Option<String>,
    /// Filename for the last path segment. Defaults to `image.jpg`.
    ///
    /// A descriptive filename improves discoverability by search engines.
    pub filename: Option<String>,
    /// Display options embedded as a path segment when any are set.
    pub options: ImageOptions,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_options(mut self, options: ImageOptions) -> Self {
        self.options = options;
        self
    }
}

/// HTTP content type and file extension for an image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType {
    pub content_type: &'static str,
    pub extension: &'static str,
}
