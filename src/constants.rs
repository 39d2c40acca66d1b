//! Shared constants for codes and URLs.

use crate::options::token::{ImageFormat, ImageSize};
use crate::types::ImageOptions;

/// Default CDN origin. Override it with [`UrlOptions::endpoint`](crate::UrlOptions).
pub const CDN_ENDPOINT: &str = "https://cdn.visionary.cloud";

/// Character separating code fields.
///
/// It must stay outside the base83 alphabet used by blurhash strings.
pub const V_CODE_SEPARATOR: char = '!';

/// First path segment of every Visionary URL.
pub const IMAGE_PATH_SEGMENT: &str = "image";

/// Filename used when none is given.
pub const DEFAULT_FILENAME: &str = "image.jpg";

/// Options the CDN applies when a URL has no options segment.
pub const DEFAULT_OPTIONS: ImageOptions = ImageOptions {
    size: Some(ImageSize::Lg),
    format: Some(ImageFormat::Auto),
    debug: Some(false),
    download: None,
};

/// Largest number of blurhash components along one axis.
pub const MAX_BLURHASH_COMPONENTS: u32 = 9;
