//! Helpers for serving and rendering Visionary images.

use crate::constants::MAX_BLURHASH_COMPONENTS;
use crate::error::VisionaryError;
use crate::options::token::ImageFormat;
use crate::types::ContentType;

/// Blurhash components along the longer image side.
const LONG_SIDE_COMPONENTS: u32 = 4;

/// Map a format token to its HTTP content type and file extension.
///
/// Accepts the bare (`webp`) and selector (`f_webp`) forms. `auto` has no
/// fixed content type and is rejected like any unknown token.
///
/// # Examples
///
/// ```
/// use visionary::format_to_content_type;
///
/// let jpeg = format_to_content_type("jpeg")?;
/// assert_eq!(jpeg.content_type, "image/jpeg");
/// assert_eq!(jpeg.extension, "jpg");
///
/// assert!(format_to_content_type("haha").is_err());
/// # Ok::<(), visionary::VisionaryError>(())
/// ```
pub fn format_to_content_type(format: &str) -> Result<ContentType, VisionaryError> {
    ImageFormat::from_selector(format)
        .and_then(ImageFormat::content_type)
        .ok_or_else(|| VisionaryError::UnknownFormat(format.to_string()))
}

/// Suggest blurhash component counts for an image.
///
/// The longer side gets four components and the shorter side is scaled by the
/// aspect ratio. Both counts stay within `1..=9`.
///
/// # Examples
///
/// ```
/// use visionary::suggested_blurhash_components;
///
/// assert_eq!(suggested_blurhash_components(1600, 1200), (4, 3));
/// assert_eq!(suggested_blurhash_components(1080, 1920), (2, 4));
/// ```
pub fn suggested_blurhash_components(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }

    let clamp = |count: f64| (count.round() as u32).clamp(1, MAX_BLURHASH_COMPONENTS);
    let ratio = width as f64 / height as f64;

    if ratio >= 1.0 {
        (LONG_SIDE_COMPONENTS, clamp(LONG_SIDE_COMPONENTS as f64 / ratio))
    } else {
        (clamp(LONG_SIDE_COMPONENTS as f64 * ratio), LONG_SIDE_COMPONENTS)
    }
}
