//! Visionary URL construction.

use crate::constants::{DEFAULT_FILENAME, IMAGE_PATH_SEGMENT};
use crate::core::encoder::generate_code;
use crate::error::VisionaryError;
use crate::options::codec::generate_options_string;
use crate::types::{ImageFields, UrlOptions};
use crate::url::utils::resolve_origin;

/// Validate a filename for the last path segment.
///
/// The URL serializer strips tab and newline characters and resolves `.` and
/// `..` segments, so control characters are rejected outright.
fn validate_filename(filename: &str) -> Result<&str, VisionaryError> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.chars().any(char::is_control)
        || filename == "."
        || filename == ".."
    {
        return Err(VisionaryError::InvalidFilename(filename.to_string()));
    }
    Ok(filename)
}

/// Generate a Visionary URL for an image.
///
/// The URL has the shape `<origin>/image/<code>/[<options>/]<filename>`. The
/// options segment is only written when some option produces a token, and the
/// filename defaults to `image.jpg`. Non-ASCII filenames are percent-encoded.
///
/// # Arguments
///
/// * `fields` - The image fields to encode
/// * `options` - Endpoint, filename and display options
///
/// # Returns
///
/// Returns the URL string, or an error when the fields cannot be encoded or
/// the endpoint or filename is invalid.
///
/// # Examples
///
/// ```
/// use visionary::{generate_url, ImageFields, ImageOptions, ImageSize, UrlOptions};
///
/// let fields = ImageFields::new("vb87s1", 1600, 1200)
///     .with_bcc("110044")
///     .with_blurhash("LCDJYN9FxG_M_N%L%M%M4o~ptRIA");
///
/// let url = generate_url(&fields, &UrlOptions::default())?;
/// assert_eq!(
///     url,
///     "https://cdn.visionary.cloud/image/dmI4N3MxITE2MDAhMTIwMCExMTAwNDQhTENESllOOUZ4R19NX04lTCVNJU00b35wdFJJQQ/image.jpg"
/// );
///
/// let options = UrlOptions::new()
///     .with_filename("strawberries.jpg")
///     .with_options(ImageOptions::default().with_size(ImageSize::FourK));
/// let url = generate_url(&fields, &options)?;
/// assert!(url.ends_with("/4k/strawberries.jpg"));
/// # Ok::<(), visionary::VisionaryError>(())
/// ```
pub fn generate_url(fields: &ImageFields, options: &UrlOptions) -> Result<String, VisionaryError> {
    let code = generate_code(fields)?;
    let mut url = resolve_origin(options.endpoint.as_deref())?;
    let filename = validate_filename(options.filename.as_deref().unwrap_or(DEFAULT_FILENAME))?;
    let options_segment = generate_options_string(&options.options);
    let origin = url.to_string();

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| VisionaryError::InvalidEndpoint(origin))?;
        segments.clear();
        segments.push(IMAGE_PATH_SEGMENT).push(&code);
        if let Some(options_segment) = &options_segment {
            segments.push(options_segment);
        }
        segments.push(filename);
    }

    Ok(url.to_string())
}
