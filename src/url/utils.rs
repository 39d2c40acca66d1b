//! Small URL and code helpers shared by the builder and parser.

use url::Url;

use crate::constants::CDN_ENDPOINT;
use crate::error::VisionaryError;

/// Check that a string uses only the base64url alphabet (`A-Z a-z 0-9 - _`).
///
/// The empty string passes. Padding (`=`) and the standard base64 characters
/// `+` and `/` do not.
///
/// # Examples
///
/// ```
/// use visionary::is_base64url_formatted;
///
/// assert!(is_base64url_formatted("dmlzaW9uYXJ5"));
/// assert!(!is_base64url_formatted("YmFzZQ=="));
/// assert!(!is_base64url_formatted("invalid!"));
/// ```
pub fn is_base64url_formatted(input: &str) -> bool {
    input
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Split a URL path on `/` and drop empty segments.
///
/// # Examples
///
/// ```
/// use visionary::compact_segments;
///
/// assert_eq!(compact_segments("//image/xyzzz//image.jpg"), vec!["image", "xyzzz", "image.jpg"]);
/// ```
pub fn compact_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Resolve the origin URLs are built on.
///
/// Only the scheme, host and port of `endpoint` are kept. Without an endpoint
/// the Visionary CDN is used.
///
/// # Returns
///
/// Returns a URL with an empty path, or `InvalidEndpoint` when the endpoint is
/// not an absolute URL with a tuple origin.
pub fn resolve_origin(endpoint: Option<&str>) -> Result<Url, VisionaryError> {
    let endpoint = endpoint.unwrap_or(CDN_ENDPOINT);
    let invalid = || VisionaryError::InvalidEndpoint(endpoint.to_string());

    let parsed = Url::parse(endpoint).map_err(|_| invalid())?;
    let origin = parsed.origin();
    if !origin.is_tuple() {
        return Err(invalid());
    }

    Url::parse(&origin.ascii_serialization()).map_err(|_| invalid())
}
