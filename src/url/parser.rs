//! Visionary URL parsing.
//!
//! [`extract_url_parts`] is strict and returns typed errors. [`parse_url`] and
//! [`parse_visionary_string`] never fail: they report the error to a
//! [`DiagnosticSink`] and return `None`.

use url::Url;

use crate::constants::IMAGE_PATH_SEGMENT;
use crate::core::decoder::parse_code_with;
use crate::error::VisionaryError;
use crate::options::codec::parse_option_tokens;
use crate::options::token::tokenize_options_string;
use crate::report::{DiagnosticSink, LogSink};
use crate::types::{CodeSchema, ImageOptions, VisionaryImage, VisionaryUrlParts};
use crate::url::utils::{compact_segments, is_base64url_formatted};

/// Extract the code and option tokens from a Visionary URL.
///
/// The path must be `/image/<code>/<filename>` or
/// `/image/<code>/<options>/<filename>`; empty segments are ignored. The
/// filename is not inspected.
///
/// # Examples
///
/// ```
/// use visionary::extract_url_parts;
///
/// let parts = extract_url_parts("https://cdn.visionary.cloud/image/dmI4N3MxITE2MDAhMTIwMA/sm,debug/a.jpg")?;
/// assert_eq!(parts.code, "dmI4N3MxITE2MDAhMTIwMA");
/// assert_eq!(parts.option_tokens, vec!["sm", "debug"]);
///
/// assert!(extract_url_parts("https://cdn.visionary.cloud/video/abc/a.mp4").is_err());
/// # Ok::<(), visionary::VisionaryError>(())
/// ```
pub fn extract_url_parts(input_url: &str) -> Result<VisionaryUrlParts, VisionaryError> {
    let url = Url::parse(input_url)?;
    let path_parts = compact_segments(url.path());

    if path_parts.first() != Some(&IMAGE_PATH_SEGMENT) || !matches!(path_parts.len(), 3 | 4) {
        return Err(VisionaryError::UnrecognizedUrl(input_url.to_string()));
    }

    let code = path_parts[1].trim();
    if code.is_empty() || !is_base64url_formatted(code) {
        return Err(VisionaryError::UnrecognizedUrl(format!(
            "URL is not formatted as base64url: {input_url}"
        )));
    }

    // Options are only present when there is a segment between code and filename
    let option_tokens = if path_parts.len() == 4 {
        tokenize_options_string(path_parts[2])
    } else {
        Vec::new()
    };

    Ok(VisionaryUrlParts {
        code: code.to_string(),
        option_tokens,
    })
}

/// Parse a Visionary URL whose code uses the given schema, reporting failures
/// to `sink`.
///
/// There is no fallback between schemas: a legacy code carrying alt text fails
/// to decode as extended, and the other way round.
///
/// # Examples
///
/// ```
/// use visionary::{parse_url_with_schema, CodeSchema, NoopSink};
///
/// let url = "https://cdn.visionary.cloud/image/ams5MyExMDAhMTAwIWJlM2UzZiFibHVyaGFzaHZhbGxsdWUhSGFwcHkgY293IG9uIGEgZmFybQ/image.jpg";
/// let image = parse_url_with_schema(url, CodeSchema::Legacy, NoopSink).unwrap();
/// assert_eq!(image.fields.alt_text(), Some("Happy cow on a farm"));
///
/// assert!(parse_url_with_schema(url, CodeSchema::Extended, NoopSink).is_none());
/// ```
pub fn parse_url_with_schema<S: DiagnosticSink>(
    url: &str,
    schema: CodeSchema,
    sink: S,
) -> Option<VisionaryImage> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let parts = match extract_url_parts(url) {
        Ok(parts) => parts,
        Err(err) => {
            sink.report("Error parsing URL", &err);
            return None;
        }
    };

    let fields = parse_code_with(&parts.code, schema, &sink)?;
    let options = parse_option_tokens(&parts.option_tokens);

    Some(VisionaryImage { fields, options })
}

/// Parse a Visionary URL, reporting failures to `sink`.
pub fn parse_url_with<S: DiagnosticSink>(url: &str, sink: S) -> Option<VisionaryImage> {
    parse_url_with_schema(url, CodeSchema::Extended, sink)
}

/// Parse a Visionary URL into image fields and display options.
///
/// Returns `None` for empty input, URLs that don't have the Visionary shape
/// and URLs whose code does not decode. Failures are logged through the `log`
/// crate.
///
/// # Examples
///
/// ```
/// use visionary::{parse_url, ImageSize};
///
/// let url = "https://cdn.visionary.cloud/image/dmI4N3MxITE2MDAhMTIwMCExMTAwNDQhTENESllOOUZ4R19NX04lTCVNJU00b35wdFJJQQ/4k/strawberries.jpg";
/// let image = parse_url(url).unwrap();
/// assert_eq!(image.fields.file_id, "vb87s1");
/// assert_eq!(image.options.size, Some(ImageSize::FourK));
/// assert_eq!(image.options.len(), 1);
///
/// assert!(parse_url("").is_none());
/// ```
pub fn parse_url(url: &str) -> Option<VisionaryImage> {
    parse_url_with(url, LogSink)
}

/// Parse either a bare code or a full URL whose code uses the given schema,
/// reporting failures to `sink`.
pub fn parse_visionary_string_with_schema<S: DiagnosticSink>(
    input: &str,
    schema: CodeSchema,
    sink: S,
) -> Option<VisionaryImage> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if is_base64url_formatted(input) {
        let fields = parse_code_with(input, schema, &sink)?;
        return Some(VisionaryImage {
            fields,
            options: ImageOptions::default(),
        });
    }

    parse_url_with_schema(input, schema, sink)
}

/// Parse either a bare code or a full URL, reporting failures to `sink`.
pub fn parse_visionary_string_with<S: DiagnosticSink>(
    input: &str,
    sink: S,
) -> Option<VisionaryImage> {
    parse_visionary_string_with_schema(input, CodeSchema::Extended, sink)
}

/// Parse either a bare code or a full Visionary URL.
///
/// A bare code carries no options, so the result has empty options.
///
/// # Examples
///
/// ```
/// use visionary::parse_visionary_string;
///
/// let from_code = parse_visionary_string("dmI4N3MxITE2MDAhMTIwMA").unwrap();
/// let from_url = parse_visionary_string("https://cdn.visionary.cloud/image/dmI4N3MxITE2MDAhMTIwMA/image.jpg").unwrap();
/// assert_eq!(from_code, from_url);
/// ```
pub fn parse_visionary_string(input: &str) -> Option<VisionaryImage> {
    parse_visionary_string_with(input, LogSink)
}
