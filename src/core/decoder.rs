//! Visionary code decoding.
//!
//! [`decode_code`] returns typed errors. The `parse_*` functions are the
//! soft-fail entry points: they return `None` and report the error to a
//! [`DiagnosticSink`].

use crate::constants::V_CODE_SEPARATOR;
use crate::core::encoder::REQUIRED_SLOTS;
use crate::core::packer::unpack_slots;
use crate::error::VisionaryError;
use crate::report::{DiagnosticSink, LogSink};
use crate::types::{CodeSchema, ImageFields};

/// Parse a width, height or blurhash dimension: trimmed decimal, non-zero.
fn parse_dimension(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

fn slot(slots: &[String], index: usize) -> Option<&str> {
    slots.get(index).map(String::as_str)
}

/// Read the blurhash component dimensions from slots 5 and 6.
///
/// Missing or empty slots mean "not set". When a blurhash is present, a
/// dimension that is set must be at least 1, and both must be set together.
fn parse_blurhash_components(
    slots: &[String],
    blurhash: &str,
) -> Result<(Option<u32>, Option<u32>), VisionaryError> {
    if blurhash.is_empty() {
        return Ok((None, None));
    }

    let read = |index: usize| -> Result<Option<u32>, VisionaryError> {
        match slot(slots, index).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_dimension(raw)
                .map(Some)
                .ok_or(VisionaryError::InvalidBlurhashDimensions),
        }
    };

    match (read(5)?, read(6)?) {
        (Some(x), Some(y)) => Ok((Some(x), Some(y))),
        (None, None) => Ok((None, None)),
        _ => Err(VisionaryError::InvalidBlurhashDimensions),
    }
}

/// Decode a code using the given schema.
///
/// # Arguments
///
/// * `code` - The base64url code; surrounding whitespace is ignored
/// * `schema` - Which positional layout the code uses
///
/// # Returns
///
/// Returns the decoded fields or the first validation error.
///
/// # Examples
///
/// ```
/// use visionary::{decode_code, CodeSchema, VisionaryError};
///
/// let fields = decode_code("dmI4N3MxITE2MDAhMTIwMA", CodeSchema::Extended)?;
/// assert_eq!(fields.file_id, "vb87s1");
/// assert_eq!(fields.source_width, 1600);
///
/// assert!(decode_code("dmI4N3MxITAhMTIwMA", CodeSchema::Extended).is_err());
/// # Ok::<(), VisionaryError>(())
/// ```
pub fn decode_code(code: &str, schema: CodeSchema) -> Result<ImageFields, VisionaryError> {
    let slots = unpack_slots(code)?;

    // Codes must contain at a minimum: fileId, width, height
    if slots.len() < REQUIRED_SLOTS {
        return Err(VisionaryError::TooFewFields(slots.len()));
    }

    let file_id = slots[0].trim();
    if file_id.is_empty() {
        return Err(VisionaryError::EmptyFileId);
    }

    let (source_width, source_height) = match (parse_dimension(&slots[1]), parse_dimension(&slots[2])) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            return Err(VisionaryError::InvalidDimensions {
                width: slots[1].clone(),
                height: slots[2].clone(),
            })
        }
    };

    let bcc = slot(&slots, 3).unwrap_or_default().to_string();
    let blurhash = slot(&slots, 4).unwrap_or_default().to_string();

    let (blurhash_x, blurhash_y) = match schema {
        CodeSchema::Legacy => (None, None),
        CodeSchema::Extended => parse_blurhash_components(&slots, &blurhash)?,
    };

    // Alt text is the last field and may itself contain the separator.
    let alt_text = slots
        .get(schema.alt_text_index()..)
        .map(|rest| rest.join(V_CODE_SEPARATOR.to_string().as_str()))
        .filter(|alt| !alt.is_empty());

    Ok(ImageFields {
        file_id: file_id.to_string(),
        source_width,
        source_height,
        bcc,
        blurhash,
        blurhash_x,
        blurhash_y,
        alt_text,
    })
}

/// Decode a code, reporting failures to `sink` instead of returning them.
pub fn parse_code_with<S: DiagnosticSink>(
    code: &str,
    schema: CodeSchema,
    sink: S,
) -> Option<ImageFields> {
    match decode_code(code, schema) {
        Ok(fields) => Some(fields),
        Err(err) => {
            sink.report("Cannot parse code", &err);
            None
        }
    }
}

/// Parse an extended visionary code, returning `None` when it is invalid.
///
/// Failures are logged through the `log` crate.
///
/// # Examples
///
/// ```
/// use visionary::parse_code;
///
/// let fields = parse_code("ams5MiExMDAhMTAwIWJlM2UzZiFibHVyaGFzaHZhbGxsdWU").unwrap();
/// assert_eq!(fields.file_id, "jk92");
/// assert_eq!(fields.bcc, "be3e3f");
///
/// assert!(parse_code("").is_none());
/// assert!(parse_code("not base64url!").is_none());
/// ```
pub fn parse_code(code: &str) -> Option<ImageFields> {
    parse_code_with(code, CodeSchema::Extended, LogSink)
}

/// Parse a legacy visionary code, returning `None` when it is invalid.
pub fn parse_legacy_code(code: &str) -> Option<ImageFields> {
    parse_code_with(code, CodeSchema::Legacy, LogSink)
}
