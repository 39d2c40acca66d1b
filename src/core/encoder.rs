//! Visionary code encoding.
//!
//! This module builds the positional slot list for an [`ImageFields`] value and
//! packs it into a code.

use crate::constants::V_CODE_SEPARATOR;
use crate::core::packer::pack_slots;
use crate::error::VisionaryError;
use crate::types::{CodeSchema, ImageFields};

/// Every code carries at least file id, width and height.
pub(crate) const REQUIRED_SLOTS: usize = 3;

/// Check the fields every code needs and the separator constraint on
/// non-final slots.
fn validate_fields(fields: &ImageFields) -> Result<(), VisionaryError> {
    let file_id = fields.file_id.trim();
    if file_id.is_empty() {
        return Err(VisionaryError::MissingRequiredField("fileId"));
    }
    // Decoding trims the file id, so surrounding whitespace would not survive.
    if file_id.len() != fields.file_id.len() {
        return Err(VisionaryError::MalformedInput(format!(
            "file id has surrounding whitespace: {:?}",
            fields.file_id
        )));
    }
    if fields.source_width == 0 {
        return Err(VisionaryError::MissingRequiredField("sourceWidth"));
    }
    if fields.source_height == 0 {
        return Err(VisionaryError::MissingRequiredField("sourceHeight"));
    }

    // Alt text is the final slot and is re-joined on decode, so it may
    // contain the separator.
    for (name, value) in [
        ("fileId", &fields.file_id),
        ("bcc", &fields.bcc),
        ("blurhash", &fields.blurhash),
    ] {
        if value.contains(V_CODE_SEPARATOR) {
            return Err(VisionaryError::ReservedSeparator(name));
        }
    }

    Ok(())
}

/// Blurhash component dimensions must be both set and positive, or both unset.
/// They are only checked when a blurhash is present, since they are not
/// written otherwise.
fn validate_blurhash_components(fields: &ImageFields) -> Result<(), VisionaryError> {
    if !fields.has_blurhash() {
        return Ok(());
    }

    match (fields.blurhash_x, fields.blurhash_y) {
        (None, None) => Ok(()),
        (Some(x), Some(y)) if x >= 1 && y >= 1 => Ok(()),
        _ => Err(VisionaryError::InvalidBlurhashDimensions),
    }
}

/// Build the extended slot list, truncating trailing empty slots.
fn extended_slots(fields: &ImageFields) -> Vec<String> {
    let (blurhash_x, blurhash_y) = match fields.blurhash_components() {
        Some((x, y)) if fields.has_blurhash() => (x.to_string(), y.to_string()),
        _ => (String::new(), String::new()),
    };

    // Note: This order must be maintained.
    let mut slots = vec![
        fields.file_id.clone(),
        fields.source_width.to_string(),
        fields.source_height.to_string(),
        fields.bcc.clone(),
        fields.blurhash.clone(),
        blurhash_x,
        blurhash_y,
        fields.alt_text().unwrap_or_default().to_string(),
    ];

    while slots.len() > REQUIRED_SLOTS && slots.last().is_some_and(|slot| slot.is_empty()) {
        slots.pop();
    }

    slots
}

/// Build the legacy slot list: bcc and blurhash slots are always present.
fn legacy_slots(fields: &ImageFields) -> Vec<String> {
    let mut slots = vec![
        fields.file_id.clone(),
        fields.source_width.to_string(),
        fields.source_height.to_string(),
        fields.bcc.clone(),
        fields.blurhash.clone(),
    ];

    if let Some(alt_text) = fields.alt_text() {
        slots.push(alt_text.to_string());
    }

    slots
}

/// Encode fields into a code using the given schema.
pub fn encode_code(fields: &ImageFields, schema: CodeSchema) -> Result<String, VisionaryError> {
    validate_fields(fields)?;

    let slots = match schema {
        CodeSchema::Legacy => legacy_slots(fields),
        CodeSchema::Extended => {
            validate_blurhash_components(fields)?;
            extended_slots(fields)
        }
    };

    Ok(pack_slots(&slots))
}

/// Generate a visionary code in the extended layout.
///
/// Blurhash component dimensions are written only when a blurhash is present
/// and both dimensions are set. Absent trailing fields are left out.
///
/// # Arguments
///
/// * `fields` - The image fields; file id, width and height are required
///
/// # Returns
///
/// Returns the code, or `MissingRequiredField`, `MalformedInput`,
/// `ReservedSeparator` or `InvalidBlurhashDimensions` errors.
///
/// # Examples
///
/// ```
/// use visionary::{generate_code, ImageFields};
///
/// let fields = ImageFields::new("vb87s1", 1600, 1200)
///     .with_bcc("110044")
///     .with_blurhash("LCDJYN9FxG_M_N%L%M%M4o~ptRIA");
/// let code = generate_code(&fields)?;
/// assert_eq!(code, "dmI4N3MxITE2MDAhMTIwMCExMTAwNDQhTENESllOOUZ4R19NX04lTCVNJU00b35wdFJJQQ");
/// # Ok::<(), visionary::VisionaryError>(())
/// ```
pub fn generate_code(fields: &ImageFields) -> Result<String, VisionaryError> {
    encode_code(fields, CodeSchema::Extended)
}

/// Generate a visionary code in the legacy layout.
///
/// Kept for producing codes readable by consumers that only understand the
/// five-field form. Blurhash component dimensions are not written.
pub fn generate_legacy_code(fields: &ImageFields) -> Result<String, VisionaryError> {
    encode_code(fields, CodeSchema::Legacy)
}
