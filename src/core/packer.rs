//! Slot packing for visionary codes.
//!
//! A code is an ordered list of string slots joined with `!` and encoded as
//! unpadded base64url. This module handles only that transform; which slot
//! holds which field is decided by the encoder and decoder.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::constants::V_CODE_SEPARATOR;
use crate::error::VisionaryError;
use crate::url::utils::is_base64url_formatted;

/// Unpadded base64url that tolerates non-zero trailing bits on decode, so
/// codes from older JavaScript encoders still read.
const CODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Join slots with the separator and encode them as unpadded base64url.
///
/// # Examples
///
/// ```
/// use visionary::pack_slots;
///
/// assert_eq!(pack_slots(&["jk92", "100", "100"]), "ams5MiExMDAhMTAw");
/// ```
pub fn pack_slots<S: AsRef<str>>(slots: &[S]) -> String {
    let mut raw = String::new();
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            raw.push(V_CODE_SEPARATOR);
        }
        raw.push_str(slot.as_ref());
    }
    CODE_ENGINE.encode(raw.as_bytes())
}

/// Decode a code into its raw `!`-joined text.
///
/// # Arguments
///
/// * `code` - The code; surrounding whitespace is ignored
///
/// # Returns
///
/// Returns the decoded text, or an error if the code is empty, is not
/// base64url, or does not decode to non-empty UTF-8. Non-zero trailing bits in
/// the last symbol are ignored.
pub fn code_to_text(code: &str) -> Result<String, VisionaryError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(VisionaryError::MalformedInput("empty code".to_string()));
    }
    if !is_base64url_formatted(code) {
        return Err(VisionaryError::MalformedInput(format!(
            "code is not base64url formatted: {code}"
        )));
    }

    let bytes = CODE_ENGINE.decode(code)?;
    if bytes.is_empty() {
        return Err(VisionaryError::EmptyPayload);
    }

    String::from_utf8(bytes).map_err(|_| VisionaryError::InvalidUtf8)
}

/// Decode a code and split it into slots.
pub fn unpack_slots(code: &str) -> Result<Vec<String>, VisionaryError> {
    let text = code_to_text(code)?;
    Ok(text.split(V_CODE_SEPARATOR).map(str::to_string).collect())
}
