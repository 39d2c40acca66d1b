//! Error types for visionary code and URL encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur while encoding or decoding visionary codes and URLs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisionaryError {
    /// The input is empty or contains characters outside the base64url alphabet.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The code passed the character check but is not decodable base64url.
    #[error("Invalid base64url data: {0}")]
    InvalidBase64(String),

    /// The decoded code bytes are not valid UTF-8.
    #[error("Decoded code is not valid UTF-8")]
    InvalidUtf8,

    /// The code decoded to an empty payload.
    #[error("Code decoded to an empty payload")]
    EmptyPayload,

    /// A code must carry at least file id, width and height.
    #[error("Code has {0} fields, expected at least 3")]
    TooFewFields(usize),

    /// The file id slot is empty after trimming.
    #[error("Cannot parse code, empty file id")]
    EmptyFileId,

    /// Width or height is missing, zero, or not a number.
    #[error("Cannot parse code, invalid image dimensions: {width:?} x {height:?}")]
    InvalidDimensions { width: String, height: String },

    /// Blurhash component dimensions are present but below 1 or non-numeric.
    #[error("Cannot parse code, invalid blurhash x, y component dimensions")]
    InvalidBlurhashDimensions,

    /// A field required to build a code is absent.
    #[error("Cannot construct visionary code: missing required field {0}")]
    MissingRequiredField(&'static str),

    /// A non-final field contains the code separator and would corrupt the layout.
    #[error("Field {0} contains the reserved separator '!'")]
    ReservedSeparator(&'static str),

    /// The endpoint is not an absolute URL with a usable origin.
    #[error("Cannot construct Visionary URL: bad endpoint {0}")]
    InvalidEndpoint(String),

    /// The filename is empty or contains a path separator.
    #[error("Cannot construct Visionary URL: bad filename {0:?}")]
    InvalidFilename(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// The URL path does not have the `/image/<code>/[<options>/]<filename>` shape.
    #[error("Unrecognized URL: {0}")]
    UnrecognizedUrl(String),

    /// The format token has no known content type.
    #[error("No content type: unknown format {0}")]
    UnknownFormat(String),
}

impl From<url::ParseError> for VisionaryError {
    fn from(err: url::ParseError) -> Self {
        VisionaryError::UrlParseError(err.to_string())
    }
}

impl From<base64::DecodeError> for VisionaryError {
    fn from(err: base64::DecodeError) -> Self {
        VisionaryError::InvalidBase64(err.to_string())
    }
}
