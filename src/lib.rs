//! Visionary - compact, URL-safe image codes and CDN URLs
//!
//! A visionary code packs the metadata needed to render an image placeholder
//! (file id, source dimensions, background color, blurhash, alt text) into a
//! short base64url token. A Visionary URL wraps that token in a CDN path
//! together with display options.
//!
//! # Quick Start
//!
//! ```
//! use visionary::{generate_url, parse_url, ImageFields, ImageOptions, ImageSize, UrlOptions};
//!
//! let fields = ImageFields::new("vb87s1", 1600, 1200)
//!     .with_bcc("110044")
//!     .with_blurhash("LCDJYN9FxG_M_N%L%M%M4o~ptRIA")
//!     .with_blurhash_components(4, 3)
//!     .with_alt_text("A bowl of strawberries");
//!
//! let options = UrlOptions::new()
//!     .with_filename("strawberries.jpg")
//!     .with_options(ImageOptions::default().with_size(ImageSize::Xl));
//!
//! let url = generate_url(&fields, &options)?;
//! let image = parse_url(&url).unwrap();
//! assert_eq!(image.fields, fields);
//! assert_eq!(image.options.size, Some(ImageSize::Xl));
//! # Ok::<(), visionary::VisionaryError>(())
//! ```
//!
//! # Code Format
//!
//! A code is the unpadded base64url encoding of `!`-separated fields. `!` is
//! outside the base83 alphabet blurhash uses, so blurhash strings never
//! collide with it.
//!
//! | Slot | Extended      | Legacy    |
//! |------|---------------|-----------|
//! | 0    | file id       | file id   |
//! | 1    | source width  | source width |
//! | 2    | source height | source height |
//! | 3    | bcc           | bcc       |
//! | 4    | blurhash      | blurhash  |
//! | 5    | blurhash x    | alt text  |
//! | 6    | blurhash y    |           |
//! | 7    | alt text      |           |
//!
//! Absent fields are empty slots; absent trailing fields may be left out.
//!
//! # URL Format
//!
//! `<origin>/image/<code>/[<options>/]<filename>`, where `<options>` is a
//! comma-joined list of tokens: sizes (`xs` .. `5k`), formats (`auto`,
//! `avif`, `jpeg`, `webp`, also `f_<format>`), `debug` and `download`.
//!
//! # Error Handling
//!
//! Encoding functions return `Result<T, VisionaryError>`. The `parse_*`
//! functions return `Option` and hand errors to a [`DiagnosticSink`]; the
//! default sink logs them through the `log` crate.

// Re-export main encoding and decoding functions
pub use crate::core::{
    decode_code, encode_code, generate_code, generate_legacy_code, parse_code, parse_code_with,
    parse_legacy_code, VisionaryCodec,
};
pub use crate::core::{code_to_text, pack_slots, unpack_slots};

// Re-export URL functions
pub use crate::url::{
    compact_segments, extract_url_parts, generate_url, is_base64url_formatted, parse_url,
    parse_url_with, parse_url_with_schema, parse_visionary_string, parse_visionary_string_with,
    parse_visionary_string_with_schema, resolve_origin,
};

// Re-export options
pub use options::{
    generate_options_string, is_debug_token, is_download_token, is_format_token, is_size_token,
    parse_option_tokens, parse_options_string, tokenize_options_string, ImageFormat, ImageSize,
    OptionToken,
};

// Re-export public types
pub use constants::{
    CDN_ENDPOINT, DEFAULT_FILENAME, DEFAULT_OPTIONS, IMAGE_PATH_SEGMENT, V_CODE_SEPARATOR,
};
pub use error::VisionaryError;
pub use report::{CollectingSink, DiagnosticSink, LogSink, NoopSink};
pub use types::{
    CodeSchema, ContentType, ImageFields, ImageOptions, UrlOptions, VisionaryImage,
    VisionaryUrlParts,
};
pub use utils::{format_to_content_type, suggested_blurhash_components};

// Module declarations
pub mod constants;
pub mod core;
pub mod error;
pub mod options;
pub mod report;
pub mod types;
pub mod url;
pub mod utils;
