//! Visionary URL construction and parsing.
//!
//! This module contains URL-related functionality:
//! - Building `<origin>/image/<code>/[<options>/]<filename>` URLs
//! - Extracting the code and option tokens from a URL path
//! - Parsing URLs (or bare codes) back into image fields and options

pub mod builder;
pub mod parser;
pub mod utils;

// Re-export main functionality
pub use builder::generate_url;
pub use parser::{
    extract_url_parts, parse_url, parse_url_with, parse_url_with_schema, parse_visionary_string,
    parse_visionary_string_with, parse_visionary_string_with_schema,
};
pub use utils::{compact_segments, is_base64url_formatted, resolve_origin};
