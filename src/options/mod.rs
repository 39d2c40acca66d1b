//! Image display options.
//!
//! This module contains the options mini-language:
//! - The closed token vocabulary (sizes, formats, flags)
//! - Parsing a comma-joined token list into [`ImageOptions`](crate::ImageOptions)
//! - Generating the canonical, sorted options string

pub mod codec;
pub mod token;

// Re-export main functionality
pub use codec::{generate_options_string, parse_option_tokens, parse_options_string};
pub use token::{
    is_debug_token, is_download_token, is_format_token, is_size_token, tokenize_options_string,
    ImageFormat, ImageSize, OptionToken,
};
