//! Core visionary code encoding and decoding functionality.
//!
//! This module contains the field codec:
//! - Packing positional slots into base64url and back
//! - Encoding image fields in the legacy or extended layout
//! - Decoding and validating codes back into image fields

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod packer;

// Re-export main functionality
pub use codec::VisionaryCodec;
pub use decoder::{decode_code, parse_code, parse_code_with, parse_legacy_code};
pub use encoder::{encode_code, generate_code, generate_legacy_code};
pub use packer::{code_to_text, pack_slots, unpack_slots};
