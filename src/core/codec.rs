//! Schema-bound codec.

use crate::core::decoder::{decode_code, parse_code_with};
use crate::core::encoder::encode_code;
use crate::error::VisionaryError;
use crate::report::DiagnosticSink;
use crate::types::{CodeSchema, ImageFields, VisionaryImage};
use crate::url::parser::{parse_url_with_schema, parse_visionary_string_with_schema};

/// Visionary code codec bound to one positional layout.
///
/// The two layouts are not interoperable for codes carrying alt text, so a
/// caller picks one explicitly. [`VisionaryCodec::default`] uses the extended
/// layout.
///
/// # Examples
///
/// ```
/// use visionary::{CodeSchema, ImageFields, VisionaryCodec};
///
/// let legacy = VisionaryCodec::new(CodeSchema::Legacy);
/// let fields = ImageFields::new("jk93", 100, 100).with_alt_text("Happy cow on a farm");
///
/// let code = legacy.encode(&fields)?;
/// assert_eq!(legacy.decode(&code)?, fields);
/// # Ok::<(), visionary::VisionaryError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisionaryCodec {
    schema: CodeSchema,
}

impl VisionaryCodec {
    pub fn new(schema: CodeSchema) -> Self {
        Self { schema }
    }

    pub fn legacy() -> Self {
        Self::new(CodeSchema::Legacy)
    }

    pub fn schema(&self) -> CodeSchema {
        self.schema
    }

    /// Encode fields into a code using this codec's layout.
    pub fn encode(&self, fields: &ImageFields) -> Result<String, VisionaryError> {
        encode_code(fields, self.schema)
    }

    /// Decode a code using this codec's layout.
    pub fn decode(&self, code: &str) -> Result<ImageFields, VisionaryError> {
        decode_code(code, self.schema)
    }

    /// Decode a code, reporting failures to `sink` and returning `None`.
    pub fn parse<S: DiagnosticSink>(&self, code: &str, sink: S) -> Option<ImageFields> {
        parse_code_with(code, self.schema, sink)
    }

    /// Parse a Visionary URL whose code uses this codec's layout.
    pub fn parse_url<S: DiagnosticSink>(&self, url: &str, sink: S) -> Option<VisionaryImage> {
        parse_url_with_schema(url, self.schema, sink)
    }

    /// Parse a bare code or a Visionary URL using this codec's layout.
    pub fn parse_visionary_string<S: DiagnosticSink>(
        &self,
        input: &str,
        sink: S,
    ) -> Option<VisionaryImage> {
        parse_visionary_string_with_schema(input, self.schema, sink)
    }
}
