//! The option token vocabulary.
//!
//! Every option in a Visionary URL is a single comma-delimited token. The set
//! of tokens is closed: sizes, formats and the `debug`/`download` flags.
//! Matching is exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisionaryError;
use crate::types::ContentType;

/// Token that turns on the debug overlay.
pub const DEBUG_TOKEN: &str = "debug";

/// Token that asks the CDN to serve the image as an attachment.
pub const DOWNLOAD_TOKEN: &str = "download";

/// Prefix of the selector form of a format token (`f_webp`).
pub const FORMAT_SELECTOR_PREFIX: &str = "f_";

/// Bootstrap-inspired image size tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "xxl")]
    Xxl,
    #[serde(rename = "4k")]
    FourK,
    #[serde(rename = "5k")]
    FiveK,
}

impl ImageSize {
    /// All sizes, smallest first.
    pub const ALL: [ImageSize; 8] = [
        ImageSize::Xs,
        ImageSize::Sm,
        ImageSize::Md,
        ImageSize::Lg,
        ImageSize::Xl,
        ImageSize::Xxl,
        ImageSize::FourK,
        ImageSize::FiveK,
    ];

    /// The token as it appears in a URL.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Xs => "xs",
            ImageSize::Sm => "sm",
            ImageSize::Md => "md",
            ImageSize::Lg => "lg",
            ImageSize::Xl => "xl",
            ImageSize::Xxl => "xxl",
            ImageSize::FourK => "4k",
            ImageSize::FiveK => "5k",
        }
    }

    /// Look up a size by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == token)
    }

    /// Maximum rendered width in pixels for this size.
    pub fn pixels(self) -> u32 {
        match self {
            ImageSize::Xs => 160,
            ImageSize::Sm => 320,
            ImageSize::Md => 640,
            ImageSize::Lg => 1280,
            ImageSize::Xl => 1920,
            ImageSize::Xxl => 2560,
            ImageSize::FourK => 3840,
            ImageSize::FiveK => 5120,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = VisionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| VisionaryError::MalformedInput(format!("unknown size {s}")))
    }
}

/// Output image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Let the CDN negotiate the best format for the client.
    Auto,
    Avif,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Auto,
        ImageFormat::Avif,
        ImageFormat::Jpeg,
        ImageFormat::Webp,
    ];

    /// The bare token as it appears in a URL.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Auto => "auto",
            ImageFormat::Avif => "avif",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
        }
    }

    /// Look up a format by its bare token (`webp`).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == token)
    }

    /// Look up a format by its bare token or its selector form (`f_webp`).
    pub fn from_selector(token: &str) -> Option<Self> {
        let name = token.strip_prefix(FORMAT_SELECTOR_PREFIX).unwrap_or(token);
        Self::from_token(name)
    }

    /// Content type and file extension for a concrete format.
    ///
    /// `Auto` has no fixed content type and returns `None`.
    pub fn content_type(self) -> Option<ContentType> {
        match self {
            ImageFormat::Auto => None,
            ImageFormat::Avif => Some(ContentType {
                content_type: "image/avif",
                extension: "avif",
            }),
            ImageFormat::Jpeg => Some(ContentType {
                content_type: "image/jpeg",
                extension: "jpg",
            }),
            ImageFormat::Webp => Some(ContentType {
                content_type: "image/webp",
                extension: "webp",
            }),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = VisionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s).ok_or_else(|| VisionaryError::UnknownFormat(s.to_string()))
    }
}

/// A classified option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionToken {
    Size(ImageSize),
    Debug,
    Download,
    Format(ImageFormat),
}

impl OptionToken {
    /// Classify a raw token. Classes are tried in the order size, debug,
    /// download, format and the first match wins.
    pub fn classify(token: &str) -> Option<Self> {
        if let Some(size) = ImageSize::from_token(token) {
            Some(OptionToken::Size(size))
        } else if is_debug_token(token) {
            Some(OptionToken::Debug)
        } else if is_download_token(token) {
            Some(OptionToken::Download)
        } else {
            ImageFormat::from_selector(token).map(OptionToken::Format)
        }
    }
}

/// Check whether a token is one of the size tokens.
///
/// # Examples
///
/// ```
/// use visionary::is_size_token;
///
/// assert!(is_size_token("lg"));
/// assert!(!is_size_token("LG"));
/// assert!(!is_size_token("zzz"));
/// ```
pub fn is_size_token(token: &str) -> bool {
    ImageSize::from_token(token).is_some()
}

pub fn is_debug_token(token: &str) -> bool {
    token == DEBUG_TOKEN
}

pub fn is_download_token(token: &str) -> bool {
    token == DOWNLOAD_TOKEN
}

/// Check whether a token selects an output format, bare (`avif`) or as a
/// selector (`f_avif`).
pub fn is_format_token(token: &str) -> bool {
    ImageFormat::from_selector(token).is_some()
}

/// Split an options string on commas.
///
/// No trimming is done. An empty string yields a single empty token.
pub fn tokenize_options_string(options: &str) -> Vec<String> {
    options.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tokens() {
        for size in ImageSize::ALL {
            assert!(is_size_token(size.as_str()));
            assert_eq!(ImageSize::from_token(size.as_str()), Some(size));
        }

        assert!(!is_size_token("zzz"));
        assert!(!is_size_token("Lg"));
        assert!(!is_size_token(" lg"));
        assert!(!is_size_token(""));
    }

    #[test]
    fn test_size_pixels() {
        assert_eq!(ImageSize::Xs.pixels(), 160);
        assert_eq!(ImageSize::Lg.pixels(), 1280);
        assert_eq!(ImageSize::FiveK.pixels(), 5120);

        let widths: Vec<u32> = ImageSize::ALL.iter().map(|s| s.pixels()).collect();
        let mut sorted = widths.clone();
        sorted.sort();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn test_flag_tokens() {
        assert!(is_debug_token("debug"));
        assert!(!is_debug_token("Debug"));
        assert!(is_download_token("download"));
        assert!(!is_download_token("downloads"));
    }

    #[test]
    fn test_format_tokens() {
        assert!(is_format_token("auto"));
        assert!(is_format_token("f_auto"));
        assert!(is_format_token("webp"));
        assert!(is_format_token("f_jpeg"));
        assert!(!is_format_token("f_"));
        assert!(!is_format_token("png"));
        assert!(!is_format_token("f_png"));

        assert_eq!(ImageFormat::from_selector("f_avif"), Some(ImageFormat::Avif));
        assert_eq!(ImageFormat::from_token("f_avif"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(OptionToken::classify("4k"), Some(OptionToken::Size(ImageSize::FourK)));
        assert_eq!(OptionToken::classify("debug"), Some(OptionToken::Debug));
        assert_eq!(OptionToken::classify("download"), Some(OptionToken::Download));
        assert_eq!(
            OptionToken::classify("f_webp"),
            Some(OptionToken::Format(ImageFormat::Webp))
        );
        assert_eq!(OptionToken::classify("strawberries.jpg"), None);
        assert_eq!(OptionToken::classify(""), None);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize_options_string("debug,xl"), vec!["debug", "xl"]);
        assert_eq!(tokenize_options_string(""), vec![""]);
        assert_eq!(tokenize_options_string("a, b"), vec!["a", " b"]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("xxl".parse::<ImageSize>().unwrap(), ImageSize::Xxl);
        assert!("huge".parse::<ImageSize>().is_err());
        assert_eq!("f_auto".parse::<ImageFormat>().unwrap(), ImageFormat::Auto);
        assert_eq!(
            "gif".parse::<ImageFormat>(),
            Err(VisionaryError::UnknownFormat("gif".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageSize::FourK.to_string(), "4k");
        assert_eq!(ImageFormat::Webp.to_string(), "webp");
    }
}
