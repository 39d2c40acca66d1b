//! Parsing and generating the options segment of a Visionary URL.

use crate::options::token::{tokenize_options_string, OptionToken, DEBUG_TOKEN, DOWNLOAD_TOKEN};
use crate::types::ImageOptions;

/// Build options from a sequence of raw tokens.
///
/// Tokens are applied in order. A later size or format token replaces an
/// earlier one. Unrecognized tokens are ignored.
pub fn parse_option_tokens<S: AsRef<str>>(tokens: &[S]) -> ImageOptions {
    let mut options = ImageOptions::default();

    for token in tokens {
        match OptionToken::classify(token.as_ref()) {
            Some(OptionToken::Size(size)) => options.size = Some(size),
            Some(OptionToken::Debug) => options.debug = Some(true),
            Some(OptionToken::Download) => options.download = Some(true),
            Some(OptionToken::Format(format)) => options.format = Some(format),
            None => {}
        }
    }

    options
}

/// Parse a comma-joined options string.
///
/// # Examples
///
/// ```
/// use visionary::{parse_options_string, ImageSize};
///
/// let options = parse_options_string("debug,xl");
/// assert_eq!(options.debug, Some(true));
/// assert_eq!(options.size, Some(ImageSize::Xl));
///
/// assert!(parse_options_string("").is_empty());
/// ```
pub fn parse_options_string(options: &str) -> ImageOptions {
    parse_option_tokens(&tokenize_options_string(options))
}

/// Generate the canonical options string: tokens sorted ascending and
/// comma-joined.
///
/// Flags only contribute a token when set to `true`. Returns `None` when no
/// option produces a token.
///
/// # Examples
///
/// ```
/// use visionary::{generate_options_string, ImageFormat, ImageOptions, ImageSize};
///
/// let options = ImageOptions::default()
///     .with_download(true)
///     .with_size(ImageSize::Sm)
///     .with_format(ImageFormat::Webp);
/// assert_eq!(generate_options_string(&options).as_deref(), Some("download,sm,webp"));
///
/// assert_eq!(generate_options_string(&ImageOptions::default()), None);
/// ```
pub fn generate_options_string(options: &ImageOptions) -> Option<String> {
    let mut tokens: Vec<&str> = Vec::with_capacity(4);

    if options.debug == Some(true) {
        tokens.push(DEBUG_TOKEN);
    }
    if options.download == Some(true) {
        tokens.push(DOWNLOAD_TOKEN);
    }
    if let Some(size) = options.size {
        tokens.push(size.as_str());
    }
    if let Some(format) = options.format {
        tokens.push(format.as_str());
    }

    if tokens.is_empty() {
        return None;
    }

    tokens.sort_unstable();
    Some(tokens.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::token::{ImageFormat, ImageSize};

    #[test]
    fn test_parse_size_and_format_selector() {
        let options = parse_options_string("xs,f_auto");

        assert_eq!(options.size, Some(ImageSize::Xs));
        assert_eq!(options.format, Some(ImageFormat::Auto));
    }

    #[test]
    fn test_parse_debug_and_download() {
        let options = parse_options_string("debug,xl");
        assert_eq!(options.debug, Some(true));
        assert_eq!(options.size, Some(ImageSize::Xl));
        assert_eq!(options.download, None);

        let options = parse_options_string("4k,download");
        assert_eq!(options.download, Some(true));
        assert_eq!(options.size, Some(ImageSize::FourK));
    }

    #[test]
    fn test_parse_bare_format() {
        let options = parse_options_string("avif,lg");

        assert_eq!(options.format, Some(ImageFormat::Avif));
        assert_eq!(options.size, Some(ImageSize::Lg));
    }

    #[test]
    fn test_last_size_wins() {
        let options = parse_options_string("sm,md,xs");
        assert_eq!(options.size, Some(ImageSize::Xs));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let options = parse_options_string("huge,LG, sm,png,,debug");

        assert_eq!(options.size, None);
        assert_eq!(options.debug, Some(true));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_options_string(""), ImageOptions::default());
        assert!(parse_option_tokens::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_generate_sorted() {
        let options = ImageOptions::default()
            .with_download(true)
            .with_format(ImageFormat::Webp)
            .with_size(ImageSize::Sm);
        assert_eq!(generate_options_string(&options).as_deref(), Some("download,sm,webp"));

        let options = ImageOptions::default()
            .with_debug(true)
            .with_format(ImageFormat::Avif)
            .with_size(ImageSize::FiveK);
        assert_eq!(generate_options_string(&options).as_deref(), Some("5k,avif,debug"));
    }

    #[test]
    fn test_generate_skips_false_flags() {
        let options = ImageOptions::default().with_debug(false).with_size(ImageSize::Md);
        assert_eq!(generate_options_string(&options).as_deref(), Some("md"));
    }

    #[test]
    fn test_generate_nothing_to_emit() {
        assert_eq!(generate_options_string(&ImageOptions::default()), None);

        let only_false = ImageOptions::default().with_debug(false).with_download(false);
        assert_eq!(generate_options_string(&only_false), None);
    }
}
