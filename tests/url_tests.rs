//! Tests for URL path extraction and option segments.

use visionary::*;

#[test]
fn test_extract_url_parts_shapes() {
    let test_cases = vec![
        ("https://cdn.visionary.cloud/image/abc/image.jpg", "abc", vec![]),
        ("https://cdn.visionary.cloud/image/abc/xl/image.jpg", "abc", vec!["xl"]),
        (
            "https://cdn.visionary.cloud/image/abc/xl,debug,nope/image.jpg",
            "abc",
            vec!["xl", "debug", "nope"],
        ),
        ("http://localhost:3000/image/abc/image.jpg?v=2#top", "abc", vec![]),
        ("https://cdn.visionary.cloud/image/abc/image.jpg/", "abc", vec![]),
    ];

    for (url, expected_code, expected_tokens) in test_cases {
        let parts = extract_url_parts(url).unwrap();
        assert_eq!(parts.code, expected_code, "Code mismatch for URL: {}", url);
        assert_eq!(parts.option_tokens, expected_tokens, "Tokens mismatch for URL: {}", url);
    }
}

#[test]
fn test_extract_url_parts_rejects() {
    let invalid_urls = vec![
        "https://cdn.visionary.cloud/image/abc",
        "https://cdn.visionary.cloud/img/abc/image.jpg",
        "https://cdn.visionary.cloud/x/image/abc/image.jpg",
        "https://cdn.visionary.cloud/image/abc/sm/extra/image.jpg",
        "https://cdn.visionary.cloud/image/YmFzZQ==/image.jpg",
    ];

    for url in invalid_urls {
        let result = extract_url_parts(url);
        assert!(
            matches!(result, Err(VisionaryError::UnrecognizedUrl(_))),
            "Should reject URL: {}",
            url
        );
    }
}

#[test]
fn test_extract_url_parts_not_a_url() {
    for input in ["", "adam.com", "/image/abc/image.jpg"] {
        assert!(
            matches!(extract_url_parts(input), Err(VisionaryError::UrlParseError(_))),
            "Should fail to parse: {:?}",
            input
        );
    }
}

#[test]
fn test_options_segment_last_size_wins() {
    let code = generate_code(&ImageFields::new("abc", 10, 10)).unwrap();
    let url = format!("https://cdn.visionary.cloud/image/{}/sm,lg,download/a.jpg", code);

    let image = parse_url(&url).unwrap();
    assert_eq!(image.options.size, Some(ImageSize::Lg));
    assert_eq!(image.options.download, Some(true));
    assert_eq!(image.options.debug, None);
}

#[test]
fn test_unknown_options_are_dropped() {
    let code = generate_code(&ImageFields::new("abc", 10, 10)).unwrap();
    let url = format!("https://cdn.visionary.cloud/image/{}/huge,png/a.jpg", code);

    let image = parse_url(&url).unwrap();
    assert!(image.options.is_empty());
}

#[test]
fn test_filename_segment_is_not_validated() {
    let code = generate_code(&ImageFields::new("abc", 10, 10)).unwrap();
    let url = format!("https://cdn.visionary.cloud/image/{}/whatever%20name", code);

    assert!(parse_url(&url).is_some());
}

#[test]
fn test_generated_urls_parse_back() {
    let fields = ImageFields::new("https://example.com/photos/cat.png", 640, 480)
        .with_bcc("223344")
        .with_blurhash("LEHV6nWB2yk8pyo0adR*.7kCMdnj")
        .with_blurhash_components(4, 3);

    let sizes = ImageSize::ALL;
    for size in sizes {
        let options = UrlOptions::new().with_options(ImageOptions::default().with_size(size));
        let url = generate_url(&fields, &options).unwrap();

        let image = parse_url(&url).unwrap();
        assert_eq!(image.fields, fields);
        assert_eq!(image.options.size, Some(size), "Size mismatch for URL: {}", url);
    }
}

#[test]
fn test_legacy_url_with_alt_text() {
    let url = "https://cdn.visionary.cloud/image/ams5MyExMDAhMTAwIWJlM2UzZiFibHVyaGFzaHZhbGxsdWUhSGFwcHkgY293IG9uIGEgZmFybQ/image.jpg";

    assert!(parse_url(url).is_none());

    let image = VisionaryCodec::legacy().parse_url(url, NoopSink).unwrap();
    assert_eq!(
        image.fields,
        ImageFields::new("jk93", 100, 100)
            .with_bcc("be3e3f")
            .with_blurhash("blurhashvalllue")
            .with_alt_text("Happy cow on a farm")
    );
    assert!(image.options.is_empty());
}

#[test]
fn test_filenames_that_would_break_the_path() {
    let fields = ImageFields::new("abc", 10, 10);

    for filename in [".\t.", "\t", "\r\n", "a\nb.jpg"] {
        let result = generate_url(&fields, &UrlOptions::new().with_filename(filename));
        assert_eq!(
            result,
            Err(VisionaryError::InvalidFilename(filename.to_string())),
            "Should reject filename: {:?}",
            filename
        );
    }
}
