//! Tests for code slot layout in both schemas.

use visionary::*;

fn slots(code: &str) -> Vec<String> {
    unpack_slots(code).unwrap()
}

#[test]
fn test_extended_slot_layout() {
    let test_cases = vec![
        (ImageFields::new("id", 1, 2), vec!["id", "1", "2"]),
        (ImageFields::new("id", 1, 2).with_bcc("fff"), vec!["id", "1", "2", "fff"]),
        (
            ImageFields::new("id", 1, 2).with_blurhash("bh"),
            vec!["id", "1", "2", "", "bh"],
        ),
        (
            ImageFields::new("id", 1, 2)
                .with_bcc("fff")
                .with_blurhash("bh")
                .with_blurhash_components(5, 2),
            vec!["id", "1", "2", "fff", "bh", "5", "2"],
        ),
        (
            ImageFields::new("id", 1, 2).with_alt_text("alt"),
            vec!["id", "1", "2", "", "", "", "", "alt"],
        ),
    ];

    for (fields, expected) in test_cases {
        let code = generate_code(&fields).unwrap();
        assert_eq!(slots(&code), expected, "Slot mismatch for {:?}", fields);
    }
}

#[test]
fn test_legacy_slot_layout() {
    let test_cases = vec![
        (ImageFields::new("id", 1, 2), vec!["id", "1", "2", "", ""]),
        (
            ImageFields::new("id", 1, 2)
                .with_blurhash("bh")
                .with_blurhash_components(5, 2),
            vec!["id", "1", "2", "", "bh"],
        ),
        (
            ImageFields::new("id", 1, 2).with_alt_text("alt"),
            vec!["id", "1", "2", "", "", "alt"],
        ),
    ];

    for (fields, expected) in test_cases {
        let code = generate_legacy_code(&fields).unwrap();
        assert_eq!(slots(&code), expected, "Slot mismatch for {:?}", fields);
    }
}

#[test]
fn test_blurhash_with_separator_like_chars() {
    // Every base83 character used by blurhash must survive the round trip.
    let blurhash = "09AZaz#$%*+,-.:;=?@[]^_{|}~";
    let fields = ImageFields::new("id", 1, 2)
        .with_blurhash(blurhash)
        .with_blurhash_components(9, 9);

    let decoded = parse_code(&generate_code(&fields).unwrap()).unwrap();
    assert_eq!(decoded.blurhash, blurhash);
    assert_eq!(decoded.blurhash_components(), Some((9, 9)));
}

#[test]
fn test_unicode_fields() {
    let fields = ImageFields::new("ファイル", 3840, 2160).with_alt_text("Café au lait ☕");

    let code = generate_code(&fields).unwrap();
    assert!(is_base64url_formatted(&code));
    assert_eq!(parse_code(&code).unwrap(), fields);
}

#[test]
fn test_code_to_text() {
    assert_eq!(
        code_to_text("ams5MiExMDAhMTAw").unwrap(),
        format!("jk92{}100{}100", V_CODE_SEPARATOR, V_CODE_SEPARATOR)
    );
}

#[test]
fn test_codec_schemas() {
    let fields = ImageFields::new("id", 1, 2)
        .with_blurhash("bh")
        .with_blurhash_components(3, 3)
        .with_alt_text("alt");

    let extended = VisionaryCodec::new(CodeSchema::Extended);
    let legacy = VisionaryCodec::new(CodeSchema::Legacy);

    assert_eq!(extended.decode(&extended.encode(&fields).unwrap()).unwrap(), fields);

    // Legacy codes don't carry blurhash dimensions.
    let decoded = legacy.decode(&legacy.encode(&fields).unwrap()).unwrap();
    assert_eq!(decoded.blurhash_components(), None);
    assert_eq!(decoded.alt_text(), Some("alt"));
}

#[test]
fn test_encoder_rejects_what_decoder_rejects() {
    assert!(matches!(
        generate_code(&ImageFields::new(" vb ", 1, 1)),
        Err(VisionaryError::MalformedInput(_))
    ));

    let fields = ImageFields::new("id", 1, 2)
        .with_blurhash("bh")
        .with_blurhash_components(0, 3);
    assert_eq!(generate_code(&fields), Err(VisionaryError::InvalidBlurhashDimensions));
}

#[test]
fn test_lenient_trailing_bits() {
    // "YSExITI" is the canonical code for "a!1!2"; "YSExITJ" sets an unused low bit.
    assert_eq!(pack_slots(&["a", "1", "2"]), "YSExITI");
    assert_eq!(parse_code("YSExITJ"), parse_code("YSExITI"));
    assert_eq!(parse_code("YSExITJ"), Some(ImageFields::new("a", 1, 2)));
}
