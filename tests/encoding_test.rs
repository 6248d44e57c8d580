use rs_seo_extractor::{extract_document_bytes, ErrorKind};

#[test]
fn utf8_content_handled_correctly() {
    let html = "<html><head><meta charset=\"utf-8\"><title>Ünïcödé 中文</title></head>\
                <body><h1>é, ñ, ü</h1></body></html>"
        .as_bytes();

    let record = extract_document_bytes(html, Some("text/html"), "u").expect("extraction failed");

    assert_eq!(record.meta_title, "Ünïcödé 中文");
    assert_eq!(record.meta_title_length(), 10);
    assert_eq!(record.h1, "é, ñ, ü");
}

#[test]
fn iso88591_meta_charset_converted() {
    // é = 0xE9, ñ = 0xF1, ü = 0xFC in ISO-8859-1
    let html = b"<html><head><meta charset=\"ISO-8859-1\">\
        <title>Caf\xE9 espa\xF1ol</title></head>\
        <body><h1>M\xFCnchen</h1></body></html>";

    let record = extract_document_bytes(html, None, "u").expect("extraction failed");

    assert_eq!(record.meta_title, "Café español");
    assert_eq!(record.h1, "München");
}

#[test]
fn windows1252_http_equiv_converted() {
    // 0x93/0x94 are curly double quotes in Windows-1252
    let html = b"<html><head>\
        <meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">\
        <meta name=\"description\" content=\"\x93Quoted\x94\"></head></html>";

    let record = extract_document_bytes(html, None, "u").expect("extraction failed");

    assert_eq!(record.meta_description, "\u{201C}Quoted\u{201D}");
    assert_eq!(record.meta_description_length(), 8);
}

#[test]
fn header_charset_overrides_document() {
    let html = b"<html><head><meta charset=\"utf-8\"><title>Caf\xE9</title></head></html>";

    let record = extract_document_bytes(html, Some("text/html; charset=iso-8859-1"), "u")
        .expect("extraction failed");

    assert_eq!(record.meta_title, "Café");
}

#[test]
fn utf8_bom_is_stripped() {
    let mut html = vec![0xEF, 0xBB, 0xBF];
    html.extend_from_slice(b"<title>BOM</title>");

    let record = extract_document_bytes(&html, None, "u").expect("extraction failed");

    assert_eq!(record.meta_title, "BOM");
    assert_eq!(record.meta_title_length(), 3);
}

#[test]
fn utf16le_page_with_bom_decoded() {
    let mut html = vec![0xFF, 0xFE];
    for unit in "<title>Café</title><h1>Grüße</h1>".encode_utf16() {
        html.extend_from_slice(&unit.to_le_bytes());
    }

    let record = extract_document_bytes(&html, Some("text/html"), "u").expect("extraction failed");

    assert_eq!(record.meta_title, "Café");
    assert_eq!(record.meta_title_length(), 4);
    assert_eq!(record.h1, "Grüße");
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let html = b"<title>ok \xFF\xFE</title><h1>still here</h1>";

    let record = extract_document_bytes(html, Some("text/html; charset=utf-8"), "u")
        .expect("extraction failed");

    assert_eq!(record.h1, "still here");
    assert!(record.meta_title.starts_with("ok"));
}

#[test]
fn unknown_charset_label_falls_back() {
    let html = b"<title>plain</title>";

    let record = extract_document_bytes(html, Some("text/html; charset=x-made-up"), "u")
        .expect("extraction failed");

    assert_eq!(record.meta_title, "plain");
}

#[test]
fn binary_content_type_is_parse_error() {
    let err = extract_document_bytes(b"\x89PNG\r\n", Some("image/png"), "https://x.com/a.png")
        .expect_err("png should not parse");

    assert_eq!(err.kind(), ErrorKind::ParseError);
    assert_eq!(err.url(), "https://x.com/a.png");
}
