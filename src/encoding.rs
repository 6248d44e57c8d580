//! Character encoding detection and transcoding.
//!
//! Pages are decoded from the raw response bytes, never from a pre-decoded
//! text guess. The charset is taken from the `Content-Type` header, then from
//! HTML meta tags, defaulting to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks for charset declarations in the following order:
/// 1. A byte order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. Defaults to UTF-8 if no declaration found
///
/// Only examines the first 1024 bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .or_else(|| {
            extract_content_type_charset(&head_str)
                .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        })
        .unwrap_or(UTF_8)
}

/// Charset parameter of a `Content-Type` header value.
///
/// ```
/// use rs_seo_extractor::encoding::charset_from_content_type;
///
/// assert_eq!(
///     charset_from_content_type("text/html; charset=\"ISO-8859-1\""),
///     Some("ISO-8859-1".to_string())
/// );
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// A byte order mark wins over everything; otherwise a charset in
/// `content_type` wins over any in-document declaration. Invalid sequences
/// are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use rs_seo_extractor::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html, None).contains("Café"));
///
/// let html = b"<title>Caf\xE9</title>";
/// assert!(transcode_to_utf8(html, Some("text/html; charset=windows-1252")).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(html) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&html[bom_len..]);
        return decoded.into_owned();
    }

    let encoding = content_type
        .and_then(charset_from_content_type)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .unwrap_or_else(|| detect_encoding(html));

    if encoding == UTF_8 {
        // Also strips a UTF-8 BOM
        let (decoded, _) = UTF_8.decode_with_bom_removal(html);
        return decoded.into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
