//! Head tag extraction: `<title>`, `<meta name=...>`, `<link rel="canonical">`.
//!
//! Attribute names and values are compared case-insensitively, so
//! `<META NAME="Description">` is found the same as the lowercase form.

use dom_query::Document;

use crate::dom;

/// Text of the document `<title>`, preferring the one inside `<head>`.
///
/// Falls back to the first `<title>` anywhere, which covers fragments where
/// the parser puts it in `<body>`. Empty when absent.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    dom::select_first(doc, "head > title")
        .or_else(|| dom::select_first(doc, "title"))
        .map(|title| dom::clean_text(&title))
        .unwrap_or_default()
}

/// Trimmed `content` of the first `<meta name="{name}">`, empty when absent.
#[must_use]
pub fn extract_meta_content(doc: &Document, name: &str) -> String {
    dom::select_all(doc, "meta[name]")
        .iter()
        .find(|meta| {
            dom::get_attribute(meta, "name")
                .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
        })
        .and_then(|meta| dom::get_attribute(meta, "content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Trimmed `content` of `<meta name="description">`.
#[must_use]
pub fn extract_description(doc: &Document) -> String {
    extract_meta_content(doc, "description")
}

/// Trimmed `content` of `<meta name="robots">`.
#[must_use]
pub fn extract_robots(doc: &Document) -> String {
    extract_meta_content(doc, "robots")
}

/// Trimmed `href` of the first `<link>` whose `rel` tokens include
/// `canonical`. Returned as written; relative hrefs are not resolved.
#[must_use]
pub fn extract_canonical(doc: &Document) -> String {
    dom::select_all(doc, "link[rel]")
        .iter()
        .find(|link| {
            dom::get_attribute(link, "rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
        })
        .and_then(|link| dom::get_attribute(link, "href"))
        .map(|href| href.trim().to_string())
        .unwrap_or_default()
}
