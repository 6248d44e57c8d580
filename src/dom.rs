//! DOM helpers over `dom_query`.
//!
//! Thin wrappers for the handful of lookups the extractors need: first match,
//! attribute values, and whitespace-normalized text.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// html5ever recovers from any markup, so this never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with runs of whitespace collapsed to one space and trimmed.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    collapse_whitespace(&text_content(sel))
}

/// Collapse whitespace runs to a single space and trim the ends.
///
/// ```
/// use rs_seo_extractor::dom::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Hello \n\t world "), "Hello world");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Each element matching `selector`, in document order.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    let matched = doc.select(selector);
    matched.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// First element matching `selector`.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matched = doc.select(selector);
    matched.nodes().first().map(|node| Selection::from(*node))
}
