//! Heading extraction (`<h1>`, `<h2>`).

use dom_query::Document;

use crate::dom;

/// Separator between multiple `<h2>` texts.
pub const H2_SEPARATOR: &str = " | ";

/// Text of the first `<h1>`, or empty if there is none.
#[must_use]
pub fn extract_h1(doc: &Document) -> String {
    dom::select_first(doc, "h1")
        .map(|h1| dom::clean_text(&h1))
        .unwrap_or_default()
}

/// Texts of every `<h2>` in document order, empty ones skipped, joined with
/// [`H2_SEPARATOR`].
#[must_use]
pub fn extract_h2(doc: &Document) -> String {
    dom::select_all(doc, "h2")
        .iter()
        .map(dom::clean_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(H2_SEPARATOR)
}
