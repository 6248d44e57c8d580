//! Page field extraction.
//!
//! Each field is looked up independently: a missing tag leaves its field
//! empty and never affects the others.

pub mod headings;
pub mod meta_tags;

use dom_query::Document;

use crate::result::ExtractionRecord;

pub use headings::{extract_h1, extract_h2, H2_SEPARATOR};
pub use meta_tags::{
    extract_canonical, extract_description, extract_meta_content, extract_robots, extract_title,
};

/// Extract every field from a parsed document.
///
/// # Arguments
/// * `doc` - The HTML document
/// * `url` - Identifying URL stored on the record
#[must_use]
pub fn extract_record(doc: &Document, url: &str) -> ExtractionRecord {
    ExtractionRecord {
        url: url.to_string(),
        h1: extract_h1(doc),
        h2: extract_h2(doc),
        meta_title: extract_title(doc),
        meta_description: extract_description(doc),
        canonical: extract_canonical(doc),
        meta_robots: extract_robots(doc),
    }
}
