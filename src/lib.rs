//! # rs-seo-extractor
//!
//! Fetches web pages and extracts their on-page SEO fields: first H1, all
//! H2s, meta title and its length, meta description and its length, canonical
//! link and meta robots.
//!
//! Each input URL yields exactly one [`ResultRow`], in input order. A page
//! that cannot be fetched or parsed still gets its row, with every requested
//! field set to an error sentinel; a tag that is merely missing leaves its
//! field empty (or zero, for lengths).
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_seo_extractor::{extract_document, Field};
//!
//! let html = r#"<html><head><title>My Page</title>
//! <meta name="description" content="About my page."></head>
//! <body><h1>Welcome</h1></body></html>"#;
//!
//! let record = extract_document(html, "https://example.com/");
//! let row = record.project(&[Field::H1, Field::MetaDescriptionLength]);
//! assert_eq!(row.labels(), vec!["URL", "H1", "Meta description length"]);
//! ```
//!
//! Fetching over the network goes through an [`Extractor`]:
//!
//! ```no_run
//! use rs_seo_extractor::{Extractor, Field, Options};
//!
//! let extractor = Extractor::new(Options::default())?;
//! for row in extractor.extract_batch(&["example.com/en-gb/"], &Field::ALL) {
//!     println!("{}", serde_json::to_string(&row).unwrap_or_default());
//! }
//! # Ok::<(), reqwest::Error>(())
//! ```
//!
//! ## Request behavior
//!
//! - Input without a scheme gets `https://` (see [`Scheme`])
//! - A leading `xx-XX` path segment sets `Accept-Language` and triggers a
//!   best-effort warm-up request to the locale root
//! - Bodies are decoded from raw bytes using the declared charset

mod error;
mod extract;
mod fields;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Table export (XLSX, CSV, JSON).
pub mod export;

/// HTTP fetching.
pub mod fetch;

/// Caller-side input parsing.
pub mod input;

/// Page field extraction (headings, head tags).
pub mod metadata;

/// URL normalization and request headers.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, ErrorKind, RequestFailure, Result};
pub use extract::{
    extract, extract_batch, extract_document, extract_document_bytes, is_html_content_type,
    Extractor,
};
pub use fields::{dedup_fields, Field, FieldValue, UnknownField, URL_LABEL};
pub use options::{Options, Scheme, DEFAULT_USER_AGENT};
pub use result::{ExtractionRecord, ResultRow};
pub use url_utils::{normalize, Locale, RequestContext};
