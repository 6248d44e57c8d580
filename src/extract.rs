//! Per-URL extraction and batch orchestration.
//!
//! Every failure stays local to its URL: [`Extractor::extract`] always returns
//! a row, and a batch always returns one row per input URL, in input order.

use crate::encoding;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::fields::Field;
use crate::metadata;
use crate::options::Options;
use crate::result::{ExtractionRecord, ResultRow};
use crate::url_utils::{self, RequestContext};

/// Fetches pages and turns them into rows.
///
/// Owns one HTTP client, reused across the URLs of a batch for connection
/// pooling. Nothing else carries over from one URL to the next.
///
/// # Example
///
/// ```no_run
/// use rs_seo_extractor::{Extractor, Field, Options};
///
/// let extractor = Extractor::new(Options::default())?;
/// let rows = extractor.extract_batch(
///     &["example.com", "https://www.rust-lang.org/"],
///     &[Field::H1, Field::MetaTitle],
/// );
/// assert_eq!(rows.len(), 2);
/// # Ok::<(), reqwest::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    fetcher: Fetcher,
    options: Options,
}

impl Extractor {
    /// Create an extractor; fails only if the HTTP client cannot be built.
    pub fn new(options: Options) -> reqwest::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(&options)?,
            options,
        })
    }

    /// Options this extractor was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Resolve `raw_url` into its request context.
    #[must_use]
    pub fn normalize(&self, raw_url: &str) -> RequestContext {
        url_utils::normalize(raw_url, &self.options)
    }

    /// Fetch and parse one page into a full record.
    pub fn fetch_record(&self, raw_url: &str) -> Result<ExtractionRecord> {
        let ctx = self.normalize(raw_url);
        let target = ctx.target()?;

        let page = self.fetcher.fetch(&ctx, &target)?;

        let url = if page.final_url == target {
            ctx.input.clone()
        } else {
            page.final_url.to_string()
        };

        // Parse errors are reported against the caller's input
        extract_document_bytes(&page.body, page.content_type.as_deref(), &url).map_err(|err| {
            match err {
                Error::Parse { reason, .. } => Error::Parse {
                    url: ctx.input.clone(),
                    reason,
                },
                other => other,
            }
        })
    }

    /// Extract `fields` from one URL.
    ///
    /// On failure, every requested field holds the error sentinel and the
    /// row's URL is the raw input.
    #[must_use]
    pub fn extract(&self, raw_url: &str, fields: &[Field]) -> ResultRow {
        match self.fetch_record(raw_url) {
            Ok(record) => record.project(fields),
            Err(err) => ResultRow::failed(raw_url, fields, err),
        }
    }

    /// Extract `fields` from each URL, sequentially.
    ///
    /// Returns exactly `urls.len()` rows, in input order.
    #[must_use]
    pub fn extract_batch<S: AsRef<str>>(&self, urls: &[S], fields: &[Field]) -> Vec<ResultRow> {
        self.extract_batch_with(urls, fields, |_, _| {})
    }

    /// Like [`extract_batch`](Self::extract_batch), calling `on_row` with the
    /// index of each row as soon as it is done.
    pub fn extract_batch_with<S, F>(&self, urls: &[S], fields: &[Field], mut on_row: F) -> Vec<ResultRow>
    where
        S: AsRef<str>,
        F: FnMut(usize, &ResultRow),
    {
        let total = urls.len();
        let mut rows = Vec::with_capacity(total);

        for (index, raw_url) in urls.iter().enumerate() {
            let raw_url = raw_url.as_ref();
            let row = self.extract(raw_url, fields);

            if let Some(err) = &row.error {
                tracing::warn!(
                    url = raw_url,
                    kind = %err.kind(),
                    position = index + 1,
                    total,
                    "extraction failed: {err}"
                );
            } else {
                tracing::info!(url = %row.url, position = index + 1, total, "extracted");
            }

            on_row(index, &row);
            rows.push(row);
        }

        rows
    }
}

/// Whether a `Content-Type` value can be parsed as HTML.
///
/// HTML, XHTML/XML and any `text/*` type are accepted; an empty or missing
/// type is too.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence.is_empty()
        || essence.starts_with("text/")
        || essence.contains("html")
        || essence.ends_with("/xml")
        || essence.ends_with("+xml")
}

/// Extract every field from an HTML string, without network access.
///
/// ```
/// use rs_seo_extractor::extract_document;
///
/// let record = extract_document("<title>Hi</title><h1>Hello</h1>", "https://example.com");
/// assert_eq!(record.meta_title, "Hi");
/// assert_eq!(record.meta_title_length(), 2);
/// assert_eq!(record.h1, "Hello");
/// ```
#[must_use]
pub fn extract_document(html: &str, url: &str) -> ExtractionRecord {
    let doc = crate::dom::parse(html);
    metadata::extract_record(&doc, url)
}

/// Extract every field from raw response bytes.
///
/// The body is decoded per its `Content-Type` charset or in-document
/// declaration. Fails with [`Error::Parse`] when the content type is not
/// HTML-like.
pub fn extract_document_bytes(
    body: &[u8],
    content_type: Option<&str>,
    url: &str,
) -> Result<ExtractionRecord> {
    if let Some(content_type) = content_type {
        if !is_html_content_type(content_type) {
            return Err(Error::Parse {
                url: url.to_string(),
                reason: format!("unsupported content type `{content_type}`"),
            });
        }
    }

    let html = encoding::transcode_to_utf8(body, content_type);
    Ok(extract_document(&html, url))
}

/// Extract `fields` from one URL with default options.
///
/// Builds a fresh client per call; use [`Extractor`] for batches.
#[must_use]
pub fn extract(raw_url: &str, fields: &[Field]) -> ResultRow {
    match Extractor::new(Options::default()) {
        Ok(extractor) => extractor.extract(raw_url, fields),
        Err(err) => ResultRow::failed(
            raw_url,
            fields,
            Error::Request {
                url: raw_url.to_string(),
                cause: crate::error::RequestFailure::from(err),
            },
        ),
    }
}

/// Extract `fields` from each URL with default options.
///
/// Returns exactly `urls.len()` rows, in input order.
#[must_use]
pub fn extract_batch<S: AsRef<str>>(urls: &[S], fields: &[Field]) -> Vec<ResultRow> {
    match Extractor::new(Options::default()) {
        Ok(extractor) => extractor.extract_batch(urls, fields),
        Err(err) => {
            let cause = crate::error::RequestFailure::from(err);
            urls.iter()
                .map(|raw_url| {
                    let raw_url = raw_url.as_ref();
                    ResultRow::failed(
                        raw_url,
                        fields,
                        Error::Request {
                            url: raw_url.to_string(),
                            cause: cause.clone(),
                        },
                    )
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fields::FieldValue;

    #[test]
    fn content_type_filter() {
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("application/xhtml+xml"));
        assert!(is_html_content_type("TEXT/PLAIN"));
        assert!(is_html_content_type(""));
        assert!(!is_html_content_type("application/pdf"));
        assert!(!is_html_content_type("image/png"));
        assert!(!is_html_content_type("application/json"));
    }

    #[test]
    fn non_html_bytes_are_parse_errors() {
        let err = extract_document_bytes(b"%PDF-1.4", Some("application/pdf"), "u").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn bytes_without_content_type_are_parsed() {
        let record = extract_document_bytes(b"<h1>Hi</h1>", None, "u").unwrap();
        assert_eq!(record.h1, "Hi");
    }

    #[test]
    fn schema_error_row_without_network() {
        let extractor = Extractor::new(Options::default()).unwrap();
        let row = extractor.extract("ftp://example.com/file", &[Field::H1, Field::Canonical]);
        assert!(row.is_error());
        assert_eq!(row.url, "ftp://example.com/file");
        assert_eq!(row.get(Field::H1), Some(&FieldValue::Error(ErrorKind::SchemaError)));
        assert_eq!(row.get(Field::Canonical), Some(&FieldValue::Error(ErrorKind::SchemaError)));
    }

    #[test]
    fn batch_keeps_length_and_order_on_failures() {
        let extractor = Extractor::new(Options::default()).unwrap();
        let urls = ["https://", "ftp://a", "mailto:x"];
        let mut seen = Vec::new();
        let rows = extractor.extract_batch_with(&urls, &[Field::H1], |i, row| {
            seen.push((i, row.url.clone()));
        });
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.url.as_str()).collect::<Vec<_>>(),
            vec!["https://", "ftp://a", "mailto:x"]
        );
        assert!(rows.iter().all(ResultRow::is_error));
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], (2, "mailto:x".to_string()));
    }
}
