//! Caller-side input handling.

/// Split pasted text into URLs: one per line, trimmed, blank lines dropped.
///
/// Order and duplicates are kept; each line becomes one row.
///
/// ```
/// use rs_seo_extractor::input::parse_url_list;
///
/// let urls = parse_url_list("  example.com/a \n\n\texample.com/b\r\n");
/// assert_eq!(urls, vec!["example.com/a", "example.com/b"]);
/// ```
#[must_use]
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
