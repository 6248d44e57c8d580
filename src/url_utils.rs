//! URL normalization.
//!
//! Turns raw user input into a request-ready absolute URL plus the headers
//! sent with it. The `Accept-Language` header follows a locale segment at the
//! start of the path (`/de-DE/...`) when there is one.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

/// `Accept-Language` sent when the path carries no locale.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// `Accept` sent with every request.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Header name for the browser identification string.
pub const USER_AGENT: &str = "User-Agent";

/// Header name for the locale preference.
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Header name for accepted media types.
pub const ACCEPT: &str = "Accept";

/// Any `scheme://` prefix.
#[allow(clippy::expect_used)]
static EXPLICIT_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("valid regex"));

/// Two letters, hyphen, two letters.
#[allow(clippy::expect_used)]
static LOCALE_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}-[A-Za-z]{2}$").expect("valid regex"));

/// Language/region pair taken from a path segment such as `en-us`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Path segment exactly as it appeared in the URL.
    pub segment: String,
    /// Lowercased language subtag.
    pub language: String,
    /// Uppercased region subtag.
    pub region: String,
}

impl Locale {
    /// Parse a path segment of shape `xx-XX`.
    ///
    /// ```
    /// use rs_seo_extractor::url_utils::Locale;
    ///
    /// let locale = Locale::from_segment("en-us").unwrap();
    /// assert_eq!(locale.accept_language(), "en-US,en;q=0.9");
    /// assert!(Locale::from_segment("blog").is_none());
    /// ```
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        if !LOCALE_SEGMENT_RE.is_match(segment) {
            return None;
        }
        let (language, region) = segment.split_once('-')?;
        Some(Self {
            segment: segment.to_string(),
            language: language.to_ascii_lowercase(),
            region: region.to_ascii_uppercase(),
        })
    }

    /// `Accept-Language` value: `<lang>-<REGION>,<lang>;q=0.9`.
    #[must_use]
    pub fn accept_language(&self) -> String {
        format!("{}-{},{};q=0.9", self.language, self.region, self.language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.language, self.region)
    }
}

/// Per-URL request description produced by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The caller's input, untouched.
    pub input: String,
    /// Absolute URL to request.
    pub resolved_url: String,
    /// Headers for the request; always has `User-Agent` and `Accept-Language`.
    pub headers: BTreeMap<String, String>,
    /// Locale detected from the first path segment.
    pub locale: Option<Locale>,
}

impl RequestContext {
    /// Header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `<scheme>://<host[:port]>/<locale>/`, requested before the page when a
    /// locale was detected.
    #[must_use]
    pub fn warmup_url(&self) -> Option<String> {
        let locale = self.locale.as_ref()?;
        let url = Url::parse(&self.resolved_url).ok()?;
        url.host_str()?;
        Some(format!(
            "{}/{}/",
            url.origin().ascii_serialization(),
            locale.segment
        ))
    }

    /// Parse and validate the resolved URL.
    ///
    /// Fails with [`Error::Schema`] when the URL does not parse or is not an
    /// http(s) URL with a host.
    pub fn target(&self) -> Result<Url> {
        let schema_error = |reason: String| Error::Schema {
            url: self.input.clone(),
            reason,
        };

        let url = Url::parse(&self.resolved_url).map_err(|e| schema_error(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(schema_error(format!("unsupported scheme `{}`", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(schema_error("missing host".to_string()));
        }
        Ok(url)
    }
}

/// Whether `s` already names a scheme (`https://`, `ftp://`, ...).
#[must_use]
pub fn has_explicit_scheme(s: &str) -> bool {
    EXPLICIT_SCHEME_RE.is_match(s)
}

/// First non-empty path segment of an absolute URL.
#[must_use]
pub fn first_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolve raw input into a [`RequestContext`].
///
/// Input without any scheme gets `options.default_scheme`; input with a
/// non-http scheme is kept as-is so that validation can reject it. Never
/// fails: malformed input just yields no locale, and is rejected later by
/// [`RequestContext::target`].
///
/// # Example
///
/// ```
/// use rs_seo_extractor::{normalize, Options};
///
/// let ctx = normalize("example.com/de-DE/page", &Options::default());
/// assert_eq!(ctx.resolved_url, "https://example.com/de-DE/page");
/// assert_eq!(ctx.header("accept-language"), Some("de-DE,de;q=0.9"));
/// ```
#[must_use]
pub fn normalize(raw_url: &str, options: &Options) -> RequestContext {
    let trimmed = raw_url.trim();
    let resolved_url = if has_explicit_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{trimmed}", options.default_scheme.prefix())
    };

    let locale = first_path_segment(&resolved_url).and_then(|seg| Locale::from_segment(&seg));
    let accept_language = locale
        .as_ref()
        .map_or_else(|| DEFAULT_ACCEPT_LANGUAGE.to_string(), Locale::accept_language);

    let headers = BTreeMap::from([
        (USER_AGENT.to_string(), options.user_agent.clone()),
        (ACCEPT_LANGUAGE.to_string(), accept_language),
        (ACCEPT.to_string(), ACCEPT_HTML.to_string()),
    ]);

    RequestContext {
        input: raw_url.to_string(),
        resolved_url,
        headers,
        locale,
    }
}
