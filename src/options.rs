//! Configuration options for fetching and extraction.
//!
//! The `Options` struct controls request behavior: timeouts, the headers sent
//! to the origin, and how schema-less input is resolved.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Browser User-Agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

/// Scheme prepended to input that has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    /// `https://` (default)
    #[default]
    Https,
    /// `http://`
    Http,
}

impl Scheme {
    /// Prefix including the `://` separator.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Https => "https://",
            Self::Http => "http://",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Https => f.write_str("https"),
            Self::Http => f.write_str("http"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "https" => Ok(Self::Https),
            "http" => Ok(Self::Http),
            other => Err(format!("unsupported scheme `{other}` (expected http or https)")),
        }
    }
}

/// Configuration options for fetching and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_seo_extractor::{Options, Scheme};
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Duration::from_secs(30),
///     default_scheme: Scheme::Http,
///     ..Options::default()
/// };
/// assert!(options.locale_warmup);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Timeout for the main page request.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,

    /// Timeout for the locale warm-up request.
    ///
    /// Default: 5 seconds
    pub warmup_timeout: Duration,

    /// User-Agent header value.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Scheme prepended to input without `http://` or `https://`.
    ///
    /// Default: [`Scheme::Https`]
    pub default_scheme: Scheme,

    /// Request `<scheme>://<host>/<locale>/` before the page itself when the
    /// URL path starts with a locale segment.
    ///
    /// Default: `true`
    pub locale_warmup: bool,

    /// Maximum number of redirects followed per request.
    ///
    /// Default: `10`
    pub max_redirects: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            warmup_timeout: Duration::from_secs(5),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_scheme: Scheme::Https,
            locale_warmup: true,
            max_redirects: 10,
        }
    }
}
