//! Error types for rs-seo-extractor.
//!
//! Errors are classified per URL into three kinds. None of them ever aborts a
//! batch: the extractor turns each one into sentinel values on that URL's row.

use std::fmt;

/// Category of a per-URL failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input had no usable scheme/host after normalization.
    SchemaError,
    /// Network failure, DNS failure, timeout or non-2xx status.
    RequestError,
    /// The response could not be treated as an HTML document.
    ParseError,
}

impl ErrorKind {
    /// Category name, as used in logs and sentinels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SchemaError => "SchemaError",
            Self::RequestError => "RequestError",
            Self::ParseError => "ParseError",
        }
    }

    /// Value written into every requested field of a failed row.
    ///
    /// Never empty, so it can't be confused with an absent tag.
    #[must_use]
    pub const fn sentinel(self) -> &'static str {
        match self {
            Self::SchemaError => "ERROR: SchemaError",
            Self::RequestError => "ERROR: RequestError",
            Self::ParseError => "ERROR: ParseError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underlying cause of a [`Error::Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The request did not complete within the configured timeout.
    Timeout,
    /// Connection refused, DNS failure, TLS failure.
    Connect,
    /// Redirect limit exceeded or redirect loop.
    Redirect,
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The response body could not be read.
    Body,
    /// Anything else reported by the HTTP client.
    Other(String),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timeout"),
            Self::Connect => f.write_str("connection failed"),
            Self::Redirect => f.write_str("too many redirects"),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Body => f.write_str("body read failed"),
            Self::Other(msg) => f.write_str(msg),
        }
    }
}

impl From<reqwest::Error> for RequestFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else if err.is_redirect() {
            Self::Redirect
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_body() || err.is_decode() {
            Self::Body
        } else {
            Self::Other(err.to_string())
        }
    }
}

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No usable scheme or host could be derived from the input.
    #[error("invalid URL `{url}`: {reason}")]
    Schema { url: String, reason: String },

    /// The HTTP request failed or returned a non-2xx status.
    #[error("request to `{url}` failed: {cause}")]
    Request { url: String, cause: RequestFailure },

    /// The response could not be parsed as HTML.
    #[error("could not parse `{url}` as HTML: {reason}")]
    Parse { url: String, reason: String },
}

impl Error {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Schema { .. } => ErrorKind::SchemaError,
            Self::Request { .. } => ErrorKind::RequestError,
            Self::Parse { .. } => ErrorKind::ParseError,
        }
    }

    /// The URL the error refers to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Schema { url, .. } | Self::Request { url, .. } | Self::Parse { url, .. } => url,
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
