//! HTTP fetching.
//!
//! One blocking GET per page over an explicitly owned, pooled client. The
//! pooled client holds no cookies or default headers; everything sent with a
//! request comes from that URL's [`RequestContext`]. A URL with a locale
//! segment gets its own short-lived session whose cookie jar is shared by the
//! warm-up and the page request, and dropped afterwards.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder, RequestBuilder};
use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::{Error, RequestFailure, Result};
use crate::options::Options;
use crate::url_utils::RequestContext;

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after following redirects.
    pub final_url: Url,
    /// Raw `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

/// Blocking page fetcher.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
    warmup_timeout: Duration,
    max_redirects: usize,
    locale_warmup: bool,
}

impl Fetcher {
    /// Build a fetcher from `options`.
    pub fn new(options: &Options) -> reqwest::Result<Self> {
        Ok(Self {
            client: client_builder(options.timeout, options.max_redirects).build()?,
            timeout: options.timeout,
            warmup_timeout: options.warmup_timeout,
            max_redirects: options.max_redirects,
            locale_warmup: options.locale_warmup,
        })
    }

    /// Client with a fresh cookie jar, for one locale URL.
    fn session(&self) -> reqwest::Result<Client> {
        client_builder(self.timeout, self.max_redirects)
            .cookie_provider(Arc::new(Jar::default()))
            .build()
    }

    /// GET `url` on `client` with the context's headers.
    fn request(client: &Client, url: &str, ctx: &RequestContext) -> RequestBuilder {
        ctx.headers
            .iter()
            .fold(client.get(url), |req, (name, value)| {
                req.header(name.as_str(), value.as_str())
            })
    }

    /// Request the locale root (`<origin>/<locale>/`) on `session` so the
    /// origin can set its locale cookies, including on redirect hops.
    ///
    /// Any failure is logged and ignored.
    fn warm_up(&self, session: &Client, ctx: &RequestContext, warmup_url: &str) {
        tracing::debug!(url = %warmup_url, "locale warm-up request");

        match Self::request(session, warmup_url, ctx)
            .timeout(self.warmup_timeout)
            .send()
        {
            Ok(response) => {
                tracing::debug!(
                    url = %warmup_url,
                    status = response.status().as_u16(),
                    "warm-up finished"
                );
            }
            Err(err) => {
                tracing::debug!(url = %warmup_url, error = %err, "warm-up request failed, ignoring");
            }
        }
    }

    /// Fetch `target`, following redirects.
    ///
    /// When the context has a locale and warm-up is enabled, the warm-up and
    /// the page request share one cookie jar. Transport failures and non-2xx
    /// statuses become [`Error::Request`].
    pub fn fetch(&self, ctx: &RequestContext, target: &Url) -> Result<FetchedPage> {
        let request_error = |cause: RequestFailure| Error::Request {
            url: ctx.input.clone(),
            cause,
        };

        let warmup_url = if self.locale_warmup { ctx.warmup_url() } else { None };
        let session;
        let client = match warmup_url {
            Some(warmup_url) => {
                session = self
                    .session()
                    .map_err(|e| request_error(RequestFailure::from(e)))?;
                self.warm_up(&session, ctx, &warmup_url);
                &session
            }
            None => &self.client,
        };

        tracing::debug!(url = %target, "fetching page");
        let response = Self::request(client, target.as_str(), ctx)
            .timeout(self.timeout)
            .send()
            .map_err(|e| request_error(RequestFailure::from(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(request_error(RequestFailure::Status(status.as_u16())));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .map_err(|_| request_error(RequestFailure::Body))?
            .to_vec();

        tracing::debug!(
            url = %final_url,
            status = status.as_u16(),
            bytes = body.len(),
            "page fetched"
        );

        Ok(FetchedPage {
            final_url,
            content_type,
            body,
        })
    }
}

fn client_builder(timeout: Duration, max_redirects: usize) -> ClientBuilder {
    Client::builder()
        .timeout(timeout)
        .redirect(Policy::limited(max_redirects))
        .gzip(true)
        .brotli(true)
}
