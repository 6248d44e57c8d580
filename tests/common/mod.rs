//! Shared helpers for HTTP fixture tests.
#![allow(dead_code)]

use std::net::TcpListener;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Page with every tracked tag present.
pub const FULL_PAGE: &str = r#"<h1>Hello</h1><h2>A</h2><h2>B</h2><title>T</title><meta name="description" content="D"><link rel="canonical" href="https://x.com/c"><meta name="robots" content="noindex">"#;

/// Serve `html` at `url_path` with a UTF-8 HTML content type.
pub async fn mount_html(server: &MockServer, url_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Serve raw bytes at `url_path` with the given content type.
pub async fn mount_bytes(server: &MockServer, url_path: &str, body: &[u8], content_type: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body.to_vec(), content_type),
        )
        .mount(server)
        .await;
}

/// Answer `url_path` with `status`.
pub async fn mount_status(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// URL on a local port nothing listens on, so connecting is refused.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Run blocking extraction code off the async test runtime.
pub async fn run_blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
