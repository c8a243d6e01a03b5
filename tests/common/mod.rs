//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use std::future::Future;
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Default timeout for tests that talk to a mock server.
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Wraps a future with a timeout, panicking if the timeout is exceeded.
///
/// The clients have no timeout of their own, so a broken mock would
/// otherwise hang the test run.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(duration, future)
        .await
        .unwrap_or_else(|_| panic!("Test timed out after {:?}", duration))
}

/// Starts a mock server answering `GET {endpoint}` with `status` and a JSON body.
#[allow(dead_code)]
pub async fn mock_json(endpoint: &str, status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Starts a mock server answering `GET {endpoint}` with `status` and a raw text body.
#[allow(dead_code)]
pub async fn mock_text(endpoint: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

/// Returns a base URL on which nothing is listening.
///
/// Binds an ephemeral port and releases it immediately, so connecting to it
/// is refused.
#[allow(dead_code)]
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Decoded query pairs of the single request a mock server received.
#[allow(dead_code)]
pub async fn received_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
