//! The shared GET-and-decode operation behind every endpoint method.

use crate::errors::McpError;
use crate::http::common::{Endpoint, construct_endpoint_url, construct_request_url};
use crate::http::error_helpers::{check_response, transport_error};
use crate::http::loud_wire;
use serde_json::Value;

/// One request/response cycle against an endpoint.
///
/// Holds the URLs and the optional wire-debugging request ID so the async and
/// blocking transports log and report errors identically.
struct Exchange<'e> {
    endpoint: &'e Endpoint<'e>,
    /// `{base_url}{path}`, reported in errors
    url: String,
    /// `{base_url}{path}?{query}`, the URL actually requested
    request_url: String,
    wire_id: Option<usize>,
}

impl<'e> Exchange<'e> {
    fn start(base_url: &str, endpoint: &'e Endpoint<'e>, force_wire: bool) -> Self {
        let url = construct_endpoint_url(base_url, endpoint);
        let request_url = construct_request_url(base_url, endpoint);
        let wire_id = (force_wire || loud_wire::is_enabled()).then(loud_wire::next_request_id);

        tracing::debug!(endpoint = endpoint.name(), url = %url, "Sending GET request");
        if let Some(id) = wire_id {
            loud_wire::log_request(id, "GET", &request_url, &endpoint.query_params());
        }

        Self {
            endpoint,
            url,
            request_url,
            wire_id,
        }
    }

    fn transport_failed(&self, error: reqwest::Error) -> McpError {
        if let Some(id) = self.wire_id {
            loud_wire::log_transport_error(id, &error);
        }
        tracing::warn!(endpoint = self.endpoint.name(), url = %self.url, "Request failed: {error}");
        transport_error(&self.url, error)
    }

    fn received(&self, status: reqwest::StatusCode) {
        if let Some(id) = self.wire_id {
            loud_wire::log_response_status(id, status.as_u16());
        }
    }

    fn rejected(&self, error: &McpError) {
        if let (Some(id), McpError::Api { message, .. }) = (self.wire_id, error) {
            loud_wire::log_response_body(id, message);
        }
        tracing::warn!(endpoint = self.endpoint.name(), url = %self.url, "Server returned error: {error}");
    }

    fn finish(&self, body: &str) -> Result<Value, McpError> {
        if let Some(id) = self.wire_id {
            loud_wire::log_response_body(id, body);
        }
        let value: Value = serde_json::from_str(body)?;
        tracing::debug!(endpoint = self.endpoint.name(), "Request completed");
        Ok(value)
    }
}

/// Issues a GET for `endpoint` and returns the decoded JSON body.
///
/// # Errors
///
/// - [`McpError::Http`] if the request could not be sent or the body could not be read
/// - [`McpError::Api`] if the server answered with a 4xx or 5xx status
/// - [`McpError::Json`] if the body is not valid JSON
pub async fn get_json(
    http_client: &reqwest::Client,
    base_url: &str,
    endpoint: &Endpoint<'_>,
    force_wire: bool,
) -> Result<Value, McpError> {
    let exchange = Exchange::start(base_url, endpoint, force_wire);

    let response = http_client
        .get(&exchange.request_url)
        .send()
        .await
        .map_err(|e| exchange.transport_failed(e))?;
    exchange.received(response.status());

    let response = check_response(&exchange.url, response)
        .await
        .inspect_err(|e| exchange.rejected(e))?;
    let body = response
        .text()
        .await
        .map_err(|e| exchange.transport_failed(e))?;

    exchange.finish(&body)
}

/// Blocking counterpart of [`get_json`].
///
/// # Errors
///
/// Same as [`get_json`].
#[cfg(feature = "blocking")]
pub fn get_json_blocking(
    http_client: &reqwest::blocking::Client,
    base_url: &str,
    endpoint: &Endpoint<'_>,
    force_wire: bool,
) -> Result<Value, McpError> {
    use crate::http::error_helpers::check_response_blocking;

    let exchange = Exchange::start(base_url, endpoint, force_wire);

    let response = http_client
        .get(&exchange.request_url)
        .send()
        .map_err(|e| exchange.transport_failed(e))?;
    exchange.received(response.status());

    let response = check_response_blocking(&exchange.url, response)
        .inspect_err(|e| exchange.rejected(e))?;
    let body = response.text().map_err(|e| exchange.transport_failed(e))?;

    exchange.finish(&body)
}
