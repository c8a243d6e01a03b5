use thiserror::Error;

/// Defines errors that can occur when talking to the MCP scoring server.
///
/// `Http` and `Api` are the two faces of a failed request: the first when the
/// transport never produced a response, the second when the server answered
/// with a 4xx or 5xx status. Both carry the URL that was attempted.
///
/// # Example: Handling Request Failures
///
/// ```ignore
/// match client.get_defi_risk(0.5, 1000.0, 0.1, None).await {
///     Err(McpError::Api { status_code: 422, url, .. }) => {
///         tracing::warn!("Server rejected parameters for {url}");
///     }
///     Err(e) if e.is_request_failure() => {
///         tracing::error!("Request to {:?} failed: {e}", e.url());
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum McpError {
    /// Transport-level failure: DNS, connection refused, timeout, invalid URL,
    /// or the body could not be read.
    #[error("Error making request to {url}: {source}")]
    Http {
        /// Base URL plus endpoint path, without the query string
        url: String,
        source: reqwest::Error,
    },
    /// The server answered with a 4xx or 5xx status.
    #[error("Error making request to {url}: HTTP {status_code}: {message}")]
    Api {
        /// Base URL plus endpoint path, without the query string
        url: String,
        /// HTTP status code (e.g., 400, 404, 500)
        status_code: u16,
        /// Response body preview, truncated to 200 characters
        message: String,
    },
    /// The response body was not JSON, or a structured query value could not
    /// be encoded.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl McpError {
    /// Returns `true` for the request failure kind: transport errors and
    /// error statuses.
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(self, McpError::Http { .. } | McpError::Api { .. })
    }

    /// The URL that was attempted, if this is a request failure.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            McpError::Http { url, .. } | McpError::Api { url, .. } => Some(url.as_str()),
            McpError::Json(_) | McpError::ClientBuild(_) => None,
        }
    }

    /// The HTTP status code, if the server answered with an error status.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            McpError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns `true` if this error is likely transient and the request may succeed on retry.
    ///
    /// The client never retries on its own; this is a hint for callers that
    /// wrap calls in their own retry loop.
    ///
    /// - **Transport errors**: connection resets, refused connections, timeouts
    /// - **Rate limits (429)** and **server errors (5xx)**
    ///
    /// Client errors (4xx except 429), JSON errors and client build failures
    /// are permanent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mcp_defi_rs::McpError;
    ///
    /// let unavailable = McpError::Api {
    ///     url: "http://localhost:8000/mcp/defi/risk".to_string(),
    ///     status_code: 503,
    ///     message: "Service Unavailable".to_string(),
    /// };
    /// assert!(unavailable.is_retryable());
    ///
    /// let not_found = McpError::Api {
    ///     url: "http://localhost:8000/mcp/defi/risk".to_string(),
    ///     status_code: 404,
    ///     message: "Not Found".to_string(),
    /// };
    /// assert!(!not_found.is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            McpError::Http { source, .. } => !source.is_builder(),
            McpError::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            McpError::Json(_) | McpError::ClientBuild(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RISK_URL: &str = "http://localhost:8000/mcp/defi/risk";

    fn api_error(status_code: u16) -> McpError {
        McpError::Api {
            url: RISK_URL.to_string(),
            status_code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_api_error_display_includes_url_and_status() {
        let error = McpError::Api {
            url: RISK_URL.to_string(),
            status_code: 500,
            message: "Internal Server Error".to_string(),
        };
        let display = error.to_string();
        assert_eq!(
            display,
            "Error making request to http://localhost:8000/mcp/defi/risk: HTTP 500: Internal Server Error"
        );
    }

    #[test]
    fn test_api_error_with_empty_message() {
        let error = McpError::Api {
            url: RISK_URL.to_string(),
            status_code: 502,
            message: String::new(),
        };
        let display = error.to_string();
        assert!(display.contains("502"));
        assert!(display.contains(RISK_URL));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let error: McpError = json_err.into();
        assert!(error.to_string().contains("JSON deserialization error"));
        assert!(!error.is_request_failure());
        assert_eq!(error.url(), None);
    }

    #[test]
    fn test_client_build_display() {
        let error = McpError::ClientBuild("TLS initialization failed".to_string());
        let display = error.to_string();
        assert!(display.contains("Failed to build HTTP client"));
        assert!(display.contains("TLS initialization failed"));
    }

    #[test]
    fn test_accessors_on_api_error() {
        let error = api_error(404);
        assert!(error.is_request_failure());
        assert_eq!(error.url(), Some(RISK_URL));
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_status_code_absent_for_non_api_errors() {
        let error = McpError::ClientBuild("x".to_string());
        assert_eq!(error.status_code(), None);
        assert!(!error.is_request_failure());
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", api_error(400));
        assert!(debug.contains("Api"));
        assert!(debug.contains("400"));
        assert!(debug.contains("/mcp/defi/risk"));
    }

    // =============================================================================
    // is_retryable() Tests
    // =============================================================================

    #[test]
    fn test_is_retryable_rate_limit_and_server_errors() {
        for status_code in [429, 500, 502, 503, 504] {
            assert!(
                api_error(status_code).is_retryable(),
                "{} errors should be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_client_errors_not_retryable() {
        for status_code in [400, 401, 403, 404, 422] {
            assert!(
                !api_error(status_code).is_retryable(),
                "{} errors should NOT be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_json_error_not_retryable() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: McpError = json_err.into();
        assert!(!error.is_retryable());
    }
}
