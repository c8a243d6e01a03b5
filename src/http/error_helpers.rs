//! Error handling utilities for HTTP responses and error context formatting.

use crate::errors::McpError;
use reqwest::StatusCode;

/// Maximum characters to include from error body in context messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Returns `true` for statuses that fail a request: 4xx and 5xx.
///
/// 1xx and 3xx responses that reach the caller (a 300, a 304, or a redirect
/// without `Location`) are not errors; their body is decoded like a 2xx.
pub fn is_error_status(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

/// Passes the response through unless its status is 4xx or 5xx.
///
/// # Errors
///
/// Returns [`McpError::Api`] with the status code and body preview on a 4xx
/// or 5xx status.
pub async fn check_response(
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, McpError> {
    if !is_error_status(response.status()) {
        Ok(response)
    } else {
        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("Failed to read error body: {e}"));
        Err(status_error(url, status_code, &body))
    }
}

/// Blocking counterpart of [`check_response`].
///
/// # Errors
///
/// Returns [`McpError::Api`] with the status code and body preview on a 4xx
/// or 5xx status.
#[cfg(feature = "blocking")]
pub fn check_response_blocking(
    url: &str,
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, McpError> {
    if !is_error_status(response.status()) {
        Ok(response)
    } else {
        let status_code = response.status().as_u16();
        let body = response
            .text()
            .unwrap_or_else(|e| format!("Failed to read error body: {e}"));
        Err(status_error(url, status_code, &body))
    }
}

/// Builds the status variant of [`McpError`] with a truncated body preview.
pub fn status_error(url: &str, status_code: u16, body: &str) -> McpError {
    McpError::Api {
        url: url.to_string(),
        status_code,
        message: truncate_for_context(body, ERROR_BODY_PREVIEW_LENGTH),
    }
}

/// Wraps a transport error together with the URL it occurred on.
pub fn transport_error(url: &str, source: reqwest::Error) -> McpError {
    McpError::Http {
        url: url.to_string(),
        source,
    }
}

/// Truncates a string to specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte UTF-8 characters.
fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_context_short_string() {
        assert_eq!(truncate_for_context("Short", 100), "Short");
    }

    #[test]
    fn test_truncate_for_context_long_string() {
        let long_str = "a".repeat(300);
        let result = truncate_for_context(&long_str, 200);
        assert_eq!(result.len(), 203);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_for_context_utf8_boundary() {
        // 198 + 4 = 202 bytes total; the emoji must not be split
        let emoji_str = "x".repeat(198) + "🎉";
        let result = truncate_for_context(&emoji_str, 200);
        assert_eq!(result.len(), 201);
        assert!(!result.contains("🎉"));
    }

    #[test]
    fn test_is_error_status_boundaries() {
        for code in [200, 201, 204, 299, 300, 301, 304, 399] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(!is_error_status(status), "{code} should pass through");
        }
        for code in [400, 404, 429, 499, 500, 503, 599] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(is_error_status(status), "{code} should fail the request");
        }
    }

    #[test]
    fn test_status_error_carries_url_and_status() {
        let error = status_error(
            "http://localhost:8000/mcp/nft/valuation",
            503,
            "Service Unavailable",
        );
        match error {
            McpError::Api {
                url,
                status_code,
                message,
            } => {
                assert_eq!(url, "http://localhost:8000/mcp/nft/valuation");
                assert_eq!(status_code, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_error_truncates_long_bodies() {
        let body = "e".repeat(1000);
        let error = status_error("http://x/mcp/dao/vote", 500, &body);
        let McpError::Api { message, .. } = error else {
            panic!("Expected Api error");
        };
        assert_eq!(message.len(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
