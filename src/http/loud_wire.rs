//! Wire-level debugging via the `LOUD_WIRE` environment variable.
//!
//! When `LOUD_WIRE` is set to any value, or a client is built with
//! `loud_wire(true)`, the raw request line, query parameters, response status
//! and response body of every call are printed to stderr with colors.
//!
//! ```bash
//! LOUD_WIRE=1 cargo run --example scoring_tour
//! ```
//!
//! - Green `>>>` for outgoing requests
//! - Red `<<<` for incoming responses
//! - Timestamps and request IDs for correlation

use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Cached check for whether LOUD_WIRE is enabled
static ENABLED: OnceLock<bool> = OnceLock::new();

/// Maximum characters of a non-JSON body to print.
const RAW_BODY_LIMIT: usize = 1000;

/// Check if the `LOUD_WIRE` environment variable is set.
///
/// The result is cached after the first check, so `LOUD_WIRE` must be set
/// before the first request is made.
#[must_use]
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

/// Get the next request ID for correlation.
#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Log prefix with timestamp and request ID.
fn prefix(request_id: usize) -> String {
    format!(
        "{} {} {}",
        "[LOUD_WIRE]".bold(),
        timestamp().dimmed(),
        format!("[REQ#{request_id}]").cyan()
    )
}

/// Formats query parameters as a JSON object for display.
fn params_as_json(params: &[(&str, String)]) -> serde_json::Value {
    params
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(value.as_str())))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

fn print_json(prefix: &str, value: &serde_json::Value) {
    let rendered = colored_json::to_colored_json_auto(value)
        .ok()
        .or_else(|| serde_json::to_string_pretty(value).ok());
    if let Some(rendered) = rendered {
        for line in rendered.lines() {
            eprintln!("{prefix} {line}");
        }
    }
}

/// Log an outgoing HTTP request with its query parameters.
pub fn log_request(request_id: usize, method: &str, url: &str, params: &[(&str, String)]) {
    let prefix = prefix(request_id);
    let direction = ">>>".green().bold();

    eprintln!("{prefix} {direction} {method} {url}");
    if !params.is_empty() {
        eprintln!("{prefix} {}:", "Params".green());
        print_json(&prefix, &params_as_json(params));
    }
}

/// Log an incoming HTTP response status.
pub fn log_response_status(request_id: usize, status: u16) {
    let prefix = prefix(request_id);
    let direction = "<<<".red().bold();
    let status_text = if status < 300 {
        format!("{status} OK").green()
    } else {
        format!("{status} ERROR").red()
    };

    eprintln!("{prefix} {direction} {status_text}");
}

/// Log an incoming HTTP response body.
pub fn log_response_body(request_id: usize, body: &str) {
    let prefix = prefix(request_id);

    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
        eprintln!("{prefix} {}:", "Response".red());
        print_json(&prefix, &parsed);
    } else {
        eprintln!(
            "{prefix} {}: {}",
            "Response".red(),
            truncate_raw(body, RAW_BODY_LIMIT)
        );
    }
}

/// Log a request that never produced a response.
pub fn log_transport_error(request_id: usize, error: &reqwest::Error) {
    let prefix = prefix(request_id);
    eprintln!("{prefix} {} {}", "<<< FAILED".red().bold(), error);
}

fn truncate_raw(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
