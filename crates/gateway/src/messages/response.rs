//! Outbound response envelope and its builders

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Reason sent with every `not-ready` response
pub const NOT_READY_REASON: &str = "railway data is not ready";

/// Reason sent when a dimension filter selects nothing
pub const UNKNOWN_DIMENSION: &str = "unknown dimension";

/// Reason sent when no selected dimension has the requested route
pub const UNKNOWN_ROUTE: &str = "unknown route";

/// Longest internal error detail forwarded to callers
const MAX_DETAIL_LEN: usize = 200;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseStatus {
    /// Request served
    Ok,
    /// Data source not initialized yet, retry later
    NotReady,
    /// Malformed request or reference to something that does not exist
    InvalidPayload,
    /// Unexpected failure inside the provider
    Error,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotReady => "not-ready",
            Self::InvalidPayload => "invalid-payload",
            Self::Error => "error",
        }
    }
}

/// Outbound response
///
/// `request_id` is always copied from the message that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub request_id: String,
    pub status: ResponseStatus,
    pub payload: Value,
}

impl Response {
    /// Create a successful response
    pub fn ok(request_id: impl Into<String>, payload: Value) -> Self {
        Self {
            request_id: request_id.into(),
            status: ResponseStatus::Ok,
            payload,
        }
    }

    /// Create a response for a data source that is still initializing
    pub fn not_ready(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            status: ResponseStatus::NotReady,
            payload: json!({ "reason": NOT_READY_REASON }),
        }
    }

    /// Create a rejection for a malformed or unresolvable request
    pub fn invalid_payload(request_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            status: ResponseStatus::InvalidPayload,
            payload: json!({ "reason": reason.into() }),
        }
    }

    /// Create an error response
    ///
    /// Only the first line of `detail` is kept, truncated to a bounded length,
    /// so stack traces and multi-line dumps never reach the caller.
    pub fn internal_error(request_id: impl Into<String>, detail: &str) -> Self {
        Self {
            request_id: request_id.into(),
            status: ResponseStatus::Error,
            payload: json!({ "reason": sanitize_detail(detail) }),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    /// Human-readable reason carried by failure responses
    pub fn reason(&self) -> Option<&str> {
        self.payload.get("reason").and_then(Value::as_str)
    }
}

fn sanitize_detail(detail: &str) -> String {
    let line = detail.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return "internal error".to_string();
    }
    match line.char_indices().nth(MAX_DETAIL_LEN) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}
