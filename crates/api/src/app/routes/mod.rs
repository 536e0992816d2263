//! Route groups, one file per group.

use axum::{body::Bytes, http::request::Parts};

pub mod names;
pub mod numbers;

/// Log the optional free-form request body.
///
/// Valid JSON is logged in parsed form, anything else verbatim; the body
/// is never validated or acted on.
pub(crate) fn log_payload(payload: &Bytes) {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(json) => tracing::info!(payload = %json, "payload"),
        Err(_) => tracing::info!(payload = %String::from_utf8_lossy(payload), "payload"),
    }
}

/// Log the request line; last entry of every handler's sequence.
pub(crate) fn log_request(parts: &Parts) {
    tracing::info!(
        method = %parts.method,
        uri = %parts.uri,
        headers = ?parts.headers,
        "request"
    );
}
