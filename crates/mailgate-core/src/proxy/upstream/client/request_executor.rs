use axum::body::Bytes;
use reqwest::header;
use serde::de::IgnoredAny;
use std::error::Error as _;

use mailgate_types::GatewayError;

pub fn build_url(base_url: &str, upstream_path: &str) -> String {
    format!("{}{}", base_url, upstream_path)
}

/// Headers attached to every upstream call.
pub fn build_headers(credential: &str) -> Result<header::HeaderMap, GatewayError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));

    let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", credential)).map_err(|_| {
        GatewayError::Internal {
            message: "credential contains characters not allowed in a header".to_string(),
        }
    })?;
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);

    Ok(headers)
}

/// Human-readable failure text including every `source()` in the chain.
pub fn describe_transport_error(e: &reqwest::Error) -> String {
    let mut text = if e.is_timeout() {
        format!("request timed out: {}", e)
    } else {
        e.to_string()
    };

    let mut source = e.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }

    text
}

/// Check that an upstream body is JSON and hand back the original bytes.
///
/// The body is never re-serialized, so key order and number precision survive.
/// Empty bodies become JSON `null`.
pub fn validate_body(bytes: Bytes) -> Result<Bytes, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Bytes::from_static(b"null"));
    }
    serde_json::from_slice::<IgnoredAny>(&bytes)?;
    Ok(bytes)
}
