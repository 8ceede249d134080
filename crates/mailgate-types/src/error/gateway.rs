//! Request forwarding errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ErrorEnvelope;

/// Errors synthesized by the gateway itself.
///
/// Upstream application errors (any status the upstream returns) are never
/// represented here; they are relayed verbatim.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// Per-request policy: the inbound request carried no credential
    #[error("API key required")]
    MissingApiKey,

    /// A path parameter cannot be forwarded (dot segment, invalid UTF-8)
    #[error("Invalid path parameter: {message}")]
    InvalidPathParameter { message: String },

    /// Network failure, timeout, DNS failure or body read failure
    #[error("Error retrieving data from {path}: {message}")]
    UpstreamTransport { path: String, message: String },

    /// Upstream answered with a body that is not JSON
    #[error("Malformed response from {path}: {message}")]
    MalformedResponse { path: String, message: String },

    /// Internal gateway error (bugs, unexpected states)
    #[error("Internal gateway error: {message}")]
    Internal { message: String },
}

impl GatewayError {
    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingApiKey => 401,
            Self::InvalidPathParameter { .. } => 400,
            Self::UpstreamTransport { .. } | Self::MalformedResponse { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }

    /// Whether the error was raised before any upstream call was attempted.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::InvalidPathParameter { .. })
    }

    /// Build the `{"error", "details"}` body returned to the caller.
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            Self::MissingApiKey => ErrorEnvelope::new(
                "API key required",
                "Provide your mail API key in the X-API-Key header",
            ),
            Self::InvalidPathParameter { message } => {
                ErrorEnvelope::new("Invalid path parameter", message.clone())
            },
            Self::UpstreamTransport { path, message }
            | Self::MalformedResponse { path, message } => {
                ErrorEnvelope::new(format!("Error retrieving data from {}", path), message.clone())
            },
            Self::Internal { message } => ErrorEnvelope::new("Internal gateway error", message.clone()),
        }
    }
}
