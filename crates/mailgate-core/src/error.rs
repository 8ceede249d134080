//! Error types for mailgate-core.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mailgate_types::{ConfigError, GatewayError};
use thiserror::Error;

/// Errors raised while assembling the gateway (never at request time).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Configuration failed startup validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The outbound HTTP client could not be built (TLS backend, etc.).
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for gateway assembly.
pub type CoreResult<T> = Result<T, CoreError>;

/// HTTP response wrapper for [`GatewayError`].
///
/// Renders the error envelope with the status the error maps to.
#[derive(Debug)]
pub struct GatewayRejection(pub GatewayError);

impl From<GatewayError> for GatewayRejection {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for GatewayRejection {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.envelope())).into_response()
    }
}
