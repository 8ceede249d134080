mod request_executor;


use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::Client;

use mailgate_types::{GatewayConfig, GatewayError};

use crate::proxy::common::build_http_client;
use crate::proxy::routes::UpstreamPath;

/// Upstream status and body, relayed to the caller without reinterpretation.
///
/// `body` holds the upstream bytes exactly as received, already checked to be
/// a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl UpstreamReply {
    /// Decode the body, for callers that need to inspect it.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            self.body,
        )
            .into_response()
    }
}

pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new UpstreamClient with the given HTTP client.
    ///
    /// `base_url` must not end with a slash; [`GatewayConfig::validate_startup`]
    /// guarantees that.
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self { http_client, base_url: base_url.into() }
    }

    /// Build the client described by a validated configuration.
    pub fn from_config(config: &GatewayConfig) -> reqwest::Result<Self> {
        let http_client = build_http_client(config.request_timeout())?;
        Ok(Self::new(http_client, config.upstream_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue exactly one GET for `path` and relay whatever comes back.
    ///
    /// Any HTTP status from upstream is `Ok`. Only failures to obtain a JSON
    /// reply at all (connect, timeout, body read, non-JSON body) are `Err`.
    pub async fn forward(
        &self,
        path: &UpstreamPath,
        credential: &str,
    ) -> Result<UpstreamReply, GatewayError> {
        let url = request_executor::build_url(&self.base_url, path.as_str());
        let headers = request_executor::build_headers(credential)?;

        let response =
            self.http_client.get(&url).headers(headers).send().await.map_err(|e| {
                let message = request_executor::describe_transport_error(&e);
                tracing::warn!("[Upstream] GET {} failed: {}", path, message);
                GatewayError::UpstreamTransport { path: path.to_string(), message }
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            let message = request_executor::describe_transport_error(&e);
            tracing::warn!("[Upstream] Reading body of {} failed: {}", path, message);
            GatewayError::UpstreamTransport { path: path.to_string(), message }
        })?;

        let body = request_executor::validate_body(bytes).map_err(|e| {
            tracing::warn!("[Upstream] {} returned non-JSON body ({}): {}", path, status, e);
            GatewayError::MalformedResponse {
                path: path.to_string(),
                message: format!("upstream returned a non-JSON body: {}", e),
            }
        })?;

        tracing::debug!("[Upstream] GET {} -> {}", path, status);

        Ok(UpstreamReply { status, body })
    }
}
