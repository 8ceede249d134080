use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::fmt;
use std::sync::Arc;

use mailgate_types::models::{API_KEY_ENV, API_KEY_HEADER};
use mailgate_types::{ConfigError, CredentialPolicy, GatewayConfig, GatewayError};

use crate::error::GatewayRejection;

/// Bearer credential for the upstream. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Arc<str>);

impl Credential {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Resolved form of the deployment's [`CredentialPolicy`].
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Static(Credential),
    PerRequest,
}

impl CredentialSource {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigError> {
        match config.credential_policy {
            CredentialPolicy::Static => config
                .static_credential()
                .map(|key| Self::Static(Credential::new(key)))
                .ok_or_else(|| ConfigError::MissingCredential { var: API_KEY_ENV.to_string() }),
            CredentialPolicy::PerRequest => Ok(Self::PerRequest),
        }
    }

    fn resolve(&self, request: &Request) -> Option<Credential> {
        match self {
            Self::Static(credential) => Some(credential.clone()),
            Self::PerRequest => request
                .headers()
                .get(API_KEY_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(Credential::new),
        }
    }
}

/// Attach the upstream credential to the request, or reject with 401.
///
/// Runs before the forwarding handler, so a rejected request never reaches
/// the upstream.
pub async fn credential_middleware(
    State(source): State<Arc<CredentialSource>>,
    mut request: Request,
    next: Next,
) -> Response {
    match source.resolve(&request) {
        Some(credential) => {
            request.extensions_mut().insert(credential);
            next.run(request).await
        },
        None => {
            tracing::info!(
                "Rejected {} {}: no API key supplied",
                request.method(),
                request.uri().path()
            );
            GatewayRejection(GatewayError::MissingApiKey).into_response()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_key(key: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/public/v1/me");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_static_source_ignores_headers() {
        let source = CredentialSource::Static(Credential::new("server-key"));
        let resolved = source.resolve(&request_with_key(Some("client-key"))).unwrap();
        assert_eq!(resolved.expose(), "server-key");
    }

    #[test]
    fn test_per_request_source_reads_header() {
        let source = CredentialSource::PerRequest;
        assert_eq!(
            source.resolve(&request_with_key(Some(" client-key "))).map(|c| c.expose().to_string()),
            Some("client-key".to_string())
        );
        assert!(source.resolve(&request_with_key(None)).is_none());
        assert!(source.resolve(&request_with_key(Some("   "))).is_none());
    }

    #[test]
    fn test_from_config() {
        let config = GatewayConfig { api_key: Some("k".to_string()), ..GatewayConfig::default() };
        assert!(matches!(CredentialSource::from_config(&config), Ok(CredentialSource::Static(_))));

        let config = GatewayConfig::default();
        assert!(CredentialSource::from_config(&config).is_err());

        let config = GatewayConfig {
            credential_policy: CredentialPolicy::PerRequest,
            ..GatewayConfig::default()
        };
        assert!(matches!(CredentialSource::from_config(&config), Ok(CredentialSource::PerRequest)));
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        assert_eq!(format!("{:?}", Credential::new("hunter2")), "Credential(<redacted>)");
    }
}
