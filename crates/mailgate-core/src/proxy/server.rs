use axum::{routing::get, Router};
use std::sync::Arc;

use mailgate_types::GatewayConfig;

use crate::error::CoreResult;
use crate::proxy::handlers;
use crate::proxy::middleware::{credential_middleware, CredentialSource};
use crate::proxy::routes::ROUTES;
use crate::proxy::upstream::UpstreamClient;

/// Axum state shared by the forwarding routes. Read-only after startup.
#[derive(Clone)]
pub struct GatewayState {
    pub config: Arc<GatewayConfig>,
    pub credentials: Arc<CredentialSource>,
    pub upstream: Arc<UpstreamClient>,
}

impl GatewayState {
    /// Assemble state from a configuration that already passed
    /// [`GatewayConfig::validate_startup`].
    pub fn new(config: GatewayConfig) -> CoreResult<Self> {
        let credentials = CredentialSource::from_config(&config)?;
        let upstream = UpstreamClient::from_config(&config)?;

        Ok(Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            upstream: Arc::new(upstream),
        })
    }

    /// Same as [`GatewayState::new`] but with a caller-supplied upstream client.
    pub fn with_upstream(config: GatewayConfig, upstream: UpstreamClient) -> CoreResult<Self> {
        let credentials = CredentialSource::from_config(&config)?;

        Ok(Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            upstream: Arc::new(upstream),
        })
    }
}

/// Build the router for every entry in [`ROUTES`].
///
/// The credential middleware wraps only the GET endpoint of each route, so
/// unmatched paths fall through to the caller's fallback and other methods
/// get 405 without needing a key.
pub fn build_gateway_router(state: GatewayState) -> Router<()> {
    let mut router = Router::new();
    for route in ROUTES {
        let endpoint = get(handlers::handle_relay).route_layer(
            axum::middleware::from_fn_with_state(state.credentials.clone(), credential_middleware),
        );
        router = router.route(route.template, endpoint);
    }

    router.with_state(state)
}
