//! Application State
//!
//! Holds the read-only gateway state shared by every route.

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;

use mailgate_core::proxy::{build_gateway_router, GatewayState};
use mailgate_types::GatewayConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub gateway: GatewayState,
}

impl AppState {
    /// Create AppState from a configuration that passed startup validation.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let gateway = GatewayState::new(config).context("Failed to initialize gateway")?;
        Ok(Self::from_gateway(gateway))
    }

    pub fn from_gateway(gateway: GatewayState) -> Self {
        Self { inner: Arc::new(AppStateInner { gateway }) }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.inner.gateway.config
    }

    pub fn build_gateway_router(&self) -> Router {
        build_gateway_router(self.inner.gateway.clone())
    }
}
