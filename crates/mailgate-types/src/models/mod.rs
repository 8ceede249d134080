//! Domain models for mailgate.

mod config;
mod envelope;

pub use config::{
    default_request_timeout, CredentialPolicy, GatewayConfig, IndexMode, API_KEY_ENV,
    API_KEY_HEADER, DEFAULT_UPSTREAM_BASE_URL,
};
pub use envelope::ErrorEnvelope;
