//! Gateway configuration models.

mod enums;
mod gateway;

pub use enums::{CredentialPolicy, IndexMode};
pub use gateway::{
    default_request_timeout, GatewayConfig, API_KEY_ENV, API_KEY_HEADER, DEFAULT_UPSTREAM_BASE_URL,
};
