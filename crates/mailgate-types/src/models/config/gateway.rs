//! Gateway configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;
use validator::Validate;

use super::enums::{CredentialPolicy, IndexMode};
use crate::error::ConfigError;

/// Upstream used when `MAIL_API_BASE_URL` is not set.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.example.com";

/// Environment variable holding the static credential.
pub const API_KEY_ENV: &str = "MAIL_API_KEY";

/// Header the per-request credential policy reads the key from.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Process-wide gateway configuration.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GatewayConfig {
    /// Base URL every upstream path is appended to
    pub upstream_base_url: String,
    /// Credential source for this deployment
    #[serde(default)]
    pub credential_policy: CredentialPolicy,
    /// Static credential (only consulted under `CredentialPolicy::Static`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Upper bound for a single upstream call, in seconds
    #[validate(range(min = 1_u64, max = 300_u64))]
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Address to bind
    pub bind_address: String,
    /// Port to listen on
    #[validate(range(min = 1_u16))]
    pub port: u16,
    /// What the root route serves
    #[serde(default)]
    pub index_mode: IndexMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            credential_policy: CredentialPolicy::default(),
            api_key: None,
            request_timeout_secs: default_request_timeout(),
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            index_mode: IndexMode::default(),
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("upstream_base_url", &self.upstream_base_url)
            .field("credential_policy", &self.credential_policy)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("index_mode", &self.index_mode)
            .finish()
    }
}

impl GatewayConfig {
    /// Check the configuration before anything is served.
    ///
    /// Normalizes the base URL (no trailing slash) and the static key (trimmed).
    /// A static policy without a key is rejected here, never at request time.
    pub fn validate_startup(mut self) -> Result<Self, ConfigError> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

        let base = self.upstream_base_url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base).map_err(|e| ConfigError::from_url_error(&base, &e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUpstreamUrl {
                url: base,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.upstream_base_url = base;

        self.bind_address.parse::<IpAddr>().map_err(|e| ConfigError::ValidationError {
            field: "bind_address".to_string(),
            message: e.to_string(),
        })?;

        self.api_key = self
            .api_key
            .take()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if self.credential_policy == CredentialPolicy::Static && self.api_key.is_none() {
            return Err(ConfigError::MissingCredential { var: API_KEY_ENV.to_string() });
        }

        Ok(self)
    }

    /// The server-side credential, if this deployment uses one.
    pub fn static_credential(&self) -> Option<&str> {
        match self.credential_policy {
            CredentialPolicy::Static => self.api_key.as_deref(),
            CredentialPolicy::PerRequest => None,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the full bind socket address.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

pub const fn default_request_timeout() -> u64 {
    10
}
