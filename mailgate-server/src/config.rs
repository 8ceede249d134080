//! Startup configuration assembly.

use std::path::PathBuf;

use mailgate_types::{ConfigError, GatewayConfig};

use crate::cli::ConfigArgs;

/// Load `.env` from the working directory, if present.
///
/// Variables already set in the environment win over the file. Runs before
/// logging is initialised, so the caller reports the outcome.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

impl ConfigArgs {
    /// Build and validate the gateway configuration.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when the static policy is
    /// selected without a key, so the process never starts serving.
    pub fn to_gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        GatewayConfig {
            upstream_base_url: self.upstream_url.clone(),
            credential_policy: self.credential_policy,
            api_key: self.api_key.clone(),
            request_timeout_secs: self.timeout_secs,
            bind_address: self.bind.clone(),
            port: self.port,
            index_mode: self.index_mode,
        }
        .validate_startup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailgate_types::{CredentialPolicy, IndexMode};

    fn args() -> ConfigArgs {
        ConfigArgs {
            upstream_url: "https://mail.example.org/".to_string(),
            api_key: Some("secret".to_string()),
            credential_policy: CredentialPolicy::Static,
            timeout_secs: 10,
            bind: "0.0.0.0".to_string(),
            port: 8080,
            index_mode: IndexMode::Docs,
        }
    }

    #[test]
    fn test_to_gateway_config() {
        let config = args().to_gateway_config().unwrap();
        assert_eq!(config.upstream_base_url, "https://mail.example.org");
        assert_eq!(config.static_credential(), Some("secret"));
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.index_mode, IndexMode::Docs);
    }

    #[test]
    fn test_static_policy_without_key_is_fatal() {
        let err = ConfigArgs { api_key: None, ..args() }.to_gateway_config().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { ref var } if var == "MAIL_API_KEY"));
    }

    #[test]
    fn test_per_request_policy_without_key_is_fine() {
        let config = ConfigArgs {
            api_key: None,
            credential_policy: CredentialPolicy::PerRequest,
            ..args()
        }
        .to_gateway_config()
        .unwrap();
        assert_eq!(config.static_credential(), None);
    }
}
