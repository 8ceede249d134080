//! Typed error definitions for mailgate.
//!
//! Two domains exist: configuration problems, which are fatal at startup, and
//! gateway problems, which end a single request with an error envelope.

mod config;
mod gateway;

pub use config::ConfigError;
pub use gateway::GatewayError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a request forwarding error
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Config(ConfigError::MissingCredential {
            var: "MAIL_API_KEY".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Config"));
        assert!(json.contains("MAIL_API_KEY"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err: TypedError = GatewayError::UpstreamTransport {
            path: "/api/public/v1/mail".to_string(),
            message: "connection refused".to_string(),
        }
        .into();

        let msg = format!("{}", err);
        assert!(msg.starts_with("Gateway error:"));
        assert!(msg.contains("/api/public/v1/mail"));
        assert!(msg.contains("connection refused"));
    }
}
