//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while assembling the startup configuration.
///
/// Every variant is fatal: the process refuses to start.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Static credential policy selected but no credential configured
    #[error("{var} not found: a static credential is required by the selected policy")]
    MissingCredential {
        /// Environment variable the credential is read from
        var: String,
    },

    /// Upstream base URL could not be parsed
    #[error("Invalid upstream URL '{url}': {message}")]
    InvalidUpstreamUrl {
        /// The rejected value
        url: String,
        /// Description of the parse failure
        message: String,
    },

    /// A value failed a range or length rule
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// A raw value (env var or flag) could not be parsed
    #[error("Config parse error for {field}: {message}")]
    ParseError {
        /// Name of the offending setting
        field: String,
        /// Description of the parse failure
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error from `validator` output, naming the first failing field.
    pub fn from_validation_errors(errors: &validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, _)| field.to_string())
            .unwrap_or_else(|| "config".to_string());
        Self::ValidationError { field, message: errors.to_string() }
    }

    /// Create an invalid-URL error from a `url` parse error.
    pub fn from_url_error(url: &str, e: &url::ParseError) -> Self {
        Self::InvalidUpstreamUrl { url: url.to_string(), message: e.to_string() }
    }
}
