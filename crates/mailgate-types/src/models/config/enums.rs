//! Configuration enums for credential handling and the index page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the upstream bearer credential comes from.
///
/// Exactly one policy is active per deployment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CredentialPolicy {
    /// One server-side key, read once at startup
    #[default]
    Static,
    /// Client supplies its own key in the `X-API-Key` header
    PerRequest,
}

impl fmt::Display for CredentialPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Static => write!(f, "static"),
            Self::PerRequest => write!(f, "per_request"),
        }
    }
}

impl CredentialPolicy {
    /// Parse from string. Accepts `static`, `per_request` and `per-request`.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "per_request" | "per-request" => Some(Self::PerRequest),
            _ => None,
        }
    }
}

/// What `GET /` serves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    /// JSON documentation payload listing every endpoint
    Docs,
    /// HTML landing page
    #[default]
    Landing,
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Docs => write!(f, "docs"),
            Self::Landing => write!(f, "landing"),
        }
    }
}

impl IndexMode {
    /// Parse from string.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docs" | "json" => Some(Self::Docs),
            "landing" | "html" => Some(Self::Landing),
            _ => None,
        }
    }
}
