//! # mailgate Types
//!
//! Configuration model and typed error definitions for the mailgate gateway.
//!
//! - **`error`** - Typed error hierarchy for configuration and forwarding
//! - **`models`** - Gateway configuration, policy enums, and the error envelope
//!
//! ## Architecture Role
//!
//! `mailgate-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          mailgate-types (this crate)
//!                  │
//!                  ▼
//!            mailgate-core
//!                  │
//!                  ▼
//!           mailgate-server
//! ```
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, GatewayError, Result, TypedError};

// Re-export core model types
pub use models::{CredentialPolicy, ErrorEnvelope, GatewayConfig, IndexMode};
