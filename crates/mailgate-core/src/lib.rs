//! # mailgate Core
//!
//! Forwarding logic for the mailgate gateway.
//!
//! ```text
//! mailgate-core/src/proxy/
//! ├── routes.rs         # fixed route table + upstream path substitution
//! ├── upstream/         # reqwest-backed forwarder (one GET per request)
//! ├── middleware/       # credential resolution, CORS
//! ├── handlers/         # the single relay handler
//! ├── common/           # HTTP client builder
//! └── server.rs         # GatewayState + router assembly
//! ```
//!
//! The binary in `mailgate-server` owns configuration loading and the listener.

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod proxy;

pub use error::{CoreError, CoreResult, GatewayRejection};
pub use proxy::{build_gateway_router, GatewayState, UpstreamClient, ROUTES};
