// Middleware module - Axum middleware

pub mod cors;
pub mod credential;

pub use cors::cors_layer;
pub use credential::{credential_middleware, Credential, CredentialSource};
