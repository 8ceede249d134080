// CORS middleware
use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// create CORS layer
///
/// The gateway is read-only, so only safe methods are advertised. The
/// credential header must be allowed for browser clients under the
/// per-request policy.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(mailgate_types::models::API_KEY_HEADER),
        ])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
