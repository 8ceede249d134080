use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;
use mailgate_core::proxy::middleware::cors_layer;

pub fn build_router(state: AppState) -> Router {
    let gateway_router = state.build_gateway_router();

    let public_routes = Router::<AppState>::new()
        .merge(api::router())
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info));

    // Resolve AppState first so we get Router<()>, then merge the gateway
    // router (also Router<()>). The fallback lives at the top level so
    // unmatched paths never pass through the credential middleware.
    public_routes
        .with_state(state)
        .merge(gateway_router)
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
