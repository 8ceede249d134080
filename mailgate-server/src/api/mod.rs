//! API Routes
//!
//! Informational endpoints served next to the forwarded routes.

pub(crate) mod index;

#[cfg(test)]
mod index_tests;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index::get_index))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}
