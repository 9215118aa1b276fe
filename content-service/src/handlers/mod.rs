//! HTTP handlers for content-service.

pub mod generate;
pub mod stats;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub use generate::generate_content;
pub use stats::get_user_stats;

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "content-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
