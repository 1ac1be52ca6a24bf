// src/api/http/health.rs
//
// Health check and liveness endpoints for load balancers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    projects: usize,
}

/// Health check endpoint for load balancers.
/// The store is in-process memory, so a responding server is a healthy one.
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        projects: state.project_store.project_count().await,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe - simple ping to verify the server is running.
///
/// GET /live
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "alive"})))
}
