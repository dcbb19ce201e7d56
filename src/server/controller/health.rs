use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::api::ErrorDto,
    server::{service::health::HealthService, state::AppState},
};

fn status_code(passed: bool) -> StatusCode {
    if passed {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET / - Describe the service
///
/// # Returns
/// - `200 OK`: Service name, configured bots, version and endpoint list
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthService::service_info(&state.bot_names)),
    )
}

/// GET /health - Liveness check of all bots
///
/// # Returns
/// - `200 OK`: Every bot is ready and online and no gateway latency reaches 1000 ms
/// - `503 Service Unavailable`: No bot registered or a check failed
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let service = HealthService::new(&state.statuses, state.started_at);
    let (healthy, dto) = service.health(Utc::now()).await;

    if healthy {
        tracing::debug!("Health check passed, uptime {}s", dto.uptime);
    } else {
        tracing::warn!(
            "Health check failed: {}",
            dto.reason.as_deref().unwrap_or("bot or latency check failed")
        );
    }

    (status_code(healthy), Json(dto))
}

/// GET /ready - Readiness check of all bots
///
/// # Returns
/// - `200 OK`: At least one bot registered and all bots ready
/// - `503 Service Unavailable`: Otherwise
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let service = HealthService::new(&state.statuses, state.started_at);
    let (ready, dto) = service.readiness().await;

    (status_code(ready), Json(dto))
}

/// GET /status - Uptime and per-bot status
///
/// # Returns
/// - `200 OK`: Status report
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let service = HealthService::new(&state.statuses, state.started_at);

    (StatusCode::OK, Json(service.status(Utc::now()).await))
}

/// Fallback for unknown paths
///
/// # Returns
/// - `404 Not Found`: `{ "error": "Not found" }`
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
