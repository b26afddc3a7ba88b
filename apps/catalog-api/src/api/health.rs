//! Health check endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::{AppState, Storage};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match &state.storage {
        Storage::Postgres(db) => match database::postgres::check_health(db).await {
            Ok(()) => (StatusCode::OK, Json(HealthResponse::new("ready"))),
            Err(e) => {
                tracing::warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(HealthResponse::new("unavailable")),
                )
            }
        },
        Storage::Memory => (StatusCode::OK, Json(HealthResponse::new("ready"))),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
