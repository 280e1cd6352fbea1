use super::RegistryState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    storage: String,
    uptime_seconds: u64,
}

pub async fn health_check(State(state): State<Arc<RegistryState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        storage: state.registry.storage_backend().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
