//! Simulated service-status handler

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use crate::sim::{self, ServiceStatus};
use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Duration;

/// Status response body
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: ServiceStatus,
    pub system: SystemMetrics,
}

/// Simulated resource metrics
#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub cpu: u32,
    pub memory: u32,
    pub uptime_seconds: i64,
}

/// Simulated service status.
///
/// May first sleep for the configured latency spike; that decision draws
/// from the thread RNG so the bucketed snapshot below stays reproducible.
pub async fn get_status(State(state): State<AppState>) -> ApiResult<Json<StatusResponse>> {
    if sim::should_inject_latency(&state.config) {
        tracing::info!(
            "Simulating latency spike ({} ms)",
            state.config.latency_millis
        );
        tokio::time::sleep(Duration::from_millis(state.config.latency_millis)).await;
    }

    let now = chrono::Utc::now().timestamp();
    let snapshot = sim::snapshot_at(&state.config, now, state.uptime_seconds());

    Ok(Json(StatusResponse {
        status: snapshot.status,
        system: SystemMetrics {
            cpu: snapshot.cpu,
            memory: snapshot.memory,
            uptime_seconds: snapshot.uptime_seconds,
        },
    }))
}
