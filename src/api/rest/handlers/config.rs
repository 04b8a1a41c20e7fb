//! Configuration reflection handler

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Config response body
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config: DisplayConfig,
}

/// Display-only configuration flags for the frontend deployment panel
#[derive(Debug, Serialize)]
pub struct DisplayConfig {
    pub debug_mode: bool,
    pub traffic_level: String,
    pub sim_mode: String,
}

/// Read-only reflection of the active display configuration.
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        config: DisplayConfig {
            debug_mode: state.config.debug_mode,
            traffic_level: state.config.traffic_level.clone(),
            sim_mode: state.config.sim_mode.clone(),
        },
    })
}
