//! Build and runtime metadata handler

use crate::api::rest::state::AppState;
use crate::config::Environment;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use serde::Serialize;

/// Meta response body
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub version: String,
    pub commit: String,
    pub environment: Environment,
    pub build_time: String,
    pub uptime_seconds: i64,
    pub cold_start: bool,
}

/// Build metadata and uptime. Nothing here is simulated.
pub async fn get_meta(State(state): State<AppState>) -> ApiResult<Json<MetaResponse>> {
    let uptime_seconds = state.uptime_seconds();

    Ok(Json(MetaResponse {
        version: state.config.app_version.clone(),
        commit: state.commit.clone(),
        environment: state.config.environment,
        build_time: state.config.build_time.clone(),
        uptime_seconds,
        cold_start: uptime_seconds < state.config.cold_start_seconds,
    }))
}
