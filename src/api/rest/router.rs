//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::error::handle_panic;
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    apply_middleware(base_routes(), state)
}

fn base_routes() -> Router<AppState> {
    let api_routes = Router::new()
        .route("/status", get(handlers::get_status))
        .route("/meta", get(handlers::get_meta))
        .route("/config", get(handlers::get_config));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes)
}

/// Attach the boundary middleware: request tracing, the catch-all 500 for
/// handler panics, and CORS.
fn apply_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

/// Build the CORS layer: "*" allows any origin, otherwise a comma-separated
/// origin list. Origins that fail to parse as header values are dropped
/// with a warning.
fn cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.trim() == "*" {
        layer.allow_origin(Any)
    } else {
        let list: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|origin| {
                let origin = origin.trim();
                match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring unparsable CORS origin: {:?}", origin);
                        None
                    }
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(list))
    }
}
