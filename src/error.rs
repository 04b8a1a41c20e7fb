//! Error types for statusd

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Daemon-level errors. All of these are startup-fatal: an invalid
/// configuration must prevent the process from serving at all.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-boundary errors.
///
/// Simulation logic is pure and cannot fail for a validated config, so the
/// only thing a handler can report is an unexpected internal fault, mapped to
/// a generic 500 that leaks nothing beyond a short message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unexpected internal fault
    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Internal(details) = self;
        tracing::error!("Unhandled request fault: {}", details);

        let body = ErrorResponse {
            error: "Internal Server Error".to_string(),
            details,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Convert a handler panic into the generic 500 body.
///
/// Installed at the router boundary so an unexpected fault during request
/// handling still answers with the documented JSON shape instead of a reset
/// connection.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unhandled fault".to_string()
    };

    ApiError::Internal(details).into_response()
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_payload_becomes_details() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new("formatted boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            error: "Internal Server Error".to_string(),
            details: "boom".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["details"], "boom");
    }
}
