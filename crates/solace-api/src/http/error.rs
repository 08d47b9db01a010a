//! Application error type mapping to HTTP status codes.
//!
//! Every failure surfaces to the caller as well-formed JSON with a code
//! and a human-readable message -- never a bare stack trace.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use solace_types::error::GatewayError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The model gateway call failed (transport, timeout, bad status,
    /// unparseable body). Never retried.
    Gateway(GatewayError),
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Gateway(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Gateway(e) => (
                StatusCode::BAD_GATEWAY,
                "GATEWAY_ERROR",
                format!("model gateway error: {e}"),
            ),
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
