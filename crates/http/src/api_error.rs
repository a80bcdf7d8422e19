//! Typed API errors for HTTP handlers.
//!
//! Two JSON envelopes exist: read endpoints answer `{"error": "..."}`, while
//! mutations answer `{"success": false, "error": "..."}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinevec_service::ServiceError;

/// API error with HTTP status code and the message shown to the caller.
///
/// Renders as `{"error": "message"}`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller.
    BadRequest(String),
    /// 500 Internal Server Error — embedding or storage failure.
    Internal(String),
}

impl ApiError {
    fn into_parts(self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.into_parts();
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_invalid_input() {
            tracing::warn!(error = %err, "rejected request");
            return Self::BadRequest(err.client_message());
        }
        tracing::error!(error = %err, "request failed");
        Self::Internal(err.client_message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection, "malformed request body");
        Self::BadRequest(rejection.body_text())
    }
}

/// Error for mutating endpoints. Renders as `{"success": false, "error": "message"}`.
#[derive(Debug)]
pub struct ActionError(pub ApiError);

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.into_parts();
        (status, Json(serde_json::json!({"success": false, "error": message}))).into_response()
    }
}

impl From<ServiceError> for ActionError {
    fn from(err: ServiceError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ActionError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.into())
    }
}
