//! Mapping from service errors to the wire error body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campus_core::error::CampusError;
use serde_json::json;
use tracing::error;

/// Wraps a service error for conversion into `{ "errors": ... }`:
/// an array of strings for aggregated validation failures, a single
/// string otherwise.
#[derive(Debug)]
pub struct ApiError(CampusError);

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CampusError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self.0 {
            CampusError::Validation { messages } => (StatusCode::BAD_REQUEST, json!(messages)),
            CampusError::NotFound { message } => (StatusCode::NOT_FOUND, json!(message)),
            CampusError::Database(message) | CampusError::Internal(message) => {
                error!(%message, "unexpected storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("internal server error"),
                )
            }
        };
        (status, Json(json!({ "errors": errors }))).into_response()
    }
}
