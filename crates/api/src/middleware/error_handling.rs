//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies of the form
//! `{ "error": "<message>" }`. Every error is logged here, once, on its way out.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gymflow_core::errors::GymError;
use serde_json::json;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `GymError` instances and implements
/// `IntoResponse`, so handlers can return `Result<_, AppError>` and use `?`
/// on anything that converts into a `GymError`.
#[derive(Debug)]
pub struct AppError(pub GymError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GymError::NotFound(_) => StatusCode::NOT_FOUND,
            GymError::Validation(_) => StatusCode::BAD_REQUEST,
            GymError::InvalidTimeWindow(_) => StatusCode::BAD_REQUEST,
            GymError::SchedulingConflict(_) => StatusCode::CONFLICT,
            GymError::Authentication(_) => StatusCode::UNAUTHORIZED,
            GymError::Authorization(_) => StatusCode::FORBIDDEN,
            GymError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GymError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.0.is_client_error() {
            warn!(status = status.as_u16(), "Request rejected: {}", self.0);
        } else {
            error!(status = status.as_u16(), error = ?self.0, "Request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<GymError> for AppError {
    fn from(err: GymError) -> Self {
        AppError(err)
    }
}

/// Store and infrastructure failures surface as `GymError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(GymError::Database(err))
    }
}

/// Malformed bodies fail before a handler runs; they are reported like any
/// other invalid input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(GymError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(GymError::Validation(rejection.body_text()))
    }
}

/// Maps a GymError to an HTTP response
pub fn map_error(err: GymError) -> Response {
    AppError(err).into_response()
}
