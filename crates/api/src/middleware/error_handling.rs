//! # Error Handling Middleware
//!
//! Maps [`HangoutError`] values to HTTP status codes and a JSON body of the
//! form `{"error": "<message>"}`, so every endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hangout_core::errors::HangoutError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub HangoutError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HangoutError::InvalidSpec(_) => StatusCode::BAD_REQUEST,
            HangoutError::Validation(_) => StatusCode::BAD_REQUEST,
            HangoutError::NotFound(_) => StatusCode::NOT_FOUND,
            HangoutError::Authentication(_) => StatusCode::UNAUTHORIZED,
            HangoutError::Remote(_) => StatusCode::BAD_GATEWAY,
            HangoutError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `HangoutResult` inside handlers
impl From<HangoutError> for AppError {
    fn from(err: HangoutError) -> Self {
        AppError(err)
    }
}

/// Unexpected failures (hashing, I/O) surface as internal errors
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(HangoutError::Internal(err.into()))
    }
}

/// Maps a HangoutError to an HTTP response
pub fn map_error(err: HangoutError) -> Response {
    AppError(err).into_response()
}
