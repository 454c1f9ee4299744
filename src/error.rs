//! Error types for reservation-planner
//!
//! One error enum covers the data access layer and the route layer. Its
//! `IntoResponse` impl is the single place store outcomes become HTTP
//! responses; handlers never build error responses themselves.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Convenience Result type using reservation-planner Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for reservation-planner
#[derive(Error, Debug)]
pub enum Error {
    /// Store connection or statement error, surfaced unchanged
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Requested resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// The store handed back an id that is not a UUID
    #[error("Invalid id: {0}")]
    InvalidId(#[from] uuid::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::InvalidId(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
