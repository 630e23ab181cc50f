//! Unified error handling for the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::MoneyError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: message.into(),
        })
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Persistence unavailable: {0}")]
    Unavailable(String),

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] MoneyError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_)
            | AppError::Unavailable(_)
            | AppError::Arithmetic(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Failures are reported with their raw message, 5xx included.
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                e.to_string()
            }
            AppError::Unavailable(msg) => {
                tracing::error!(error = %msg, "Persistence unavailable");
                msg.clone()
            }
            AppError::Arithmetic(e) => {
                tracing::error!(error = %e, "Arithmetic error");
                self.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                msg.clone()
            }
        };

        (status, ErrorBody::new(message)).into_response()
    }
}
