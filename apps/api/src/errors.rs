use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

/// Message used when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch jobs";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("{0}")]
    Transport(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound("Not found".to_string())
    }

    pub fn file_not_found() -> Self {
        AppError::NotFound("File not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message, never empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Provider(e) => tracing::warn!("Job provider failed: {e}"),
            AppError::Transport(msg) => tracing::warn!("Body read failed: {msg}"),
            AppError::PayloadTooLarge | AppError::InvalidBody => {
                tracing::debug!("Rejected request body: {self}")
            }
            AppError::NotFound(_) => {}
        }

        let body = Json(json!({ "error": self.message() }));

        (status, body).into_response()
    }
}
