//! Static front-end assets served from `AppState::public_dir`.

use std::path::Path;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

const HTML: &str = "text/html; charset=utf-8";
const CSS: &str = "text/css; charset=utf-8";
const JAVASCRIPT: &str = "application/javascript; charset=utf-8";

/// GET / and GET /index.html
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_file(&state.public_dir.join("index.html"), HTML).await
}

/// GET /styles.css
pub async fn styles(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_file(&state.public_dir.join("styles.css"), CSS).await
}

/// GET /app.js
pub async fn script(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_file(&state.public_dir.join("app.js"), JAVASCRIPT).await
}

async fn serve_file(path: &Path, content_type: &'static str) -> Result<Response, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        debug!("Static file {} unavailable: {e}", path.display());
        AppError::file_not_found()
    })?;

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
