//! Axum route handler for the search API.

use axum::{body::Body, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::SearchResponse;
use crate::search::body::read_body;
use crate::search::query::normalize_query;
use crate::state::AppState;

/// POST /api/search
///
/// Reads the bounded JSON body, normalizes it and forwards the canonical query
/// to the configured provider. Every failure surfaces as a 400 `{error}`.
pub async fn handle_search(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<SearchResponse>, AppError> {
    let payload = read_body(body).await?;
    let query = normalize_query(&payload);

    info!(
        keyword = %query.keyword,
        location = %query.location,
        limit = %query.limit,
        page = %query.page,
        "Searching jobs"
    );

    let jobs = state.provider.query(&query).await?;

    info!(count = jobs.len(), "Job search complete");

    Ok(Json(SearchResponse::new(query, jobs)))
}
