pub mod assets;
pub mod cors;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::search::handlers;
use crate::state::AppState;

/// Catch-all for unknown paths and for known paths hit with the wrong method.
async fn not_found() -> AppError {
    AppError::not_found()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Front-end
        .route("/", get(assets::index).fallback(not_found))
        .route("/index.html", get(assets::index).fallback(not_found))
        .route("/styles.css", get(assets::styles).fallback(not_found))
        .route("/app.js", get(assets::script).fallback(not_found))
        // Search API
        .route(
            "/api/search",
            post(handlers::handle_search).fallback(not_found),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}
