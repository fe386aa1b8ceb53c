//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler, stats_handler, url_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create (or look up) a short URL
/// - `GET  /stats/{code}`  - Click statistics for one link
/// - `GET  /urls`          - All links, oldest first
/// - `GET  /health`        - Liveness and link count
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/urls", get(url_list_handler))
        .route("/health", get(health_handler))
}
