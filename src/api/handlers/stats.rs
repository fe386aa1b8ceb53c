//! Handler for single link statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Reading statistics does not count as a click.
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/aB3xYz",
///   "originalUrl": "https://github.com",
///   "clicks": 3,
///   "createdAt": "2024-01-15T10:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let entry = state.registry.stats(&code)?;

    Ok(Json(StatsResponse {
        short_url: state.short_url(&headers, &entry.code),
        original_url: entry.target_url,
        clicks: entry.clicks,
        created_at: entry.created_at,
    }))
}
