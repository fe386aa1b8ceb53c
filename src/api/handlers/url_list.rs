//! Handler for listing all links.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::stats::StatsResponse;
use crate::api::dto::url_list::UrlListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered link, oldest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn url_list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UrlListResponse>, AppError> {
    let urls: Vec<StatsResponse> = state
        .registry
        .list()?
        .into_iter()
        .map(|entry| StatsResponse {
            short_url: state.short_url(&headers, &entry.code),
            original_url: entry.target_url,
            clicks: entry.clicks,
            created_at: entry.created_at,
        })
        .collect();

    Ok(Json(UrlListResponse {
        total_urls: urls.len(),
        urls,
    }))
}
