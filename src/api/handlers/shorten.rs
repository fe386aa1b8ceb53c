//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use validator::Validate;

use crate::api::dto::shorten::{MESSAGE_CREATED, MESSAGE_EXISTING, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL, or returns the existing one for an already known URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "github.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://github.com",
///   "shortUrl": "http://localhost:3000/aB3xYz",
///   "message": "URL shortened successfully"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, `originalUrl` is
/// missing or empty, or the URL is malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let submission = state.registry.submit(&payload.original_url)?;

    let message = if submission.is_created() {
        MESSAGE_CREATED
    } else {
        MESSAGE_EXISTING
    };

    let entry = submission.into_entry();

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&headers, &entry.code),
        original_url: entry.target_url,
        message: message.to_string(),
    }))
}
