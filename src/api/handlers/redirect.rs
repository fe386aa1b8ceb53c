//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The code is the request path without its leading slash, so the handler
/// works both as a routed endpoint and as the fallback behind the static
/// file service. Every successful redirect counts one click on the code.
///
/// # Errors
///
/// Returns 404 Not Found if the path is not a well-formed code or the code
/// doesn't exist.
pub async fn redirect_handler(
    uri: Uri,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let code = uri.path().trim_start_matches('/');

    if !is_valid_code(code) {
        debug!("Not a short code: {}", uri.path());
        return Err(AppError::not_found("Short URL not found"));
    }

    let target_url = state.registry.resolve(code)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
