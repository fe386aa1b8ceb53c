//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`            - JSON API
//! - `GET  /*`           - Files from `{public_dir}` (`/` serves `index.html`)
//! - `GET  /{code}`      - Short link redirect, for paths with no matching file
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Security headers** - `nosniff`, frame and referrer policies
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{cors, security_headers, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory holding the front page and static assets
///
/// Anything outside `/api` is looked up in `public_dir` first; a path with no
/// matching file is treated as a short code.
pub fn app_router(state: AppState, public_dir: &Path) -> NormalizePath<Router> {
    let redirect = get(redirect_handler).with_state::<()>(state.clone());
    let public = ServeDir::new(public_dir).fallback(redirect);

    let router = Router::new()
        .nest("/api", api::routes::api_routes())
        .fallback_service(public)
        .with_state(state)
        .layer(cors::layer())
        .layer(security_headers::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
