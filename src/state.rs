//! Shared application state injected into every handler.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::services::Registry;
use crate::utils::short_url::{base_url, short_url};

/// State shared across all request handlers.
///
/// Cloning is cheap; the registry sits behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Fixed public prefix for short URLs; derived per request when `None`.
    pub base_url: Option<Arc<str>>,
    /// Trust `X-Forwarded-Proto` when building short URLs.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(registry: Arc<Registry>, base_url: Option<String>, behind_proxy: bool) -> Self {
        Self {
            registry,
            base_url: base_url.map(Arc::from),
            behind_proxy,
        }
    }

    /// Builds the full short URL for `code` as seen by the requesting client.
    pub fn short_url(&self, headers: &HeaderMap, code: &str) -> String {
        let base = base_url(headers, self.base_url.as_deref(), self.behind_proxy);
        short_url(&base, code)
    }
}
