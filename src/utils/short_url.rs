//! Construction of public short URLs from request headers.
//!
//! The registry only knows bare codes. The scheme and host prefix is attached
//! here at response time and never stored.

use axum::http::{HeaderMap, header};

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Host used when the request carries no usable `Host` header.
const FALLBACK_HOST: &str = "localhost";

/// Determines the `{scheme}://{host}` prefix for short URLs.
///
/// # Resolution Order
///
/// 1. `configured` base URL, if set (trailing slash removed)
/// 2. Scheme from `X-Forwarded-Proto` when `behind_proxy` is true, else `http`
/// 3. Host from the `Host` header, port included; `localhost` if missing or invalid
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:3000".parse().unwrap());
///
/// assert_eq!(base_url(&headers, None, false), "http://s.example.com:3000");
/// ```
pub fn base_url(headers: &HeaderMap, configured: Option<&str>, behind_proxy: bool) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let scheme = if behind_proxy {
        headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| matches!(*v, "http" | "https"))
            .unwrap_or("http")
    } else {
        "http"
    };

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty() && !h.contains(|c: char| c.is_whitespace() || c == '/'))
        .unwrap_or(FALLBACK_HOST);

    format!("{scheme}://{host}")
}

/// Joins a base URL and a code into the full short URL.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}
