//! Normalization and validation of submitted URLs.
//!
//! Normalization is deliberately literal: the stored target is the trimmed
//! input with `https://` prepended when no HTTP scheme is present. The `url`
//! crate is used only to validate the result, never to rewrite it, so two
//! submissions deduplicate only when their normalized strings are equal.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Original URL is required")]
    Empty,

    #[error("Invalid URL format")]
    InvalidFormat(String),
}

/// Normalizes a raw submitted URL.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed; an empty result is rejected
/// 2. `https://` is prepended unless the value starts with `http://` or `https://`
/// 3. The result must parse as an absolute HTTP(S) URL with a host
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for empty or whitespace-only input.
/// Returns [`UrlNormalizationError::InvalidFormat`] if the normalized value is not
/// a well-formed URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("http://example.com").unwrap(), "http://example.com");
/// assert!(normalize_url("not a url at all").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::InvalidFormat(format!(
            "unsupported scheme: {}",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(normalized)
}
