//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message reported when a new code was minted.
pub const MESSAGE_CREATED: &str = "URL shortened successfully";

/// Message reported when the URL was already registered.
pub const MESSAGE_EXISTING: &str = "URL already shortened";

/// Request to shorten a single URL.
///
/// A missing `originalUrl` field deserializes to an empty string so it is
/// reported through validation rather than as a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Original URL is required"))]
    pub original_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub message: String,
}
