//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness report with a registry size summary.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub total_urls: usize,
}
