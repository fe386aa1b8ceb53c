//! DTOs for the link listing endpoint.

use serde::{Deserialize, Serialize};

use super::stats::StatsResponse;

/// Every registered link, oldest first.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListResponse {
    pub total_urls: usize,
    pub urls: Vec<StatsResponse>,
}
