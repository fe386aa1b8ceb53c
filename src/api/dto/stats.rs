//! DTOs for single link statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics for one short code.
///
/// Also used as the item type of [`super::url_list::UrlListResponse`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_url: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}
