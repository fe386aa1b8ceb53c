//! Entry entity representing one short code mapping.

use chrono::{DateTime, Utc};

/// Snapshot of a registered short code.
///
/// Values of this type are owned copies handed out by the
/// [`Registry`](crate::application::services::Registry); mutating one never
/// affects the registry or other snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>, clicks: u64) -> Self {
        Self {
            code,
            target_url,
            created_at,
            clicks,
        }
    }
}

/// Outcome of a submission.
///
/// Distinguishes a freshly minted entry from an earlier one returned by
/// deduplication, so callers can report which happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(Entry),
    Existing(Entry),
}

impl Submission {
    /// Returns the entry regardless of how it was obtained.
    pub fn entry(&self) -> &Entry {
        match self {
            Submission::Created(entry) | Submission::Existing(entry) => entry,
        }
    }

    pub fn into_entry(self) -> Entry {
        match self {
            Submission::Created(entry) | Submission::Existing(entry) => entry,
        }
    }

    /// Returns true if the submission minted a new code.
    pub fn is_created(&self) -> bool {
        matches!(self, Submission::Created(_))
    }
}
