//! Domain type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single reading item.
///
/// Identity is `id` (assigned by the remote source); every other field is
/// replaced wholesale on re-sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    /// May be empty; the UI renders empty titles as "Untitled".
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

/// The remote scheduling record article ids can be attached to.
///
/// Resolved lazily once per process and cached in memory; never persisted
/// to the local store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub id: String,
    /// Ordered; toggle operations preserve the relative order of the rest.
    pub reading_list_ids: Vec<String>,
}
