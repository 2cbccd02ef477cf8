//! Remote source abstract trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Article, Week};

/// Remote reading-list source trait
///
/// Implementations:
/// - `NotionClient` (production, `notion::client`)
/// - `MockRemoteSource` (tests, `test_utils`)
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch all remote articles not yet marked done.
    ///
    /// Pagination is followed internally; the caller sees one flat list.
    async fn fetch_articles(&self) -> CoreResult<Vec<Article>>;

    /// Resolve the week whose date span contains "now".
    ///
    /// Fails with [`CoreError::NoCurrentWeek`](crate::CoreError::NoCurrentWeek)
    /// if no week matches.
    async fn fetch_current_week(&self) -> CoreResult<Week>;

    /// Overwrite a week's reading list with the given article ids.
    ///
    /// This replaces the whole membership list, not a delta.
    ///
    /// # Arguments
    /// * `week_id` - Id of the week record
    /// * `article_ids` - Full replacement list, in order
    async fn update_week_reading_list(
        &self,
        week_id: &str,
        article_ids: &[String],
    ) -> CoreResult<()>;
}
