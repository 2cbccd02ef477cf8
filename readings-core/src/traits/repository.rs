//! Local article store abstract trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Article;

/// Local article store trait
///
/// Implementations:
/// - `SqliteRepository` (production, `storage::sqlite`)
/// - `MockRepository` (tests, `test_utils`)
#[async_trait]
pub trait Repository: Send + Sync {
    /// Save articles to the local cache, replacing existing rows by id.
    ///
    /// The whole batch commits or fails as one unit.
    ///
    /// # Arguments
    /// * `articles` - Articles to insert or replace
    async fn save_upsert(&self, articles: &[Article]) -> CoreResult<()>;

    /// Get up to `count` random articles, optionally filtered by tag.
    ///
    /// # Arguments
    /// * `count` - Maximum number of articles to return
    /// * `tag` - Substring tag filter; `None` means no constraint
    async fn get_random(&self, count: usize, tag: Option<&str>) -> CoreResult<Vec<Article>>;

    /// Get every stored article.
    async fn get_all(&self) -> CoreResult<Vec<Article>>;
}
