//! Read-through cache service
//!
//! Orchestrates the local store and the remote source: decides when local
//! data is trustworthy, when to refetch, and keeps the remote "current
//! week" record consistent with local toggle actions.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::CoreResult;
use crate::traits::{RemoteSource, Repository};
use crate::types::{Article, Week};

/// Readings cache/synchronization service
pub struct ReadingsService {
    repo: Arc<dyn Repository>,
    remote: Arc<dyn RemoteSource>,
    /// Lazily resolved current week, cached for the process lifetime.
    /// Mutated only after a remote update succeeds.
    current_week: Mutex<Option<Week>>,
}

impl ReadingsService {
    /// Create the service over a local store and a remote source
    #[must_use]
    pub fn new(repo: Arc<dyn Repository>, remote: Arc<dyn RemoteSource>) -> Self {
        Self {
            repo,
            remote,
            current_week: Mutex::new(None),
        }
    }

    /// Get up to `count` random articles, optionally filtered by tag.
    ///
    /// Cache policy: a result of `count` or more is returned verbatim and
    /// the remote is never consulted. An empty result is treated as a cold
    /// cache: one [`sync`](Self::sync), then one more random query whose
    /// result is returned even if shorter than `count`. A non-empty but
    /// short result is returned as-is without syncing.
    pub async fn get_readings(&self, count: usize, tag: Option<&str>) -> CoreResult<Vec<Article>> {
        let articles = self.repo.get_random(count, tag).await?;

        if articles.len() >= count {
            return Ok(articles);
        }

        if articles.is_empty() {
            // Cold cache: refetch once, then whatever the store yields wins.
            self.sync().await?;
            return self.repo.get_random(count, tag).await;
        }

        Ok(articles)
    }

    /// Fetch the complete remote set of unfinished articles and upsert it
    /// into the local store as one batch.
    ///
    /// The remote is authoritative for every non-id field. Articles that
    /// disappeared remotely are not deleted locally.
    pub async fn sync(&self) -> CoreResult<()> {
        let articles = self.remote.fetch_articles().await?;
        log::info!("syncing {} articles into the local store", articles.len());
        self.repo.save_upsert(&articles).await
    }

    /// Enumerate the local store without touching the remote.
    ///
    /// Used for initial UI population; startup must be fast and work
    /// offline.
    pub async fn get_all(&self) -> CoreResult<Vec<Article>> {
        self.repo.get_all().await
    }

    /// Toggle an article's membership in the current week's reading list.
    ///
    /// Resolves and caches the current week on first use. Returns `true`
    /// if the article was added, `false` if removed. The full id list is
    /// pushed to the remote as an unconditional overwrite; the cached week
    /// is only updated once that call succeeds.
    pub async fn toggle_current_week(&self, article_id: &str) -> CoreResult<bool> {
        let mut cached = self.current_week.lock().await;

        if cached.is_none() {
            *cached = Some(self.remote.fetch_current_week().await?);
        }
        // Lock is held for the whole toggle; the week cannot vanish here.
        let week = cached.as_mut().ok_or(crate::CoreError::NoCurrentWeek)?;

        let mut new_ids: Vec<String> = week
            .reading_list_ids
            .iter()
            .filter(|id| id.as_str() != article_id)
            .cloned()
            .collect();

        let added = new_ids.len() == week.reading_list_ids.len();
        if added {
            new_ids.push(article_id.to_string());
        }

        self.remote
            .update_week_reading_list(&week.id, &new_ids)
            .await?;

        week.reading_list_ids = new_ids;
        Ok(added)
    }
}
