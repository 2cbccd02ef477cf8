//! Test helpers
//!
//! Mock trait implementations and factory shortcuts shared by the service
//! and storage tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{RemoteSource, Repository};
use crate::types::{Article, Week};

/// Article factory with sensible defaults
pub fn article(id: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        url: format!("https://example.com/{id}"),
        tags: tags.iter().map(ToString::to_string).collect(),
        fetched_at: Utc::now(),
    }
}

// ===== MockRepository =====

pub struct MockRepository {
    articles: RwLock<HashMap<String, Article>>,
    get_random_calls: RwLock<u32>,
    save_upsert_calls: RwLock<u32>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(HashMap::new()),
            get_random_calls: RwLock::new(0),
            save_upsert_calls: RwLock::new(0),
        }
    }

    pub async fn seed(&self, articles: Vec<Article>) {
        let mut map = self.articles.write().await;
        for a in articles {
            map.insert(a.id.clone(), a);
        }
    }

    pub async fn get_random_calls(&self) -> u32 {
        *self.get_random_calls.read().await
    }

    pub async fn save_upsert_calls(&self) -> u32 {
        *self.save_upsert_calls.read().await
    }
}

#[async_trait]
impl Repository for MockRepository {
    async fn save_upsert(&self, articles: &[Article]) -> CoreResult<()> {
        *self.save_upsert_calls.write().await += 1;
        self.seed(articles.to_vec()).await;
        Ok(())
    }

    async fn get_random(&self, count: usize, tag: Option<&str>) -> CoreResult<Vec<Article>> {
        *self.get_random_calls.write().await += 1;
        let articles = self.articles.read().await;
        Ok(articles
            .values()
            .filter(|a| match tag {
                Some(t) => a.tags.iter().any(|candidate| candidate.contains(t)),
                None => true,
            })
            .take(count)
            .cloned()
            .collect())
    }

    async fn get_all(&self) -> CoreResult<Vec<Article>> {
        Ok(self.articles.read().await.values().cloned().collect())
    }
}

// ===== MockRemoteSource =====

pub struct MockRemoteSource {
    articles: RwLock<Vec<Article>>,
    week: RwLock<Option<Week>>,
    /// Full id list of the most recent update call
    pushed_ids: RwLock<Option<Vec<String>>>,
    /// If Some, update calls fail with this message
    update_error: RwLock<Option<String>>,
    fetch_articles_calls: RwLock<u32>,
    fetch_week_calls: RwLock<u32>,
}

impl MockRemoteSource {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
            week: RwLock::new(None),
            pushed_ids: RwLock::new(None),
            update_error: RwLock::new(None),
            fetch_articles_calls: RwLock::new(0),
            fetch_week_calls: RwLock::new(0),
        }
    }

    pub async fn set_articles(&self, articles: Vec<Article>) {
        *self.articles.write().await = articles;
    }

    pub async fn set_week(&self, week: Week) {
        *self.week.write().await = Some(week);
    }

    pub async fn set_update_error(&self, msg: &str) {
        *self.update_error.write().await = Some(msg.to_string());
    }

    pub async fn set_update_error_off(&self) {
        *self.update_error.write().await = None;
    }

    pub async fn last_pushed_ids(&self) -> Option<Vec<String>> {
        self.pushed_ids.read().await.clone()
    }

    pub async fn fetch_articles_calls(&self) -> u32 {
        *self.fetch_articles_calls.read().await
    }

    pub async fn fetch_week_calls(&self) -> u32 {
        *self.fetch_week_calls.read().await
    }
}

#[async_trait]
impl RemoteSource for MockRemoteSource {
    async fn fetch_articles(&self) -> CoreResult<Vec<Article>> {
        *self.fetch_articles_calls.write().await += 1;
        Ok(self.articles.read().await.clone())
    }

    async fn fetch_current_week(&self) -> CoreResult<Week> {
        *self.fetch_week_calls.write().await += 1;
        self.week
            .read()
            .await
            .clone()
            .ok_or(CoreError::NoCurrentWeek)
    }

    async fn update_week_reading_list(
        &self,
        _week_id: &str,
        article_ids: &[String],
    ) -> CoreResult<()> {
        if let Some(ref msg) = *self.update_error.read().await {
            return Err(CoreError::Network(msg.clone()));
        }
        *self.pushed_ids.write().await = Some(article_ids.to_vec());
        Ok(())
    }
}
