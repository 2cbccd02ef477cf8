//! Notion HTTP client

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{CoreError, CoreResult};
use crate::traits::RemoteSource;
use crate::types::{Article, Week};

use super::types::{Page, QueryResponse};

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

// Property names in the source databases.
const PROP_TITLE: &str = "Name";
const PROP_URL: &str = "URL";
const PROP_TAGS: &str = "Tags";
const PROP_DONE: &str = "Done";
const PROP_SPAN: &str = "🗓️ Span";
const PROP_READING_LIST: &str = "📑 Reading List";

/// How many week records to scan for the current one, most recent first.
const WEEK_SCAN_PAGE_SIZE: u32 = 20;

/// Notion API client for the readings and weeks databases
pub struct NotionClient {
    http: reqwest::Client,
    token: String,
    articles_db: String,
    weeks_db: String,
}

impl NotionClient {
    #[must_use]
    pub fn new(token: String, articles_db: String, weeks_db: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            articles_db,
            weeks_db,
        }
    }

    /// Execute a request, log it, and map transport failures.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
    ) -> CoreResult<String> {
        log::debug!("[notion] {action}");

        let response = request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("[notion] {action} -> HTTP {status}");

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or(body);
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    async fn query_database(&self, db_id: &str, body: Value) -> CoreResult<QueryResponse> {
        let text = self
            .execute(
                self.http
                    .post(format!("{API_BASE}/databases/{db_id}/query"))
                    .json(&body),
                &format!("query database {db_id}"),
            )
            .await?;
        serde_json::from_str(&text).map_err(|e| CoreError::Parse(e.to_string()))
    }
}

#[async_trait]
impl RemoteSource for NotionClient {
    async fn fetch_articles(&self) -> CoreResult<Vec<Article>> {
        let mut articles = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({
                "filter": {
                    "property": PROP_DONE,
                    "checkbox": { "does_not_equal": true }
                }
            });
            if let Some(ref cursor) = cursor {
                body["start_cursor"] = json!(cursor);
            }

            let page = self.query_database(&self.articles_db, body).await?;

            for result in page.results {
                match map_article(result) {
                    Some(article) => articles.push(article),
                    None => log::warn!("[notion] skipping page without a usable url"),
                }
            }

            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
            if cursor.is_none() {
                break;
            }
        }

        Ok(articles)
    }

    async fn fetch_current_week(&self) -> CoreResult<Week> {
        // Recent weeks first; the Name column follows the date.
        let body = json!({
            "sorts": [{ "property": PROP_TITLE, "direction": "descending" }],
            "page_size": WEEK_SCAN_PAGE_SIZE
        });

        let page = self.query_database(&self.weeks_db, body).await?;
        let now = Utc::now();

        page.results
            .into_iter()
            .find(|result| {
                result
                    .properties
                    .get(PROP_SPAN)
                    .and_then(|prop| prop.date.as_ref())
                    .is_some_and(|date| date.contains(now))
            })
            .map(map_week)
            .ok_or(CoreError::NoCurrentWeek)
    }

    async fn update_week_reading_list(
        &self,
        week_id: &str,
        article_ids: &[String],
    ) -> CoreResult<()> {
        let relations: Vec<Value> = article_ids.iter().map(|id| json!({ "id": id })).collect();
        let body = json!({
            "properties": {
                PROP_READING_LIST: { "relation": relations }
            }
        });

        self.execute(
            self.http
                .patch(format!("{API_BASE}/pages/{week_id}"))
                .json(&body),
            &format!("update week {week_id}"),
        )
        .await?;
        Ok(())
    }
}

/// Map a page from the readings database to an [`Article`].
///
/// Returns `None` for pages with no usable target url; title and tags are
/// best-effort so one malformed page never aborts the batch.
fn map_article(page: Page) -> Option<Article> {
    let title = page
        .properties
        .get(PROP_TITLE)
        .and_then(|prop| prop.title.as_ref())
        .map(|fragments| {
            fragments
                .iter()
                .map(|t| t.plain_text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    let url = page
        .properties
        .get(PROP_URL)
        .and_then(|prop| prop.url.clone())
        .filter(|url| !url.is_empty())
        .or(page.url)?;

    let tags = page
        .properties
        .get(PROP_TAGS)
        .and_then(|prop| prop.multi_select.as_ref())
        .map(|options| options.iter().map(|o| o.name.clone()).collect())
        .unwrap_or_default();

    Some(Article {
        id: page.id,
        title,
        url,
        tags,
        fetched_at: Utc::now(),
    })
}

/// Map a page from the weeks database to a [`Week`].
fn map_week(page: Page) -> Week {
    let reading_list_ids = page
        .properties
        .get(PROP_READING_LIST)
        .and_then(|prop| prop.relation.as_ref())
        .map(|relations| relations.iter().map(|r| r.id.clone()).collect())
        .unwrap_or_default();

    Week {
        id: page.id,
        reading_list_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: Value) -> Page {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn maps_title_fragments_url_and_tags() {
        let article = map_article(page(json!({
            "id": "page-1",
            "url": "https://notion.so/page-1",
            "properties": {
                "Name": { "type": "title", "title": [
                    { "plain_text": "Async " },
                    { "plain_text": "Rust" }
                ]},
                "URL": { "type": "url", "url": "https://example.com/async" },
                "Tags": { "type": "multi_select", "multi_select": [
                    { "name": "rust" },
                    { "name": "async" }
                ]}
            }
        })))
        .unwrap();

        assert_eq!(article.id, "page-1");
        assert_eq!(article.title, "Async Rust");
        assert_eq!(article.url, "https://example.com/async");
        assert_eq!(article.tags, vec!["rust", "async"]);
    }

    #[test]
    fn falls_back_to_page_url() {
        let article = map_article(page(json!({
            "id": "page-2",
            "url": "https://notion.so/page-2",
            "properties": {
                "Name": { "type": "title", "title": [] }
            }
        })))
        .unwrap();

        assert_eq!(article.url, "https://notion.so/page-2");
        assert_eq!(article.title, "");
        assert!(article.tags.is_empty());
    }

    #[test]
    fn skips_page_without_any_url() {
        assert!(map_article(page(json!({
            "id": "page-3",
            "properties": {}
        })))
        .is_none());
    }

    #[test]
    fn maps_week_relations_in_order() {
        let week = map_week(page(json!({
            "id": "week-1",
            "properties": {
                "📑 Reading List": { "type": "relation", "relation": [
                    { "id": "a" }, { "id": "b" }, { "id": "c" }
                ]}
            }
        })));

        assert_eq!(week.id, "week-1");
        assert_eq!(week.reading_list_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn week_without_relation_property_is_empty() {
        let week = map_week(page(json!({ "id": "week-2", "properties": {} })));
        assert!(week.reading_list_ids.is_empty());
    }
}
