//! SQLite-backed article repository
//!
//! The cache is stored in a SQLite database at
//! `~/.config/readings/readings.sqlite`. Tags are kept as a JSON string
//! column; the dataset is a personal reading list, so no tag index is
//! maintained.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{CoreError, CoreResult};
use crate::traits::Repository;
use crate::types::Article;

const DB_FILE_NAME: &str = "readings.sqlite";
const CONFIG_DIR_NAME: &str = "readings";

/// SQLite implementation of the article repository.
///
/// The connection is wrapped in a `Mutex` for interior mutability and to
/// satisfy `Sync`; the design issues at most one concurrent writer.
pub struct SqliteRepository {
    conn: Mutex<Connection>,
}

impl SqliteRepository {
    /// Open the database at the default path, creating it if needed.
    pub fn open() -> CoreResult<Self> {
        Self::open_at(&Self::default_db_path()?)
    }

    /// Open the database at a specific path (used by tests).
    pub fn open_at(path: &Path) -> CoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Storage(format!("failed to create db directory {parent:?}: {e}"))
            })?;
        }

        log::debug!("opening article cache at {path:?}");
        let conn = Connection::open(path)?;
        let repo = Self {
            conn: Mutex::new(conn),
        };
        repo.migrate()?;
        Ok(repo)
    }

    /// Open an in-memory database (used by tests).
    pub fn open_in_memory() -> CoreResult<Self> {
        let repo = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        repo.migrate()?;
        Ok(repo)
    }

    fn default_db_path() -> CoreResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Storage("failed to resolve home directory".into()))?;
        Ok(home
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join(DB_FILE_NAME))
    }

    fn migrate(&self) -> CoreResult<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS articles (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                url TEXT NOT NULL,
                tags TEXT,
                fetched_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn lock_conn(&self) -> CoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| CoreError::Storage("article cache lock poisoned".into()))
    }

    fn row_to_article(row: &rusqlite::Row) -> rusqlite::Result<Article> {
        let tags_json: Option<String> = row.get(3)?;
        // Unreadable tag JSON degrades to no tags rather than failing the row.
        let tags = tags_json
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default();

        let fetched_at: String = row.get(4)?;
        let fetched_at = DateTime::parse_from_rfc3339(&fetched_at)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Article {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            tags,
            fetched_at,
        })
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn save_upsert(&self, articles: &[Article]) -> CoreResult<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO articles (id, title, url, tags, fetched_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT (id) DO UPDATE SET
                     title = excluded.title,
                     url = excluded.url,
                     tags = excluded.tags,
                     fetched_at = excluded.fetched_at",
            )?;
            for article in articles {
                let tags_json = serde_json::to_string(&article.tags).map_err(|e| {
                    CoreError::Storage(format!(
                        "failed to serialize tags for article {}: {e}",
                        article.id
                    ))
                })?;
                stmt.execute(params![
                    article.id,
                    article.title,
                    article.url,
                    tags_json,
                    article.fetched_at.to_rfc3339(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    async fn get_random(&self, count: usize, tag: Option<&str>) -> CoreResult<Vec<Article>> {
        let conn = self.lock_conn()?;

        // A fn item mapper keeps both arms the same type.
        let mut stmt;
        let rows = match tag {
            Some(tag) if !tag.is_empty() => {
                stmt = conn.prepare(
                    "SELECT id, title, url, tags, fetched_at FROM articles
                     WHERE tags LIKE ?1 ORDER BY random() LIMIT ?2",
                )?;
                stmt.query_map(
                    params![format!("%{tag}%"), count as i64],
                    Self::row_to_article,
                )?
            }
            _ => {
                stmt = conn.prepare(
                    "SELECT id, title, url, tags, fetched_at FROM articles
                     ORDER BY random() LIMIT ?1",
                )?;
                stmt.query_map(params![count as i64], Self::row_to_article)?
            }
        };

        let mut articles = Vec::new();
        for row in rows {
            articles.push(row?);
        }
        Ok(articles)
    }

    async fn get_all(&self) -> CoreResult<Vec<Article>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare("SELECT id, title, url, tags, fetched_at FROM articles")?;
        let rows = stmt.query_map([], Self::row_to_article)?;

        let mut articles = Vec::new();
        for row in rows {
            articles.push(row?);
        }
        Ok(articles)
    }
}
