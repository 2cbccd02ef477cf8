//! Configuration loading and persistence
//!
//! Database ids live in `~/.config/readings/config.toml`; the Notion API
//! key lives in the OS keychain (overridable through the
//! `READINGS_NOTION_TOKEN` environment variable for headless syncs).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

const CONFIG_DIR_NAME: &str = "readings";
const CONFIG_FILE_NAME: &str = "config.toml";

const KEYRING_SERVICE: &str = "readings";
const KEYRING_USER: &str = "notion-api-key";
const TOKEN_ENV_VAR: &str = "READINGS_NOTION_TOKEN";

/// Remote source configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: String,
    pub articles_db_id: String,
    pub weeks_db_id: String,
}

/// On-disk shape of the config file (the API key never touches disk)
#[derive(Debug, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    notion_database_id: String,
    #[serde(default)]
    notion_weeks_db_id: String,
}

impl Config {
    /// Load configuration from the config file and the keychain.
    ///
    /// A missing config file yields empty ids; [`validate`](Self::validate)
    /// decides whether that is acceptable.
    pub fn load() -> CoreResult<Self> {
        let mut cfg = Self::default();

        let path = config_file_path()?;
        if path.exists() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| CoreError::Config(format!("failed to read {path:?}: {e}")))?;
            let file: ConfigFile = toml::from_str(&text)
                .map_err(|e| CoreError::Config(format!("failed to parse {path:?}: {e}")))?;
            cfg.articles_db_id = clean_database_id(&file.notion_database_id);
            cfg.weeks_db_id = clean_database_id(&file.notion_weeks_db_id);
        }

        cfg.api_key = load_api_key();
        Ok(cfg)
    }

    /// Persist the config file and store the API key in the keychain.
    pub fn save(&self) -> CoreResult<()> {
        let path = config_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Config(format!("failed to create config directory: {e}"))
            })?;
        }

        let file = ConfigFile {
            notion_database_id: self.articles_db_id.clone(),
            notion_weeks_db_id: self.weeks_db_id.clone(),
        };
        let text = toml::to_string_pretty(&file)
            .map_err(|e| CoreError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&path, text)
            .map_err(|e| CoreError::Config(format!("failed to write {path:?}: {e}")))?;

        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
            .map_err(|e| CoreError::Config(format!("keychain unavailable: {e}")))?;
        entry
            .set_password(&self.api_key)
            .map_err(|e| CoreError::Config(format!("failed to store API key: {e}")))?;

        Ok(())
    }

    /// Checks that every field needed to reach the remote source is present.
    pub fn validate(&self) -> CoreResult<()> {
        if self.api_key.is_empty() {
            return Err(CoreError::Config(format!(
                "Notion API key not found in the keychain or ${TOKEN_ENV_VAR}"
            )));
        }
        if self.articles_db_id.is_empty() {
            return Err(CoreError::Config(format!(
                "notion_database_id missing from {CONFIG_FILE_NAME}"
            )));
        }
        if self.weeks_db_id.is_empty() {
            return Err(CoreError::Config(format!(
                "notion_weeks_db_id missing from {CONFIG_FILE_NAME}"
            )));
        }
        Ok(())
    }
}

fn config_file_path() -> CoreResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CoreError::Config("failed to resolve home directory".into()))?;
    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

fn load_api_key() -> String {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.is_empty() {
            return token;
        }
    }
    keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .and_then(|entry| entry.get_password())
        .unwrap_or_default()
}

/// Extract a database id from a pasted Notion URL, if necessary.
///
/// Accepts a bare id or a full `notion.so` URL (with or without a scheme,
/// a `Name-<id>` slug, or query params) and returns the id part.
#[must_use]
pub fn clean_database_id(id: &str) -> String {
    let id = id.trim();

    if id.contains("notion.so") {
        let after_host = id
            .rsplit('/')
            .next()
            .unwrap_or(id)
            .trim_end_matches('/');
        let last_part = after_host.split('?').next().unwrap_or(after_host);

        // UUID with dashes
        if last_part.len() == 36 {
            return last_part.to_string();
        }
        // Name-ID slug: the id is the trailing 32 hex chars. Multibyte
        // slug text can put the cut inside a char; pass such input through.
        if last_part.len() >= 32 {
            let cut = last_part.len() - 32;
            if last_part.is_char_boundary(cut) {
                return last_part[cut..].to_string();
            }
        }
        return last_part.to_string();
    }

    // Bare id pasted with query params
    id.split('?').next().unwrap_or(id).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_database_id_passes_bare_ids_through() {
        assert_eq!(
            clean_database_id("a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"),
            "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"
        );
    }

    #[test]
    fn clean_database_id_extracts_from_url() {
        assert_eq!(
            clean_database_id(
                "https://www.notion.so/myspace/a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4?v=abc"
            ),
            "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"
        );
    }

    #[test]
    fn clean_database_id_extracts_from_slug() {
        assert_eq!(
            clean_database_id(
                "https://www.notion.so/Readings-a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"
            ),
            "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"
        );
    }

    #[test]
    fn clean_database_id_strips_query_params_without_host() {
        assert_eq!(
            clean_database_id("a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4?v=123"),
            "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"
        );
    }

    #[test]
    fn clean_database_id_tolerates_multibyte_slugs() {
        // 34 bytes; the 32-char cut would land inside the two-byte "é".
        let slug = format!("xé{}", "a".repeat(31));
        let cleaned = clean_database_id(&format!("https://www.notion.so/{slug}"));
        assert_eq!(cleaned, slug);
    }

    #[test]
    fn validate_reports_the_first_missing_field() {
        let cfg = Config {
            api_key: "secret".into(),
            articles_db_id: String::new(),
            weeks_db_id: String::new(),
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("notion_database_id"));
    }
}
