//! Interactive first-run setup.
//!
//! Prompts for the Notion API key and the two database ids, then writes
//! the config file and stores the key in the OS keychain. Pasted Notion
//! URLs are accepted wherever an id is expected.

use std::io::{self, Write};

use anyhow::{Context, Result};
use readings_core::config::clean_database_id;
use readings_core::Config;

pub fn run() -> Result<()> {
    println!("readings setup");
    println!("Values are stored in ~/.config/readings/config.toml;");
    println!("the API key goes to the OS keychain.");
    println!();

    let existing = Config::load().unwrap_or_default();

    let api_key = prompt_with_default(
        "Notion API key",
        if existing.api_key.is_empty() {
            None
        } else {
            Some("(keep current)")
        },
    )?;
    let api_key = if api_key.is_empty() {
        existing.api_key.clone()
    } else {
        api_key
    };

    let articles_db_id = prompt_id("Articles database id (or URL)", &existing.articles_db_id)?;
    let weeks_db_id = prompt_id("Weeks database id (or URL)", &existing.weeks_db_id)?;

    let config = Config {
        api_key,
        articles_db_id,
        weeks_db_id,
    };
    config.validate().context("setup incomplete")?;
    config.save().context("failed to save configuration")?;

    println!();
    println!("Saved. Run `readings` to start.");
    Ok(())
}

fn prompt_id(label: &str, current: &str) -> Result<String> {
    let default = if current.is_empty() {
        None
    } else {
        Some(current)
    };
    let input = prompt_with_default(label, default)?;
    if input.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(clean_database_id(&input))
    }
}

fn prompt_with_default(label: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(d) => print!("{label} [{d}]: "),
        None => print!("{label}: "),
    }
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}
