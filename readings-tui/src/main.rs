//! Readings TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA) pattern:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: async command dispatch into readings-core (`backend/`)
//!
//! The binary has three entry points: the default interactive browser, a
//! hidden `sync` maintenance command, and a one-time `setup` flow.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod setup;
mod update;
mod util;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use tokio::sync::mpsc;

use readings_core::notion::NotionClient;
use readings_core::storage::SqliteRepository;
use readings_core::{Config, ReadingsService};

use backend::Dispatcher;
use util::{init_terminal, restore_terminal};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        None => run_tui(),
        Some("sync") => run_sync(),
        Some("setup") => setup::run(),
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: readings [sync|setup]");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Build the service stack shared by the interactive and sync paths.
fn build_service(config: &Config) -> Result<Arc<ReadingsService>> {
    let repo = Arc::new(SqliteRepository::open().context("failed to open the article cache")?);
    let remote = Arc::new(NotionClient::new(
        config.api_key.clone(),
        config.articles_db_id.clone(),
        config.weeks_db_id.clone(),
    ));
    Ok(Arc::new(ReadingsService::new(repo, remote)))
}

/// Default entry point: the interactive browser.
fn run_tui() -> Result<()> {
    let config = Config::load()
        .and_then(|c| c.validate().map(|()| c))
        .context("configuration invalid; run 'readings setup' to configure")?;

    let service = build_service(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    // Keep the local cache fresh for the next launch. Fully detached; a
    // failure here never stops the browser.
    if let Err(e) = backend::trigger_background_sync() {
        log::warn!("failed to trigger background sync: {e}");
    }

    // 1. Initial population: local store only, works offline.
    let mut articles = runtime.block_on(service.get_all())?;
    articles.shuffle(&mut rand::thread_rng());

    // 2. Wire the async command channel.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(service, runtime.handle().clone(), tx);

    // 3. Initialize the terminal and the application state.
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;
    let mut app = model::App::new(articles, size.width, size.height);

    // 4. Run the main loop.
    let result = app::run(&mut terminal, &mut app, &dispatcher, &mut rx);

    // 5. Restore the terminal whether or not the loop succeeded.
    restore_terminal(&mut terminal)?;

    result
}

/// Hidden maintenance entry point: one non-interactive sync.
fn run_sync() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().and_then(|c| c.validate().map(|()| c))?;
    let service = build_service(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(service.sync())
        .context("sync failed")?;

    log::info!("sync finished");
    Ok(())
}
