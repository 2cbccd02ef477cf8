//! Async command dispatcher

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use readings_core::ReadingsService;

use crate::message::AppMessage;

/// How long a status message stays visible.
pub const STATUS_VISIBLE: Duration = Duration::from_secs(2);

/// Side effects the update layer may request.
///
/// A trait seam so update transitions can be tested without a runtime or
/// a real service behind them.
pub trait Commands {
    /// Toggle an article in the current week's reading list; the outcome
    /// arrives later as a status message.
    fn toggle_reading(&self, article_id: String);

    /// Schedule the status-clear follow-up message.
    fn schedule_status_clear(&self);

    /// Open a url with the host's default handler.
    fn open_url(&self, url: &str);
}

/// Production dispatcher: spawns commands on the shared tokio runtime and
/// feeds their results back through the event-loop channel.
pub struct Dispatcher {
    service: Arc<ReadingsService>,
    handle: tokio::runtime::Handle,
    tx: UnboundedSender<AppMessage>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(
        service: Arc<ReadingsService>,
        handle: tokio::runtime::Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            service,
            handle,
            tx,
        }
    }
}

impl Commands for Dispatcher {
    fn toggle_reading(&self, article_id: String) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        // Runs to completion even if the user navigates away; only the
        // resulting message re-enters the loop.
        self.handle.spawn(async move {
            let msg = match service.toggle_current_week(&article_id).await {
                Ok(true) => AppMessage::Status("Added to reading list".into()),
                Ok(false) => AppMessage::Status("Removed from reading list".into()),
                Err(e) => AppMessage::Status(format!("Error: {e}")),
            };
            let _ = tx.send(msg);
        });
    }

    fn schedule_status_clear(&self) {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(STATUS_VISIBLE).await;
            let _ = tx.send(AppMessage::ClearStatus);
        });
    }

    fn open_url(&self, url: &str) {
        super::open_url(url);
    }
}
