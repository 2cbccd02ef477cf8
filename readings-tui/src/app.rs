//! Application main loop.
//!
//! Draw, then drain any messages posted by background tasks, then poll
//! the terminal for input with a 100ms timeout. Background work never
//! touches the model directly; it sends an [`AppMessage`] through the
//! channel and the loop applies it here.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Dispatcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &Dispatcher,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // Apply results from spawned tasks before blocking on input.
        while let Ok(msg) = rx.try_recv() {
            update::update(app, dispatcher, msg);
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, dispatcher, msg);
        }
    }

    Ok(())
}
