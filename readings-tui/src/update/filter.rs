//! Filter view transitions: tag selection with commit/cancel semantics.

use crate::message::FilterMessage;
use crate::model::{App, ViewState};

pub fn update(app: &mut App, msg: FilterMessage) {
    match msg {
        FilterMessage::CursorUp => {
            if app.cursor > 0 {
                app.cursor -= 1;
                if app.cursor < app.scroll_offset {
                    app.scroll_offset = app.cursor;
                }
            }
        }

        FilterMessage::CursorDown => {
            if app.cursor + 1 < app.tags.len() {
                app.cursor += 1;
                if app.cursor >= app.scroll_offset + app.window_height() {
                    app.scroll_offset += 1;
                }
            }
        }

        FilterMessage::ToggleTag => {
            if let Some(tag) = app.tags.get(app.cursor).cloned() {
                if !app.selected_tags.remove(&tag) {
                    app.selected_tags.insert(tag);
                }
            }
        }

        FilterMessage::SelectAll => {
            app.selected_tags = app.tags.iter().cloned().collect();
        }

        FilterMessage::Commit => {
            app.apply_filter();
            leave(app);
        }

        FilterMessage::Cancel => {
            if let Some(previous) = app.backup_selected_tags.take() {
                app.selected_tags = previous;
            }
            leave(app);
        }
    }
}

fn leave(app: &mut App) {
    app.view = ViewState::List;
    app.cursor = 0;
    app.scroll_offset = 0;
    app.backup_selected_tags = None;
}
