//! List view transitions: vim-style movement with numeric prefixes.

use crate::backend::Commands;
use crate::message::ListMessage;
use crate::model::{App, ViewState};

pub fn update(app: &mut App, commands: &dyn Commands, msg: ListMessage) {
    match msg {
        ListMessage::CursorUp => {
            let count = app.take_prefix().unwrap_or(1);
            move_up(app, count);
        }

        ListMessage::CursorDown => {
            let count = app.take_prefix().unwrap_or(1);
            move_down(app, count);
        }

        ListMessage::JumpTop => match app.take_prefix() {
            // `g` goes home, `<n>g` goes to line n.
            None => {
                app.cursor = 0;
                app.scroll_offset = 0;
            }
            Some(line) => jump_to_line(app, line),
        },

        ListMessage::JumpBottom => match app.take_prefix() {
            None => {
                let len = app.filtered.len();
                if len > 0 {
                    app.cursor = len - 1;
                    recenter_if_outside(app);
                }
            }
            Some(line) => jump_to_line(app, line),
        },

        ListMessage::ToggleReading => {
            app.input_buffer.clear();
            if let Some(item) = app.filtered.get(app.cursor) {
                commands.toggle_reading(item.id.clone());
            }
        }

        ListMessage::OpenDetail => {
            app.input_buffer.clear();
            if !app.filtered.is_empty() {
                app.view = ViewState::Detail;
            }
        }

        ListMessage::OpenFilter => {
            app.input_buffer.clear();
            app.backup_selected_tags = Some(app.selected_tags.clone());
            app.view = ViewState::Filter;
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        ListMessage::ClearPrefix => {
            app.input_buffer.clear();
        }
    }
}

fn move_up(app: &mut App, count: usize) {
    app.cursor = app.cursor.saturating_sub(count);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    }
}

fn move_down(app: &mut App, count: usize) {
    let len = app.filtered.len();
    if len == 0 {
        return;
    }
    app.cursor = (app.cursor + count).min(len - 1);
    let window = app.window_height();
    if app.cursor >= app.scroll_offset + window {
        app.scroll_offset = app.cursor + 1 - window;
    }
}

/// One-based jump, clamped to the last item.
fn jump_to_line(app: &mut App, line: usize) {
    let len = app.filtered.len();
    if len == 0 {
        return;
    }
    app.cursor = (line - 1).min(len - 1);
    recenter_if_outside(app);
}

fn recenter_if_outside(app: &mut App) {
    let window = app.window_height();
    if app.cursor < app.scroll_offset || app.cursor >= app.scroll_offset + window {
        app.scroll_offset = app.cursor.saturating_sub(window / 2);
    }
}
