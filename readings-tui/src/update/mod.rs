//! Update layer: state transition logic
//!
//! The only place the model mutates. One message in, zero or more
//! dispatched commands out; commands report back as later messages, so
//! every mutation stays on the event loop.

mod detail;
mod filter;
mod list;

use crate::backend::Commands;
use crate::message::AppMessage;
use crate::model::{App, ViewState};

/// Process one application message.
pub fn update(app: &mut App, commands: &dyn Commands, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            // Never quit out of an in-progress filter edit.
            if app.view != ViewState::Filter {
                app.should_quit = true;
            }
        }

        AppMessage::Resize(width, height) => {
            app.width = width;
            app.height = height;
        }

        AppMessage::Digit(c) => {
            app.input_buffer.push(c);
        }

        AppMessage::List(list_msg) => {
            list::update(app, commands, list_msg);
        }

        AppMessage::Detail(detail_msg) => {
            detail::update(app, commands, detail_msg);
        }

        AppMessage::Filter(filter_msg) => {
            filter::update(app, filter_msg);
        }

        AppMessage::Status(message) => {
            app.set_status(message);
            commands.schedule_status_clear();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::Utc;
    use readings_core::Article;

    use super::*;
    use crate::message::{DetailMessage, FilterMessage, ListMessage};

    /// Records requested side effects instead of performing them.
    #[derive(Default)]
    struct RecordingCommands {
        toggled: RefCell<Vec<String>>,
        clears_scheduled: Cell<u32>,
        opened: RefCell<Vec<String>>,
    }

    impl Commands for RecordingCommands {
        fn toggle_reading(&self, article_id: String) {
            self.toggled.borrow_mut().push(article_id);
        }

        fn schedule_status_clear(&self) {
            self.clears_scheduled.set(self.clears_scheduled.get() + 1);
        }

        fn open_url(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    fn article(id: &str, tags: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            url: format!("https://example.com/{id}"),
            tags: tags.iter().map(ToString::to_string).collect(),
            fetched_at: Utc::now(),
        }
    }

    fn app_with(n: usize) -> App {
        let articles = (1..=n).map(|i| article(&i.to_string(), &[])).collect();
        App::new(articles, 80, 24)
    }

    fn press(app: &mut App, commands: &RecordingCommands, msgs: &[AppMessage]) {
        for msg in msgs {
            update(app, commands, msg.clone());
        }
    }

    #[test]
    fn cursor_stays_in_bounds_under_navigation() {
        let commands = RecordingCommands::default();
        let mut app = app_with(5);

        press(
            &mut app,
            &commands,
            &[
                AppMessage::List(ListMessage::CursorUp),
                AppMessage::Digit('9'),
                AppMessage::Digit('9'),
                AppMessage::List(ListMessage::CursorDown),
                AppMessage::List(ListMessage::CursorDown),
                AppMessage::Digit('7'),
                AppMessage::List(ListMessage::CursorUp),
                AppMessage::List(ListMessage::JumpBottom),
            ],
        );

        assert!(app.cursor < app.filtered.len());
    }

    #[test]
    fn numeric_prefix_multiplies_movement() {
        let commands = RecordingCommands::default();
        let mut app = app_with(30);

        press(
            &mut app,
            &commands,
            &[
                AppMessage::Digit('1'),
                AppMessage::Digit('2'),
                AppMessage::List(ListMessage::CursorDown),
            ],
        );

        assert_eq!(app.cursor, 12);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn jump_bottom_with_prefix_is_one_based() {
        let commands = RecordingCommands::default();
        let mut app = app_with(10);

        press(
            &mut app,
            &commands,
            &[
                AppMessage::Digit('5'),
                AppMessage::List(ListMessage::JumpBottom),
            ],
        );
        assert_eq!(app.cursor, 4);

        update(
            &mut app,
            &commands,
            AppMessage::List(ListMessage::JumpBottom),
        );
        assert_eq!(app.cursor, 9);
    }

    #[test]
    fn jump_top_resets_cursor_and_scroll() {
        let commands = RecordingCommands::default();
        let mut app = app_with(100);

        press(
            &mut app,
            &commands,
            &[
                AppMessage::Digit('9'),
                AppMessage::Digit('0'),
                AppMessage::List(ListMessage::CursorDown),
            ],
        );
        assert!(app.scroll_offset > 0);

        update(&mut app, &commands, AppMessage::List(ListMessage::JumpTop));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn scroll_follows_cursor_below_window() {
        let commands = RecordingCommands::default();
        let mut app = app_with(100);
        let window = app.window_height();

        press(
            &mut app,
            &commands,
            &[
                AppMessage::Digit('5'),
                AppMessage::Digit('0'),
                AppMessage::List(ListMessage::CursorDown),
            ],
        );

        assert_eq!(app.cursor, 50);
        assert_eq!(app.scroll_offset, 50 - window + 1);

        // And back above the window.
        press(
            &mut app,
            &commands,
            &[
                AppMessage::Digit('4'),
                AppMessage::Digit('9'),
                AppMessage::List(ListMessage::CursorUp),
            ],
        );
        assert_eq!(app.cursor, 1);
        assert_eq!(app.scroll_offset, 1);
    }

    #[test]
    fn unrecognized_key_clears_prefix() {
        let commands = RecordingCommands::default();
        let mut app = app_with(5);

        press(
            &mut app,
            &commands,
            &[
                AppMessage::Digit('4'),
                AppMessage::List(ListMessage::ClearPrefix),
                AppMessage::List(ListMessage::CursorDown),
            ],
        );

        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn toggle_dispatches_item_at_cursor() {
        let commands = RecordingCommands::default();
        let mut app = app_with(3);
        app.cursor = 1;

        update(
            &mut app,
            &commands,
            AppMessage::List(ListMessage::ToggleReading),
        );

        assert_eq!(*commands.toggled.borrow(), vec!["2".to_string()]);
    }

    #[test]
    fn toggle_on_empty_list_is_a_noop() {
        let commands = RecordingCommands::default();
        let mut app = app_with(0);

        update(
            &mut app,
            &commands,
            AppMessage::List(ListMessage::ToggleReading),
        );

        assert!(commands.toggled.borrow().is_empty());
    }

    #[test]
    fn quit_is_ignored_while_filtering() {
        let commands = RecordingCommands::default();
        let mut app = app_with(3);

        update(&mut app, &commands, AppMessage::List(ListMessage::OpenFilter));
        update(&mut app, &commands, AppMessage::Quit);
        assert!(!app.should_quit);

        update(&mut app, &commands, AppMessage::Filter(FilterMessage::Cancel));
        update(&mut app, &commands, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn filter_cancel_restores_previous_selection() {
        let commands = RecordingCommands::default();
        let articles = vec![
            article("1", &["go"]),
            article("2", &["rust"]),
            article("3", &["go", "rust"]),
        ];
        let mut app = App::new(articles, 80, 24);

        update(&mut app, &commands, AppMessage::List(ListMessage::OpenFilter));
        press(
            &mut app,
            &commands,
            &[
                AppMessage::Filter(FilterMessage::ToggleTag), // "go"
                AppMessage::Filter(FilterMessage::CursorDown),
                AppMessage::Filter(FilterMessage::ToggleTag), // "rust"
                AppMessage::Filter(FilterMessage::Cancel),
            ],
        );

        assert_eq!(app.view, ViewState::List);
        assert!(app.selected_tags.is_empty());
        assert!(app.backup_selected_tags.is_none());
    }

    #[test]
    fn filter_commit_keeps_matching_items_in_order() {
        let commands = RecordingCommands::default();
        let articles = vec![
            article("1", &["go"]),
            article("2", &["rust"]),
            article("3", &["go", "rust"]),
        ];
        let mut app = App::new(articles, 80, 24);

        update(&mut app, &commands, AppMessage::List(ListMessage::OpenFilter));
        press(
            &mut app,
            &commands,
            &[
                AppMessage::Filter(FilterMessage::ToggleTag), // tags sorted: "go" first
                AppMessage::Filter(FilterMessage::Commit),
            ],
        );

        let ids: Vec<&str> = app.filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(app.view, ViewState::List);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.scroll_offset, 0);
        assert!(app.backup_selected_tags.is_none());
    }

    #[test]
    fn empty_selection_shows_everything() {
        let commands = RecordingCommands::default();
        let articles = vec![
            article("1", &["go"]),
            article("2", &["rust"]),
            article("3", &["go", "rust"]),
        ];
        let mut app = App::new(articles, 80, 24);

        // Select then deselect "go", commit with nothing selected.
        update(&mut app, &commands, AppMessage::List(ListMessage::OpenFilter));
        press(
            &mut app,
            &commands,
            &[
                AppMessage::Filter(FilterMessage::ToggleTag),
                AppMessage::Filter(FilterMessage::ToggleTag),
                AppMessage::Filter(FilterMessage::Commit),
            ],
        );

        let ids: Vec<&str> = app.filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn select_all_marks_every_tag() {
        let commands = RecordingCommands::default();
        let articles = vec![article("1", &["go"]), article("2", &["rust"])];
        let mut app = App::new(articles, 80, 24);

        update(&mut app, &commands, AppMessage::List(ListMessage::OpenFilter));
        update(
            &mut app,
            &commands,
            AppMessage::Filter(FilterMessage::SelectAll),
        );

        assert_eq!(app.selected_tags.len(), 2);
    }

    #[test]
    fn status_message_schedules_its_expiry() {
        let commands = RecordingCommands::default();
        let mut app = app_with(1);

        update(
            &mut app,
            &commands,
            AppMessage::Status("Added to reading list".into()),
        );
        assert_eq!(app.status_message.as_deref(), Some("Added to reading list"));
        assert_eq!(commands.clears_scheduled.get(), 1);

        update(&mut app, &commands, AppMessage::ClearStatus);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn resize_updates_dimensions_only() {
        let commands = RecordingCommands::default();
        let mut app = app_with(3);
        app.cursor = 2;

        update(&mut app, &commands, AppMessage::Resize(120, 40));

        assert_eq!((app.width, app.height), (120, 40));
        assert_eq!(app.view, ViewState::List);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn detail_opens_url_at_cursor() {
        let commands = RecordingCommands::default();
        let mut app = app_with(3);
        app.cursor = 2;

        update(&mut app, &commands, AppMessage::List(ListMessage::OpenDetail));
        assert_eq!(app.view, ViewState::Detail);

        update(
            &mut app,
            &commands,
            AppMessage::Detail(DetailMessage::OpenUrl),
        );
        assert_eq!(*commands.opened.borrow(), vec!["https://example.com/3"]);

        update(&mut app, &commands, AppMessage::Detail(DetailMessage::Back));
        assert_eq!(app.view, ViewState::List);
        assert_eq!(app.cursor, 2);
    }
}
