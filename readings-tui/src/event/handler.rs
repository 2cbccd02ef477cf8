//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::{AppMessage, DetailMessage, FilterMessage, ListMessage};
use crate::model::{App, ViewState};

/// Poll for one event with a timeout.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) => handle_key_event(key, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events; Release/Repeat would double keys on Windows terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl-C always quits, except while an in-progress filter edit could be
    // lost by accident.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return if app.view == ViewState::Filter {
            AppMessage::Noop
        } else {
            AppMessage::Quit
        };
    }

    match app.view {
        ViewState::List => handle_list_keys(key),
        ViewState::Detail => handle_detail_keys(key),
        ViewState::Filter => handle_filter_keys(key),
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Digits feed the vim-style repeat prefix and do nothing else.
        KeyCode::Char(c) if c.is_ascii_digit() => AppMessage::Digit(c),

        KeyCode::Char('q') => AppMessage::Quit,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::CursorDown),
        KeyCode::Char('g') => AppMessage::List(ListMessage::JumpTop),
        KeyCode::Char('G') => AppMessage::List(ListMessage::JumpBottom),
        KeyCode::Enter => AppMessage::List(ListMessage::ToggleReading),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::List(ListMessage::OpenDetail),
        KeyCode::Char('/') => AppMessage::List(ListMessage::OpenFilter),
        _ => AppMessage::List(ListMessage::ClearPrefix),
    }
}

fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // `q` quits from anywhere except the filter editor.
        KeyCode::Char('q') => AppMessage::Quit,
        KeyCode::Esc => AppMessage::Detail(DetailMessage::Back),
        KeyCode::Enter => AppMessage::Detail(DetailMessage::OpenUrl),
        _ => AppMessage::Noop,
    }
}

fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Filter(FilterMessage::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Filter(FilterMessage::CursorDown),
        KeyCode::Char(' ') => AppMessage::Filter(FilterMessage::ToggleTag),
        KeyCode::Right => AppMessage::Filter(FilterMessage::SelectAll),
        KeyCode::Enter => AppMessage::Filter(FilterMessage::Commit),
        KeyCode::Esc => AppMessage::Filter(FilterMessage::Cancel),
        // `q` included: quitting is disabled while filtering.
        _ => AppMessage::Noop,
    }
}
