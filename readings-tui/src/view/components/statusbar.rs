//! Bottom status bar component.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, ViewState};
use crate::view::theme::Styles;

/// Render key hints for the active view, the pending numeric prefix,
/// and any transient status message.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if !app.input_buffer.is_empty() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(app.input_buffer.clone(), Styles::hint_key()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.view {
        ViewState::List => vec![
            ("j/k", "Move"),
            ("g/G", "Top/Bottom"),
            ("Enter", "Toggle reading"),
            ("l", "Detail"),
            ("/", "Filter"),
            ("q", "Quit"),
        ],
        ViewState::Detail => vec![
            ("Enter", "Open in browser"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
        ViewState::Filter => vec![
            ("j/k", "Move"),
            ("Space", "Toggle"),
            ("→", "All"),
            ("Enter", "Apply"),
            ("Esc", "Cancel"),
        ],
    }
}
