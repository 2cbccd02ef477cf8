//! Single-article detail page.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(article) = app.filtered.get(app.cursor) else {
        return;
    };

    let title = if article.title.is_empty() {
        "Untitled"
    } else {
        &article.title
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {title}"), Styles::title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  URL      ", Styles::muted()),
            Span::raw(article.url.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Fetched  ", Styles::muted()),
            Span::raw(article.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string()),
        ]),
    ];
    if !article.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  Tags     ", Styles::muted()),
            Span::styled(article.tags.join(", "), Styles::tag()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
