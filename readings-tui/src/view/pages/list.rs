//! Article list page.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.filtered.is_empty() {
        render_empty(frame, area);
        return;
    }

    // Window the list so the cursor math in the update layer and the
    // rows on screen agree.
    let window = app.window_height();
    let end = (app.scroll_offset + window).min(app.filtered.len());

    let lines: Vec<Line> = app.filtered[app.scroll_offset..end]
        .iter()
        .enumerate()
        .map(|(offset, article)| {
            let index = app.scroll_offset + offset;
            let is_selected = index == app.cursor;

            let marker = if is_selected { "▶ " } else { "  " };
            let title = if article.title.is_empty() {
                "Untitled"
            } else {
                &article.title
            };

            let mut spans = vec![
                Span::raw(marker),
                Span::styled(
                    title.to_string(),
                    if is_selected {
                        Styles::selected()
                    } else {
                        Styles::title()
                    },
                ),
            ];
            // Tags are noise on a narrow terminal.
            if !article.tags.is_empty() && app.width >= 60 {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(article.tags.join(", "), Styles::tag()));
            }

            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled("  No articles to show.", Styles::muted()),
        Line::styled(
            "  Run `readings sync` to pull from Notion, or widen the filter.",
            Styles::muted(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
