//! Tag filter page: a checkbox per known tag.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.tags.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::styled("  No tags found on any article.", Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let window = app.window_height();
    let end = (app.scroll_offset + window).min(app.tags.len());

    let lines: Vec<Line> = app.tags[app.scroll_offset..end]
        .iter()
        .enumerate()
        .map(|(offset, tag)| {
            let index = app.scroll_offset + offset;
            let is_selected = index == app.cursor;

            let marker = if is_selected { "▶ " } else { "  " };
            let checkbox = if app.selected_tags.contains(tag) {
                "[x] "
            } else {
                "[ ] "
            };

            Line::from(vec![
                Span::raw(marker),
                Span::raw(checkbox),
                Span::styled(
                    tag.clone(),
                    if is_selected {
                        Styles::selected()
                    } else {
                        Styles::tag()
                    },
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
