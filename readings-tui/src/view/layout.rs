//! Main layout rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, ViewState};

use super::components;
use super::pages;
use super::theme::Styles;

/// Render the whole frame: title bar, content area, status bar.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let counter = if app.filtered.len() == app.articles.len() {
        format!("{} items", app.articles.len())
    } else {
        format!("{}/{} items", app.filtered.len(), app.articles.len())
    };
    let title = Paragraph::new(format!(" readings · {counter}")).style(Styles::statusbar());
    frame.render_widget(title, area);
}

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let page_title = match app.view {
        ViewState::List => " Articles ",
        ViewState::Detail => " Article ",
        ViewState::Filter => " Filter by tag ",
    };

    let block = Block::default()
        .title(page_title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.view {
        ViewState::List => pages::list::render(app, frame, inner),
        ViewState::Detail => pages::detail::render(app, frame, inner),
        ViewState::Filter => pages::filter::render(app, frame, inner),
    }
}
