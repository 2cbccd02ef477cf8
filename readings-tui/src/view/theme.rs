//! Shared styles.

use ratatui::style::{Color, Modifier, Style};

pub struct Styles;

impl Styles {
    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(62, 62, 62))
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(212, 212, 212))
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn tag() -> Style {
        Style::default().fg(Color::Rgb(78, 201, 176))
    }

    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
