use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn logo() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn quantity() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn quantity_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn item_packed() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn checkbox_packed() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn checkbox_unpacked() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn row_selected() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn stats_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::ITALIC)
    }

    pub fn stats_done() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC)
    }

    pub fn stats_empty() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
