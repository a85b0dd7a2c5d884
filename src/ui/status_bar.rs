use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.config.ui.show_key_hints {
        let hints = match state.focus {
            FocusPanel::Form => " Enter add · ↑/↓ quantity · Tab list · Esc quit ",
            FocusPanel::List => " Space toggle · x delete · ↑/↓ move · Tab form · q quit ",
        };
        parts.push(Span::styled(hints, Theme::status_bar()));
    }

    // Focus indicator, right-aligned
    let focus_name = match state.focus {
        FocusPanel::Form => "FORM",
        FocusPanel::List => "LIST",
    };
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
