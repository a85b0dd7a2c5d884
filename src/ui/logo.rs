use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Span::styled("My Travel List", Theme::logo()))
        .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}
