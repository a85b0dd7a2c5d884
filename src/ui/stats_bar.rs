use crate::app::state::AppState;
use crate::app::stats::Stats;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = Stats::from_items(&state.items);

    let style = if stats.total == 0 {
        Theme::stats_empty()
    } else if stats.percentage == 100 {
        Theme::stats_done()
    } else {
        Theme::stats_text()
    };

    let block = Block::default()
        .title(" Stats ")
        .title_style(Theme::border())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let paragraph = Paragraph::new(Span::styled(stats.message(), style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
