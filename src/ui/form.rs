use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Form;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(" What do you need to pack? ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for &choice in &QUANTITY_CHOICES {
        let style = if choice == state.draft.quantity {
            Theme::quantity_selected()
        } else {
            Theme::quantity()
        };
        spans.push(Span::styled(format!(" {} ", choice), style));
    }
    spans.push(Span::styled("│ ", Theme::border()));
    spans.push(Span::styled("❯ ", Style::default().fg(Theme::ACCENT)));

    if state.draft.text.is_empty() {
        spans.push(Span::styled("Item...", Theme::placeholder()));
    } else {
        spans.push(Span::styled(state.draft.text.as_str(), Theme::input_text()));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, inner);

    if focused {
        // Quantity cells (3 cols each) + separator "│ " + chevron "❯ "
        let prompt_offset = (QUANTITY_CHOICES.len() * 3 + 4) as u16;
        let before_cursor = state.draft.text[..state.draft.cursor].width() as u16;
        let cursor_x = inner.x + prompt_offset + before_cursor;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    }
}
