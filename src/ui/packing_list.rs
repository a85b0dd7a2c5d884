use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::List;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let mut rows: Vec<ListItem> = Vec::new();

    for (index, item) in state.items.iter().enumerate() {
        let selected = focused && index == state.selected;
        rows.push(render_row(item, selected, area.width));
    }

    if rows.is_empty() {
        rows.push(ListItem::new(Span::styled(
            " No items yet. Type above and press Enter.",
            Theme::muted(),
        )));
    }

    let title = if state.items.is_empty() {
        " Packing List ".to_string()
    } else {
        format!(" Packing List ({}) ", state.items.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style);

    let list = List::new(rows).block(block);
    frame.render_widget(list, area);
}

/// One item row: checkbox glyph, quantity, description.
/// Packed rows are struck through and dimmed.
fn render_row(item: &Item, selected: bool, width: u16) -> ListItem<'static> {
    let (checkbox, checkbox_style) = if item.packed {
        ("[x] ", Theme::checkbox_packed())
    } else {
        ("[ ] ", Theme::checkbox_unpacked())
    };

    let text_style = if item.packed {
        Theme::item_packed()
    } else {
        Theme::item_text()
    };

    let label = format!("{} {}", item.quantity, item.description);

    let mut spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(checkbox, checkbox_style),
        Span::styled(label, text_style),
    ];

    if selected {
        // Pad so the highlight covers the full row width
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let remaining = (width as usize).saturating_sub(used + 2);
        spans.push(Span::raw(" ".repeat(remaining)));
        ListItem::new(Line::from(spans).style(Theme::row_selected()))
    } else {
        ListItem::new(Line::from(spans))
    }
}
