use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub logo: Rect,
    pub form: Rect,
    pub list: Rect,
    pub stats: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Logo heading
            Constraint::Length(3), // Add-item form
            Constraint::Min(3),    // Packing list
            Constraint::Length(3), // Stats footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        logo: chunks[0],
        form: chunks[1],
        list: chunks[2],
        stats: chunks[3],
        status_bar: chunks[4],
    }
}
