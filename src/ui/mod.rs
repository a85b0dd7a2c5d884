mod form;
mod layout;
mod logo;
mod packing_list;
mod stats_bar;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    logo::render(frame, app_layout.logo);
    form::render(frame, app_layout.form, state);
    packing_list::render(frame, app_layout.list, state);
    stats_bar::render(frame, app_layout.stats, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
