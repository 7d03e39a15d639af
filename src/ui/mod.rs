//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let (header_area, form_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    forms::draw_lead_form(frame, form_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
