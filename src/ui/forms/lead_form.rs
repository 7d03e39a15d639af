//! Lead intake form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::visible_range;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form fields that fit around the active one, then the button
pub fn draw_lead_form<S>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let form = &app.form;
    let submitting = app.submission.is_submitting();

    let block = Block::default()
        .title(" Tell us about your business needs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The submit button is the last row of the scroll list
    let mut heights: Vec<u16> = form.fields.iter().map(field_height).collect();
    heights.push(BUTTON_HEIGHT);

    let rows = visible_range(&heights, form.active_field_index, inner.height);
    let constraints: Vec<Constraint> = heights[rows.clone()]
        .iter()
        .map(|h| Constraint::Length(*h))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (chunk, index) in chunks.iter().zip(rows) {
        let is_active = index == form.active_field_index;
        match form.fields.get(index) {
            Some(field) => draw_field(frame, *chunk, field, &app.record, is_active),
            None => {
                let label = if submitting {
                    "Submitting..."
                } else {
                    "Request Information"
                };
                render_button(frame, *chunk, label, is_active, !submitting);
            }
        }
    }
}
