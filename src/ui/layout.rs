//! Layout and chrome: header, status bar, form scrolling

use crate::app::{App, StatusMessage};
use crate::state::SubmissionState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;

/// Split the screen into header and form, leaving the last row for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the form title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Partner with Quetico 3PL",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Required fields are marked with *",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar<S>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = match app.submission {
        SubmissionState::Submitting => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionState::Succeeded => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionState::Failed(_) => Span::styled(" ● ", Style::default().fg(Color::Red)),
        SubmissionState::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    match &app.status_message {
        Some(StatusMessage::Success(msg)) => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
        }
        Some(StatusMessage::Error(msg)) => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Red)));
        }
        None => {}
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Keyboard hints for the active field
fn get_hints<S>(app: &App<S>) -> &'static str {
    use crate::state::FieldKind;

    match app.form.active_kind() {
        _ if app.submission.is_submitting() => "Submitting...  Esc:quit",
        None => "Enter:submit  Tab:next  Esc:quit",
        Some(FieldKind::Checkboxes(_)) => "←/→:move  Space:toggle  Tab:next  ^S:submit",
        Some(FieldKind::Choice(_)) => "←/→:choose  Tab:next  ^S:submit",
        Some(FieldKind::Multiline(_)) => "Enter:newline  Tab:next  ^S:submit",
        Some(FieldKind::Text(_)) => "Tab:next  ^S:submit  Esc:quit",
    }
}

/// Rows of a vertical list that fit in `available` while keeping `active` on screen.
///
/// Rows above the active one are dropped from the top until it fits; the
/// range then extends downward as far as space allows. An active row taller
/// than the viewport is still returned on its own.
pub fn visible_range(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.min(heights.len() - 1);
    let sum = |range: Range<usize>| heights[range].iter().map(|h| *h as u32).sum::<u32>();

    let mut start = 0;
    while start < active && sum(start..active + 1) > available as u32 {
        start += 1;
    }

    let mut end = active + 1;
    while end < heights.len() && sum(start..end + 1) <= available as u32 {
        end += 1;
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_range(&[3, 3, 3], 0, 20), 0..3);
    }

    #[test]
    fn test_scrolls_to_keep_active_visible() {
        let heights = [3, 3, 3, 3, 3];
        assert_eq!(visible_range(&heights, 0, 9), 0..3);
        assert_eq!(visible_range(&heights, 4, 9), 2..5);
        assert_eq!(visible_range(&heights, 3, 9), 1..4);
    }

    #[test]
    fn test_oversized_active_row_is_still_shown() {
        assert_eq!(visible_range(&[3, 10, 3], 1, 5), 1..2);
    }

    #[test]
    fn test_active_out_of_bounds_is_clamped() {
        assert_eq!(visible_range(&[3, 3], 7, 3), 1..2);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(visible_range(&[], 0, 10), 0..0);
    }

    #[test]
    fn test_create_layout_reserves_status_row() {
        let (header, form) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 2);
        assert_eq!(form.height, 21);
    }
}
