//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField, FormRecord};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Text(_) | FieldKind::Choice(_) => 3,
        FieldKind::Multiline(_) => 6,
        FieldKind::Checkboxes(_) => field.options().len() as u16 + 2,
    }
}

fn field_block(field: &FormField, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .title(format!(" {} ", field.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Draw a form field from the current record
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    record: &FormRecord,
    is_active: bool,
) {
    let block = field_block(field, is_active);
    let content = match field.kind {
        FieldKind::Text(_) | FieldKind::Multiline(_) => {
            text_content(&field.display_value(record), is_active, field.is_multiline())
        }
        FieldKind::Choice(_) => choice_content(field, record, is_active),
        FieldKind::Checkboxes(_) => checkbox_content(field, record, is_active),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn text_content(value: &str, is_active: bool, is_multiline: bool) -> Paragraph<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        value.to_string()
    };

    let cursor = if is_active { "▌" } else { "" };

    if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    }
}

fn choice_content(field: &FormField, record: &FormRecord, is_active: bool) -> Paragraph<'static> {
    let is_set = field.is_filled(record);
    let value_style = match (is_set, is_active) {
        (_, true) => Style::default().fg(Color::Cyan),
        (true, false) => Style::default(),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(field.display_value(record), value_style),
        Span::styled(" ▶", arrow_style),
    ]))
}

fn checkbox_content(field: &FormField, record: &FormRecord, is_active: bool) -> Paragraph<'static> {
    let FieldKind::Checkboxes(set) = field.kind else {
        return Paragraph::new("");
    };

    let lines: Vec<Line> = field
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checked = record.is_selected(set, option);
            let mark = if checked { "[x] " } else { "[ ] " };
            let highlighted = is_active && i == field.highlighted;
            let style = if highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{mark}{option}"), style))
        })
        .collect();

    Paragraph::new(lines)
}
