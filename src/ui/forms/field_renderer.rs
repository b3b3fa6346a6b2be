//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a boxed text field; secret fields are masked
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let value = if display_value.is_empty() && !field.placeholder.is_empty() && !is_active {
        Span::styled(field.placeholder.clone(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(display_value, Style::default().fg(Color::White))
    };

    let content = Paragraph::new(Line::from(vec![
        value,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(content.block(block), area);
}

/// Draw a boxed single-choice row, e.g. `(•) User  ( ) Admin`
pub fn draw_choice(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: usize,
    is_active: bool,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        let marker = if idx == selected { "(•)" } else { "( )" };
        let style = if idx == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a single-line checkbox
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let label_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(mark, focus_style(is_active).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a one-line hint below a field
pub fn draw_hint(frame: &mut Frame, area: Rect, text: &str) {
    let line = Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw pre-wrapped error lines, or nothing
pub fn draw_error(frame: &mut Frame, area: Rect, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let text: Vec<Line> = lines
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), style)))
        .collect();
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}
