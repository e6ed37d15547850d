//! UI helper functions shared by the view builders

use ratatui::prelude::*;

use crate::theme::{TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Section heading plus its muted subtitle line
pub fn section_header(title: &'static str, subtitle: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {}", title),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", subtitle),
            Style::default().fg(TEXT_MUTED),
        )),
        Line::default(),
    ]
}

/// Wrapped prose lines under a fixed left indent
pub fn prose(text: &str, indent: usize, max_width: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_text(text, max_width.saturating_sub(indent))
        .into_iter()
        .map(|l| {
            Line::from(Span::styled(
                format!("{}{}", pad, l),
                Style::default().fg(TEXT_SECONDARY),
            ))
        })
        .collect()
}

/// A bulleted list item with an accent-colored marker
pub fn bullet(marker: &'static str, text: &'static str, accent: Color, indent: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}{} ", " ".repeat(indent), marker),
            Style::default().fg(accent),
        ),
        Span::styled(text, Style::default().fg(TEXT_PRIMARY)),
    ])
}
