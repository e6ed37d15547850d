//! Header title and stat card rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::data::{ISSUE_TYPES, SPRINT_LENGTH, STAGES};
use crate::theme::{
    BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_SECONDARY,
};

/// Render the application title and subtitle
pub fn render_title(area: Rect, frame: &mut Frame) {
    let title = Line::from(vec![
        Span::styled(
            " JIRA Workflow ",
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· HR SaaS Platform", Style::default().fg(TEXT_MUTED)),
    ]);
    let subtitle = Line::from(Span::styled(
        " The most intuitive and effective development workflow guide",
        Style::default().fg(TEXT_SECONDARY),
    ));
    frame.render_widget(Paragraph::new(vec![title, subtitle]), area);
}

/// Render the four header stat cards in a given area
pub fn render_stat_cards(area: Rect, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats: [(String, &str); 4] = [
        (STAGES.len().to_string(), "WORKFLOW STAGES"),
        (ISSUE_TYPES.len().to_string(), "ISSUE TYPES"),
        (SPRINT_LENGTH.to_string(), "SPRINT LENGTH"),
        ("100%".to_string(), "SUCCESS RATE"),
    ];

    for (index, (value, label)) in stats.into_iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = Line::from(vec![
            Span::styled(
                value,
                Style::default()
                    .fg(CYAN_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", label), Style::default().fg(TEXT_MUTED)),
        ]);

        let paragraph = Paragraph::new(vec![content])
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, card_layout[index]);
    }
}
