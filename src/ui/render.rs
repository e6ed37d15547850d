//! Top-level frame rendering
//!
//! `render` owns the frame layout (header, tab bar, content, bottom bar);
//! `content_lines` is the pure function from catalog + selection state to
//! the active view's content, which makes the whole visible tree a
//! deterministic function of `App`.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::models::View;
use crate::theme::{BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED};

use super::{header, issues, practices, workflow};

/// Build the active view's content for the given inner width
pub fn content_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let mut lines = match app.active_view {
        View::Workflow => workflow::workflow_lines(app, width),
        View::Issues => issues::issues_lines(app, width),
        View::Practices => practices::practices_lines(width),
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " JIRA Workflow Documentation • HR SaaS Platform",
        Style::default().fg(TEXT_MUTED),
    )));
    lines.push(Line::from(Span::styled(
        " Optimized for continuous delivery and quality assurance",
        Style::default().fg(TEXT_MUTED),
    )));
    lines
}

/// Render one full frame
pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(3), // Stat cards
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // View content
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(frame.area());

    header::render_title(main_layout[0], frame);
    header::render_stat_cards(main_layout[1], frame);
    render_tab_bar(main_layout[2], app.active_view, frame);
    render_content(main_layout[3], app, frame);
    render_bottom_bar(main_layout[4], app.active_view, frame);
}

fn render_tab_bar(area: Rect, active: View, frame: &mut Frame) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|v| Line::from(format!("  {}  ", v.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(TEXT_MUTED))
        .highlight_style(
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_content(area: Rect, app: &App, frame: &mut Frame) {
    let lines = content_lines(app, area.width.saturating_sub(2));
    let offset = app.scroll_offset.min(lines.len().saturating_sub(1)) as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .title(format!(" {} ", app.active_view.label()))
        .title_style(Style::default().fg(CYAN_PRIMARY));

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

fn render_bottom_bar(area: Rect, active: View, frame: &mut Frame) {
    let hints = match active {
        View::Workflow => {
            " q: Quit | Tab: Switch View | 1-8: Toggle Stage | ↑/↓: Scroll | Esc: Collapse "
        }
        View::Issues => {
            " q: Quit | Tab: Switch View | 1-6: Issue Card | e/s/t/b/u: Diagram | Esc: Collapse "
        }
        View::Practices => " q: Quit | Tab: Switch View | ↑/↓: Scroll ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(bar, area);
}
