//! Issue Types view: hierarchy diagram, example tree, comparison table,
//! and the detailed issue-type cards
//!
//! The diagram renders the fixed Epic → {Story, Task, Bug} → Subtask shape.
//! Subtask is one catalog record drawn under all three branches; selection
//! is keyed by node id, so toggling any occurrence highlights every
//! occurrence at once.

use ratatui::prelude::*;

use crate::app::App;
use crate::models::catalog::DiagramNode;
use crate::models::data::{
    COMPARISON_ROWS, DIAGRAM_NODES, EXAMPLE_TREE_CHILDREN, EXAMPLE_TREE_ROOT, ISSUE_TYPES,
};
use crate::models::enums::IssueKind;
use crate::models::{find_diagram_node, find_issue_type};
use crate::theme::{ACCENT_PURPLE, BG_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

use super::helpers::{bullet, prose, section_header, wrap_text};

/// Width of one branch column of the hierarchy diagram
const DIAGRAM_CELL: usize = 18;

/// Build the Issues view content
pub fn issues_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = section_header(
        "Issue Types Guide",
        "Complete documentation for each JIRA issue type with examples and best practices",
    );

    lines.push(Line::from(Span::styled(
        " Issue Hierarchy",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        " Press e/s/t/b/u to explore common work types",
        Style::default().fg(TEXT_MUTED),
    )));
    lines.push(Line::default());
    lines.extend(diagram_lines(app.selected_diagram_node));

    if let Some(node) = app.selected_diagram_node.and_then(find_diagram_node) {
        lines.push(Line::default());
        lines.extend(info_panel_lines(node, width));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Real-World Example",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(example_tree_lines());

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Quick Comparison",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(comparison_lines());

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Detailed Issue Type Documentation",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        " Press 1-6 to expand a card",
        Style::default().fg(TEXT_MUTED),
    )));
    lines.push(Line::default());
    lines.extend(issue_card_lines(app, width));

    lines
}

/// One diagram button, highlighted when its id is the selected identity
fn node_span(node: &DiagramNode, selected: bool) -> Span<'static> {
    let text = format!("[ {} {} ]", node.kind.glyph(), node.name);
    let style = if selected {
        Style::default()
            .fg(BG_PRIMARY)
            .bg(node.kind.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(node.kind.accent())
    };
    Span::styled(text, style)
}

/// A span centered inside one diagram cell
fn centered_cell(span: Span<'static>) -> [Span<'static>; 3] {
    let len = span.content.chars().count();
    let left = DIAGRAM_CELL.saturating_sub(len) / 2;
    let right = DIAGRAM_CELL.saturating_sub(len + left);
    [
        Span::raw(" ".repeat(left)),
        span,
        Span::raw(" ".repeat(right)),
    ]
}

/// The fixed hierarchy diagram, five lines tall
fn diagram_lines(selected: Option<&str>) -> Vec<Line<'static>> {
    let node = |id: &str| {
        let record = find_diagram_node(id).unwrap_or(&DIAGRAM_NODES[0]);
        node_span(record, selected == Some(record.id))
    };

    // Branch centers sit at columns 8, 26 and 44 of the 54-column band.
    let epic = node("epic");
    let epic_pad = 26usize.saturating_sub(epic.content.chars().count() / 2);
    let mut lines = vec![Line::from(vec![Span::raw(" ".repeat(epic_pad)), epic])];

    lines.push(Line::from(Span::styled(
        format!("{}┌{}┼{}┐", " ".repeat(8), "─".repeat(17), "─".repeat(17)),
        Style::default().fg(TEXT_MUTED),
    )));

    let mut second = Vec::new();
    for id in ["story", "task", "bug"] {
        second.extend(centered_cell(node(id)));
    }
    lines.push(Line::from(second));

    lines.push(Line::from(Span::styled(
        format!("{}│{}│{}│", " ".repeat(8), " ".repeat(17), " ".repeat(17)),
        Style::default().fg(TEXT_MUTED),
    )));

    let mut third = Vec::new();
    for _ in 0..3 {
        third.extend(centered_cell(node("subtask")));
    }
    lines.push(Line::from(third));

    lines
}

/// Info panel describing the selected diagram node
fn info_panel_lines(node: &DiagramNode, width: usize) -> Vec<Line<'static>> {
    let accent = node.kind.accent();
    let edge = Style::default().fg(accent);

    let mut lines = vec![Line::from(vec![
        Span::styled(" ╭ ".to_string(), edge),
        Span::styled(
            format!(" {} ", node.name),
            Style::default()
                .fg(BG_PRIMARY)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", node.summary), Style::default().fg(TEXT_PRIMARY)),
    ])];

    for text in wrap_text(node.description, width.saturating_sub(6)) {
        lines.push(Line::from(vec![
            Span::styled(" │ ".to_string(), edge),
            Span::styled(text, Style::default().fg(TEXT_SECONDARY)),
        ]));
    }
    let example = format!("For example: {}", node.example);
    for text in wrap_text(&example, width.saturating_sub(6)) {
        lines.push(Line::from(vec![
            Span::styled(" │ ".to_string(), edge),
            Span::styled(text, Style::default().fg(TEXT_SECONDARY)),
        ]));
    }
    for text in wrap_text(node.tip, width.saturating_sub(6)) {
        lines.push(Line::from(vec![
            Span::styled(" ╰ ".to_string(), edge),
            Span::styled(text, Style::default().fg(TEXT_MUTED)),
        ]));
    }

    lines
}

/// The fixed Real-World Example hierarchy
fn example_tree_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("   {} ", IssueKind::Epic.glyph()),
            Style::default().fg(ACCENT_PURPLE),
        ),
        Span::styled(
            EXAMPLE_TREE_ROOT,
            Style::default()
                .fg(ACCENT_PURPLE)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    for (index, child) in EXAMPLE_TREE_CHILDREN.iter().enumerate() {
        let last = index == EXAMPLE_TREE_CHILDREN.len() - 1;
        let connector = match (child.indent, last) {
            (true, _) => "   │    └─",
            (false, true) => "   └─",
            (false, false) => "   ├─",
        };
        lines.push(Line::from(vec![
            Span::styled(connector.to_string(), Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!(" {} ", child.kind.glyph()),
                Style::default().fg(child.kind.accent()),
            ),
            Span::styled(child.title, Style::default().fg(TEXT_PRIMARY)),
        ]));
    }

    lines
}

/// The Quick Comparison table
fn comparison_lines() -> Vec<Line<'static>> {
    let header = format!(
        " {:<12}{:<27}{:<23}{}",
        "Type", "Size", "Time to Complete", "Who Creates It"
    );
    let rule = format!(" {}", "─".repeat(76));
    let mut lines = vec![
        Line::from(Span::styled(
            header,
            Style::default()
                .fg(TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(rule, Style::default().fg(TEXT_MUTED))),
    ];

    for row in &COMPARISON_ROWS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {:<10}", row.kind.glyph(), row.name),
                Style::default().fg(row.kind.accent()),
            ),
            Span::styled(format!("{:<27}", row.size), Style::default().fg(TEXT_PRIMARY)),
            Span::styled(format!("{:<23}", row.time), Style::default().fg(TEXT_SECONDARY)),
            Span::styled(row.creator, Style::default().fg(TEXT_SECONDARY)),
        ]));
    }

    lines
}

/// The six issue-type cards; the selected card (if its name resolves in the
/// catalog) is expanded to its full detail block
fn issue_card_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let expanded = app.selected_issue_type.and_then(find_issue_type);
    let mut lines = Vec::new();

    for (index, issue) in ISSUE_TYPES.iter().enumerate() {
        let selected = expanded.is_some_and(|t| t.name == issue.name);
        let marker = if selected { "▾" } else { "▸" };
        let accent = issue.kind.accent();

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(accent)),
            Span::styled(format!("{}. ", index + 1), Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!("{} {} ", issue.kind.glyph(), issue.name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("— {}", issue.description),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]));

        if selected {
            let label = Style::default().fg(accent).add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled("      When to Use", label)));
            lines.extend(prose(issue.when_to_use, 8, width));
            lines.push(Line::from(Span::styled("      Workflow", label)));
            lines.extend(prose(issue.workflow, 8, width));
            lines.push(Line::from(vec![
                Span::styled("      Size ".to_string(), Style::default().fg(TEXT_MUTED)),
                Span::styled(issue.estimated_size, Style::default().fg(TEXT_PRIMARY)),
                Span::styled("   Priority ".to_string(), Style::default().fg(TEXT_MUTED)),
                Span::styled(issue.priority, Style::default().fg(TEXT_PRIMARY)),
            ]));
            lines.push(Line::from(Span::styled("      Assignee", label)));
            lines.extend(prose(issue.assignee, 8, width));
            lines.push(Line::from(Span::styled("      Examples", label)));
            for example in issue.examples {
                lines.push(bullet("•", example, accent, 8));
            }
            lines.push(Line::from(Span::styled("      Best Practices", label)));
            for practice in issue.best_practices {
                lines.push(bullet("✓", practice, accent, 8));
            }
        }
        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;
    use crate::models::View;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let mut app = App::new(CliConfig {
            start_view: View::Workflow,
        });
        app.set_active_view(View::Issues);
        app
    }

    /// Diagram buttons carrying the selected (background-filled) styling
    fn selected_spans<'a>(lines: &'a [Line<'_>], name: &str) -> Vec<&'a Span<'a>> {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| {
                s.content.starts_with("[ ") && s.content.contains(name) && s.style.bg.is_some()
            })
            .collect()
    }

    #[test]
    fn test_all_fixed_sections_are_rendered() {
        let rendered = text(&issues_lines(&app(), 100));
        assert!(rendered.contains("Issue Hierarchy"));
        assert!(rendered.contains("Real-World Example"));
        assert!(rendered.contains("Quick Comparison"));
        assert!(rendered.contains("Detailed Issue Type Documentation"));
        assert!(rendered.contains(EXAMPLE_TREE_ROOT));
        for issue in &ISSUE_TYPES {
            assert!(rendered.contains(issue.name), "missing {}", issue.name);
        }
    }

    #[test]
    fn test_diagram_renders_subtask_under_every_branch() {
        let rendered = text(&issues_lines(&app(), 100));
        // 3 diagram occurrences plus the example-tree child
        assert_eq!(rendered.matches("Subtask").count(), 4);
    }

    #[test]
    fn test_selecting_subtask_highlights_all_occurrences_and_opens_panel() {
        let mut app = app();
        app.toggle_diagram_node("subtask");
        let lines = issues_lines(&app, 100);

        assert_eq!(selected_spans(&lines, "Subtask").len(), 3);
        let rendered = text(&lines);
        assert!(rendered.contains("Subtask  represents a breakdown of larger items"));
        assert!(rendered.contains("For example:"));
    }

    #[test]
    fn test_deselecting_diagram_node_closes_panel() {
        let mut app = app();
        app.toggle_diagram_node("epic");
        app.toggle_diagram_node("epic");
        let lines = issues_lines(&app, 100);
        assert!(selected_spans(&lines, "Epic").is_empty());
        assert!(!text(&lines).contains("represents a large body of work"));
    }

    #[test]
    fn test_unknown_diagram_selection_renders_no_panel() {
        let mut app = app();
        app.toggle_diagram_node("initiative");
        let rendered = text(&issues_lines(&app, 100));
        assert!(!rendered.contains("represents"));
    }

    #[test]
    fn test_new_issue_type_selection_collapses_previous_card() {
        let mut app = app();
        app.toggle_issue_type("Bug");
        app.toggle_issue_type("Epic");
        let rendered = text(&issues_lines(&app, 100));

        // Epic detail visible, Bug detail collapsed
        assert!(rendered.contains("Define clear business objectives and KPIs"));
        assert!(!rendered.contains("Include steps to reproduce"));
        assert_eq!(rendered.matches("When to Use").count(), 1);
    }

    #[test]
    fn test_expanded_card_shows_full_detail_block() {
        let mut app = app();
        app.toggle_issue_type("Story");
        let rendered = text(&issues_lines(&app, 120));
        assert!(rendered.contains("When to Use"));
        assert!(rendered.contains("Workflow"));
        assert!(rendered.contains("Assignee"));
        assert!(rendered.contains("Examples"));
        assert!(rendered.contains("Best Practices"));
        assert!(rendered.contains("1-13 story points"));
        assert!(rendered.contains("As an HR Admin, I want to bulk upload employee data via CSV"));
    }

    #[test]
    fn test_comparison_table_lists_every_row() {
        let rendered = text(&issues_lines(&app(), 100));
        for row in &COMPARISON_ROWS {
            assert!(rendered.contains(row.size), "missing {}", row.size);
            assert!(rendered.contains(row.time), "missing {}", row.time);
        }
    }
}
