//! Development Workflow view: the eight pipeline stage cards

use ratatui::prelude::*;

use crate::app::App;
use crate::models::data::{FLOW_PHASES, STAGES};
use crate::models::find_stage;
use crate::theme::{TEXT_MUTED, TEXT_PRIMARY};

use super::helpers::{bullet, prose, section_header};

/// Build the Workflow view content: every stage as a summary card, with the
/// selected stage (if any resolves in the catalog) expanded to show its key
/// activities, followed by the flow-phase legend.
pub fn workflow_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let expanded = app.selected_stage.and_then(find_stage);

    let mut lines = section_header(
        "Development Pipeline",
        "Press a stage number to explore key activities and metrics",
    );

    for (index, stage) in STAGES.iter().enumerate() {
        let selected = expanded.is_some_and(|s| s.id == stage.id);
        let marker = if selected { "▾" } else { "▸" };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(stage.accent)),
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(TEXT_MUTED),
            ),
            Span::styled(
                stage.name,
                Style::default()
                    .fg(stage.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(metrics) = stage.metrics {
            spans.push(Span::styled(
                format!("   {} · {}", metrics.avg_time, metrics.success_rate),
                Style::default().fg(TEXT_MUTED),
            ));
        }
        lines.push(Line::from(spans));
        lines.extend(prose(stage.description, 6, width));

        if selected {
            lines.push(Line::from(Span::styled(
                "      Key Activities",
                Style::default()
                    .fg(stage.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for activity in stage.activities {
                lines.push(bullet("→", activity, stage.accent, 8));
            }
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        " Flow Phases",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    for (phase, span) in FLOW_PHASES {
        lines.push(Line::from(vec![
            Span::styled(format!("   ● {:<20}", phase), Style::default().fg(TEXT_PRIMARY)),
            Span::styled(span, Style::default().fg(TEXT_MUTED)),
        ]));
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
        App::new(CliConfig {
            start_view: View::Workflow,
        })
    }

    #[test]
    fn test_initial_render_shows_all_stages_collapsed() {
        let lines = workflow_lines(&app(), 100);
        let rendered = text(&lines);
        for stage in &STAGES {
            assert!(rendered.contains(stage.name), "missing {}", stage.name);
        }
        assert!(!rendered.contains("Key Activities"));
        assert_eq!(rendered.matches('▸').count(), 8);
        assert_eq!(rendered.matches('▾').count(), 0);
    }

    #[test]
    fn test_toggled_stage_shows_activities_then_hides_them() {
        let mut app = app();
        app.toggle_stage("qa");
        let rendered = text(&workflow_lines(&app, 100));
        assert!(rendered.contains("Key Activities"));
        assert!(rendered.contains("Functional testing"));
        assert!(rendered.contains("Integration testing"));
        assert!(rendered.contains("Regression testing"));
        assert_eq!(rendered.matches('▾').count(), 1);

        app.toggle_stage("qa");
        let rendered = text(&workflow_lines(&app, 100));
        assert!(!rendered.contains("Functional testing"));
        assert_eq!(rendered.matches('▾').count(), 0);
    }

    #[test]
    fn test_only_one_stage_expands_at_a_time() {
        let mut app = app();
        app.toggle_stage("backlog");
        app.toggle_stage("staging");
        let rendered = text(&workflow_lines(&app, 100));
        assert!(rendered.contains("UAT"));
        assert!(!rendered.contains("Product grooming"));
        assert_eq!(rendered.matches('▾').count(), 1);
    }

    #[test]
    fn test_stale_selection_renders_nothing_expanded() {
        let mut app = app();
        app.toggle_stage("decommissioned");
        let rendered = text(&workflow_lines(&app, 100));
        assert!(!rendered.contains("Key Activities"));
        assert_eq!(rendered.matches('▾').count(), 0);
    }

    #[test]
    fn test_metrics_and_legend_are_rendered() {
        let rendered = text(&workflow_lines(&app(), 100));
        assert!(rendered.contains("2-3 days · 95%"));
        assert!(rendered.contains("Flow Phases"));
        for (phase, _) in FLOW_PHASES {
            assert!(rendered.contains(phase));
        }
    }
}
