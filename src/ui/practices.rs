//! Best Practices view: sprint practices, scrum elements, tips, and
//! HR-platform considerations
//!
//! Nothing in this view reacts to selection state; it is a fixed document.

use ratatui::prelude::*;

use crate::models::data::{HR_CONSIDERATIONS, PRACTICE_GROUPS, SCRUM_ELEMENTS, SCRUM_TIPS};
use crate::theme::{ACCENT_INDIGO, TEXT_MUTED, TEXT_PRIMARY};

use super::helpers::{bullet, prose, section_header};

/// Build the Practices view content
pub fn practices_lines(width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = section_header(
        "Sprint & Team Best Practices",
        "Guidelines for efficient team collaboration and delivery",
    );

    for group in &PRACTICE_GROUPS {
        lines.push(Line::from(Span::styled(
            format!(" {}", group.title),
            Style::default()
                .fg(group.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for point in group.points {
            lines.push(bullet("✓", point, group.accent, 3));
        }
        lines.push(Line::default());
    }

    lines.extend(section_header(
        "Scrum Elements",
        "Core components of the Scrum framework",
    ));
    for element in &SCRUM_ELEMENTS {
        lines.push(Line::from(Span::styled(
            format!(" {}", element.title),
            Style::default()
                .fg(element.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(prose(element.description, 3, width));
        let tags = element.key_points.join("  ·  ");
        lines.push(Line::from(Span::styled(
            format!("   {}", tags),
            Style::default().fg(element.accent),
        )));
        lines.push(Line::default());
    }

    lines.extend(section_header(
        "Tips For Scrum Success",
        "Pro tips to improve your Scrum implementation",
    ));
    for tip in &SCRUM_TIPS {
        lines.push(Line::from(vec![
            Span::styled(" ◦ ".to_string(), Style::default().fg(ACCENT_INDIGO)),
            Span::styled(
                tip.title,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.extend(prose(tip.description, 3, width));
    }
    lines.push(Line::default());

    lines.extend(section_header(
        "HR Platform Specific Considerations",
        "What every change to the platform gets checked against",
    ));
    for consideration in &HR_CONSIDERATIONS {
        lines.push(Line::from(Span::styled(
            format!(" {}", consideration.title),
            Style::default()
                .fg(ACCENT_INDIGO)
                .add_modifier(Modifier::BOLD),
        )));
        for point in consideration.points {
            lines.push(bullet("•", point, TEXT_MUTED, 3));
        }
        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_all_practice_groups_and_points_render() {
        let rendered = text(&practices_lines(100));
        for group in &PRACTICE_GROUPS {
            assert!(rendered.contains(group.title), "missing {}", group.title);
            for point in group.points {
                assert!(rendered.contains(point), "missing {}", point);
            }
        }
    }

    #[test]
    fn test_scrum_elements_render_with_key_points() {
        let rendered = text(&practices_lines(100));
        for element in &SCRUM_ELEMENTS {
            assert!(rendered.contains(element.title));
        }
        assert!(rendered.contains("Define Sprint Goal  ·  Select backlog items"));
    }

    #[test]
    fn test_tips_and_hr_considerations_render() {
        let rendered = text(&practices_lines(100));
        for tip in &SCRUM_TIPS {
            assert!(rendered.contains(tip.title));
        }
        assert!(rendered.contains("GDPR compliance checks"));
        assert!(rendered.contains("Payroll system integration"));
        assert!(rendered.contains("Report generation speed"));
    }

    #[test]
    fn test_output_is_identical_regardless_of_call_count() {
        // The view is pure: no hidden state between renders.
        assert_eq!(text(&practices_lines(90)), text(&practices_lines(90)));
    }
}
