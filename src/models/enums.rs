//! Enums used throughout workflow-tui
//!
//! This module contains the enum types used for view-state management
//! and for mapping catalog identities to their visual descriptors.

use ratatui::style::Color;

use crate::theme::{
    ACCENT_BLUE, ACCENT_GREEN, ACCENT_PURPLE, ACCENT_RED, ACCENT_SLATE, ACCENT_YELLOW,
};

/// Top-level view selected by the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Workflow, // Development pipeline stages
    Issues,    // Issue type taxonomy, hierarchy diagram, comparison table
    Practices, // Sprint/scrum best practices and HR considerations
}

impl View {
    /// All views in tab order
    pub const ALL: [View; 3] = [View::Workflow, View::Issues, View::Practices];

    pub fn label(&self) -> &'static str {
        match self {
            View::Workflow => "Development Workflow",
            View::Issues => "Issue Types",
            View::Practices => "Best Practices",
        }
    }

    /// Index into [`View::ALL`], used by the tab bar highlight
    pub fn index(&self) -> usize {
        match self {
            View::Workflow => 0,
            View::Issues => 1,
            View::Practices => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            View::Workflow => View::Issues,
            View::Issues => View::Practices,
            View::Practices => View::Workflow,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            View::Workflow => View::Practices,
            View::Issues => View::Workflow,
            View::Practices => View::Issues,
        }
    }
}

/// Issue taxonomy identity, shared by the issue-type cards, the hierarchy
/// diagram, the example tree, and the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Idea,
    Epic,
    Story,
    Task,
    Bug,
    Subtask,
}

impl IssueKind {
    pub fn accent(&self) -> Color {
        match self {
            IssueKind::Idea => ACCENT_YELLOW,
            IssueKind::Epic => ACCENT_PURPLE,
            IssueKind::Story => ACCENT_GREEN,
            IssueKind::Task => ACCENT_BLUE,
            IssueKind::Bug => ACCENT_RED,
            IssueKind::Subtask => ACCENT_SLATE,
        }
    }

    /// Single-cell glyph used wherever the kind needs an icon
    pub fn glyph(&self) -> &'static str {
        match self {
            IssueKind::Idea => "✦",
            IssueKind::Epic => "◆",
            IssueKind::Story => "●",
            IssueKind::Task => "■",
            IssueKind::Bug => "✗",
            IssueKind::Subtask => "▫",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_default_is_workflow() {
        assert_eq!(View::default(), View::Workflow);
    }

    #[test]
    fn test_view_next_cycles_through_all() {
        assert_eq!(View::Workflow.next(), View::Issues);
        assert_eq!(View::Issues.next(), View::Practices);
        assert_eq!(View::Practices.next(), View::Workflow);
    }

    #[test]
    fn test_view_prev_is_inverse_of_next() {
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
        }
    }

    #[test]
    fn test_view_index_matches_all_order() {
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_view_label() {
        assert_eq!(View::Workflow.label(), "Development Workflow");
        assert_eq!(View::Issues.label(), "Issue Types");
        assert_eq!(View::Practices.label(), "Best Practices");
    }

    #[test]
    fn test_issue_kind_glyphs_are_distinct() {
        let kinds = [
            IssueKind::Idea,
            IssueKind::Epic,
            IssueKind::Story,
            IssueKind::Task,
            IssueKind::Bug,
            IssueKind::Subtask,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
                assert_ne!(a.accent(), b.accent());
            }
        }
    }
}
