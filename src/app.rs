//! Application state and core logic for workflow-tui.
//!
//! This module contains the `App` struct which holds the ephemeral view
//! state for the interactive terminal UI: the active top-level view and
//! one selection slot per expandable element class. Rendering derives
//! everything else from the static catalog, so this struct is the whole
//! of the mutable state.

use crate::cli::CliConfig;
use crate::models::View;

/// Application state
///
/// Each selection slot is independent and single-valued: toggling a new
/// identifier into a slot implicitly collapses whatever it held before,
/// and toggling the held identifier clears the slot. Slots may hold an
/// identifier that matches no catalog record; lookup fails safe and the
/// renderer simply shows nothing expanded.
pub struct App {
    pub active_view: View,
    pub selected_stage: Option<&'static str>,
    pub selected_issue_type: Option<&'static str>,
    pub selected_diagram_node: Option<&'static str>,
    // Content scroll offset for the active view (not a selection slot)
    pub scroll_offset: usize,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        Self {
            active_view: config.start_view,
            selected_stage: None,
            selected_issue_type: None,
            selected_diagram_node: None,
            scroll_offset: 0,
        }
    }

    /// Switch the active view; selection slots are left untouched
    pub fn set_active_view(&mut self, view: View) {
        if self.active_view != view {
            self.active_view = view;
            self.scroll_offset = 0;
        }
    }

    /// Expand a stage card, or collapse it if already expanded
    pub fn toggle_stage(&mut self, id: &'static str) {
        self.selected_stage = toggle(self.selected_stage, id);
    }

    /// Expand an issue-type card, or collapse it if already expanded
    pub fn toggle_issue_type(&mut self, name: &'static str) {
        self.selected_issue_type = toggle(self.selected_issue_type, name);
    }

    /// Select a diagram node identity, or deselect it if already selected.
    /// All rendered occurrences of the id (Subtask appears on every branch)
    /// follow this one slot.
    pub fn toggle_diagram_node(&mut self, id: &'static str) {
        self.selected_diagram_node = toggle(self.selected_diagram_node, id);
    }

    /// Collapse everything the active view reacts to (Esc)
    pub fn clear_view_selections(&mut self) {
        match self.active_view {
            View::Workflow => self.selected_stage = None,
            View::Issues => {
                self.selected_issue_type = None;
                self.selected_diagram_node = None;
            }
            View::Practices => {}
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down, clamped so the offset never runs past the content
    pub fn scroll_down(&mut self, amount: usize, content_lines: usize) {
        let max = content_lines.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    pub fn scroll_top(&mut self) {
        self.scroll_offset = 0;
    }
}

/// Single-slot toggle: clear when re-selecting the held value, replace
/// otherwise
fn toggle(slot: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if slot == Some(id) { None } else { Some(id) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(CliConfig {
            start_view: View::default(),
        })
    }

    #[test]
    fn test_initial_state_is_workflow_with_nothing_selected() {
        let app = app();
        assert_eq!(app.active_view, View::Workflow);
        assert_eq!(app.selected_stage, None);
        assert_eq!(app.selected_issue_type, None);
        assert_eq!(app.selected_diagram_node, None);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_toggle_stage_twice_round_trips() {
        let mut app = app();
        app.toggle_stage("qa");
        assert_eq!(app.selected_stage, Some("qa"));
        app.toggle_stage("qa");
        assert_eq!(app.selected_stage, None);
    }

    #[test]
    fn test_toggle_new_stage_replaces_previous() {
        let mut app = app();
        app.toggle_stage("backlog");
        app.toggle_stage("done");
        assert_eq!(app.selected_stage, Some("done"));
    }

    #[test]
    fn test_toggle_issue_type_replaces_previous() {
        let mut app = app();
        app.toggle_issue_type("Bug");
        app.toggle_issue_type("Epic");
        assert_eq!(app.selected_issue_type, Some("Epic"));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut app = app();
        app.toggle_stage("qa");
        app.toggle_issue_type("Bug");
        app.toggle_diagram_node("subtask");
        assert_eq!(app.selected_stage, Some("qa"));
        assert_eq!(app.selected_issue_type, Some("Bug"));
        assert_eq!(app.selected_diagram_node, Some("subtask"));
    }

    #[test]
    fn test_set_active_view_does_not_touch_selection_slots() {
        let mut app = app();
        app.toggle_stage("qa");
        app.toggle_issue_type("Bug");
        app.toggle_diagram_node("epic");
        app.set_active_view(View::Practices);
        assert_eq!(app.active_view, View::Practices);
        assert_eq!(app.selected_stage, Some("qa"));
        assert_eq!(app.selected_issue_type, Some("Bug"));
        assert_eq!(app.selected_diagram_node, Some("epic"));
    }

    #[test]
    fn test_set_active_view_resets_scroll() {
        let mut app = app();
        app.scroll_down(5, 100);
        app.set_active_view(View::Issues);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_legal() {
        // Unknown ids occupy the slot; rendering's defensive lookup shows
        // nothing for them.
        let mut app = app();
        app.toggle_stage("no-such-stage");
        assert_eq!(app.selected_stage, Some("no-such-stage"));
        app.toggle_stage("no-such-stage");
        assert_eq!(app.selected_stage, None);
    }

    #[test]
    fn test_clear_view_selections_only_touches_active_view() {
        let mut app = app();
        app.toggle_stage("qa");
        app.toggle_issue_type("Bug");
        app.set_active_view(View::Workflow);
        app.clear_view_selections();
        assert_eq!(app.selected_stage, None);
        assert_eq!(app.selected_issue_type, Some("Bug"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        app.scroll_down(500, 40);
        assert_eq!(app.scroll_offset, 39);
        app.scroll_up(2);
        assert_eq!(app.scroll_offset, 37);
        app.scroll_top();
        assert_eq!(app.scroll_offset, 0);
    }
}
