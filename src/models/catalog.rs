//! Catalog record types and lookup functions
//!
//! The catalog is the immutable set of descriptive records the UI displays:
//! workflow stages, issue types, practice groups, scrum elements, diagram
//! nodes, and the fixed example hierarchy. Every table lives in
//! [`crate::models::data`] as `'static` constants; nothing here is ever
//! mutated after startup.
//!
//! Lookup is defensive by contract: a selection slot may hold an identifier
//! that matches nothing (cleared, stale, or simply unknown), and that must
//! render as "nothing selected" rather than fail.

use ratatui::style::Color;

use super::data::{DIAGRAM_NODES, ISSUE_TYPES, STAGES};
use super::enums::IssueKind;

/// Cycle-time metrics attached to a workflow stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub avg_time: &'static str,
    pub success_rate: &'static str,
}

/// A stage of the development pipeline
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accent: Color,
    pub activities: &'static [&'static str],
    pub metrics: Option<Metrics>,
}

/// A category of trackable work item, keyed by its display name
#[derive(Debug, Clone, Copy)]
pub struct IssueType {
    pub name: &'static str,
    pub kind: IssueKind,
    pub description: &'static str,
    pub when_to_use: &'static str,
    pub workflow: &'static str,
    pub estimated_size: &'static str,
    pub assignee: &'static str,
    pub priority: &'static str,
    pub examples: &'static [&'static str],
    pub best_practices: &'static [&'static str],
}

/// A titled group of process guidelines
#[derive(Debug, Clone, Copy)]
pub struct PracticeGroup {
    pub title: &'static str,
    pub accent: Color,
    pub points: &'static [&'static str],
}

/// A core component of the Scrum framework
#[derive(Debug, Clone, Copy)]
pub struct ScrumElement {
    pub title: &'static str,
    pub accent: Color,
    pub description: &'static str,
    pub key_points: &'static [&'static str],
}

/// A short pro tip for running Scrum well
#[derive(Debug, Clone, Copy)]
pub struct ScrumTip {
    pub title: &'static str,
    pub description: &'static str,
}

/// A node of the issue hierarchy diagram
///
/// `summary` holds the precomputed "represents …" sentence tail, so the
/// info panel can prepend the highlighted name without reformatting at
/// render time.
#[derive(Debug, Clone, Copy)]
pub struct DiagramNode {
    pub id: &'static str,
    pub kind: IssueKind,
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub tip: &'static str,
}

/// One row of the Quick Comparison table
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRow {
    pub kind: IssueKind,
    pub name: &'static str,
    pub size: &'static str,
    pub time: &'static str,
    pub creator: &'static str,
}

/// A child of the Real-World Example tree
#[derive(Debug, Clone, Copy)]
pub struct TreeChild {
    pub kind: IssueKind,
    pub title: &'static str,
    pub indent: bool,
}

/// An HR-platform-specific consideration checklist
#[derive(Debug, Clone, Copy)]
pub struct HrConsideration {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// Look up a workflow stage by id
pub fn find_stage(id: &str) -> Option<&'static Stage> {
    STAGES.iter().find(|s| s.id == id)
}

/// Look up an issue type by name
pub fn find_issue_type(name: &str) -> Option<&'static IssueType> {
    ISSUE_TYPES.iter().find(|t| t.name == name)
}

/// Look up a diagram node by id
pub fn find_diagram_node(id: &str) -> Option<&'static DiagramNode> {
    DIAGRAM_NODES.iter().find(|n| n.id == id)
}
