//! Data models for workflow-tui
//!
//! This module contains the core data structures:
//! - Catalog record types and lookup functions
//! - The static content tables themselves
//! - Enums for view-state management and visual descriptors

pub mod catalog;
pub mod data;
pub mod enums;

// Re-exports for convenient access
pub use catalog::{find_diagram_node, find_issue_type, find_stage};
pub use enums::{IssueKind, View};
