//! UI module for workflow-tui
//!
//! This module contains the frame renderer and the per-view content
//! builders. The builders are pure: catalog + selection state in, styled
//! lines out.

mod header;
mod helpers;
mod issues;
mod practices;
mod render;
mod workflow;

pub use helpers::wrap_text;
pub use render::{content_lines, render};
