//! CLI argument parsing for workflow-tui.

mod args;

pub use args::{CliConfig, VERSION, parse_args};
