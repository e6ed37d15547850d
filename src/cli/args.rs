//! CLI argument parsing and configuration.

use std::io;

use crate::models::View;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub start_view: View,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Workflow TUI - Terminal guide to the JIRA development workflow");
    eprintln!();
    eprintln!("Usage: workflow-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --view <NAME>   Start on a specific view:");
    eprintln!("                  workflow | issues | practices (default: workflow)");
    eprintln!("  -h, --help      Show this help message");
    eprintln!("  -V, --version   Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Tab / Left / Right   Switch view       w/i/p   Jump to a view");
    eprintln!("  1-8                  Toggle stage card (Workflow view)");
    eprintln!("  1-6                  Toggle issue card (Issue Types view)");
    eprintln!("  e/s/t/b/u            Toggle diagram node (Issue Types view)");
    eprintln!("  Up/Down/PgUp/PgDn    Scroll            Esc     Collapse all");
    eprintln!("  q                    Quit");
}

/// Parse a view name as accepted by `--view`
pub fn parse_view(name: &str) -> Option<View> {
    match name {
        "workflow" => Some(View::Workflow),
        "issues" => Some(View::Issues),
        "practices" => Some(View::Practices),
        _ => None,
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut start_view = View::default();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("workflow-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--view" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --view",
                ));
            }
            start_view = parse_view(&args[i]).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid view name: {}", args[i]),
                )
            })?;
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig { start_view })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_known_names() {
        assert_eq!(parse_view("workflow"), Some(View::Workflow));
        assert_eq!(parse_view("issues"), Some(View::Issues));
        assert_eq!(parse_view("practices"), Some(View::Practices));
    }

    #[test]
    fn test_parse_view_rejects_unknown_names() {
        assert_eq!(parse_view("Issues"), None);
        assert_eq!(parse_view(""), None);
        assert_eq!(parse_view("board"), None);
    }
}
