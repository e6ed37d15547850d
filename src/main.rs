use std::io::{self, stdout};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

mod app;
mod cli;
mod models;
mod theme;
mod ui;

use app::App;
use models::View;
use models::data::{ISSUE_TYPES, STAGES};

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let width = terminal.size()?.width;
                if !handle_key(app, key.code, width) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to the app state; returns false to quit
fn handle_key(app: &mut App, code: KeyCode, width: u16) -> bool {
    match code {
        KeyCode::Char('q') => return false,
        KeyCode::Tab => app.set_active_view(app.active_view.next()),
        KeyCode::Right => app.set_active_view(app.active_view.next()),
        KeyCode::Left => app.set_active_view(app.active_view.prev()),
        KeyCode::Char('w') => app.set_active_view(View::Workflow),
        KeyCode::Char('i') => app.set_active_view(View::Issues),
        KeyCode::Char('p') => app.set_active_view(View::Practices),
        KeyCode::Esc => app.clear_view_selections(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => {
            let len = ui::content_lines(app, width).len();
            app.scroll_down(1, len);
        }
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => {
            let len = ui::content_lines(app, width).len();
            app.scroll_down(10, len);
        }
        KeyCode::Home => app.scroll_top(),
        KeyCode::Char(c) => handle_view_key(app, c),
        _ => {}
    }
    true
}

/// Keys whose meaning depends on the active view
fn handle_view_key(app: &mut App, c: char) {
    match app.active_view {
        View::Workflow => {
            if let Some(digit) = c.to_digit(10) {
                let index = digit as usize;
                if (1..=STAGES.len()).contains(&index) {
                    app.toggle_stage(STAGES[index - 1].id);
                }
            }
        }
        View::Issues => match c {
            '1'..='6' => {
                let index = c as usize - '1' as usize;
                app.toggle_issue_type(ISSUE_TYPES[index].name);
            }
            'e' => app.toggle_diagram_node("epic"),
            's' => app.toggle_diagram_node("story"),
            't' => app.toggle_diagram_node("task"),
            'b' => app.toggle_diagram_node("bug"),
            'u' => app.toggle_diagram_node("subtask"),
            _ => {}
        },
        View::Practices => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;

    fn app() -> App {
        App::new(CliConfig {
            start_view: View::default(),
        })
    }

    #[test]
    fn test_q_quits_and_everything_else_continues() {
        let mut app = app();
        assert!(!handle_key(&mut app, KeyCode::Char('q'), 100));
        assert!(handle_key(&mut app, KeyCode::Char('z'), 100));
        assert!(handle_key(&mut app, KeyCode::F(5), 100));
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Tab, 100);
        assert_eq!(app.active_view, View::Issues);
        handle_key(&mut app, KeyCode::Tab, 100);
        assert_eq!(app.active_view, View::Practices);
        handle_key(&mut app, KeyCode::Tab, 100);
        assert_eq!(app.active_view, View::Workflow);
    }

    #[test]
    fn test_digits_toggle_stages_in_workflow_view() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Char('5'), 100);
        assert_eq!(app.selected_stage, Some("qa"));
        handle_key(&mut app, KeyCode::Char('5'), 100);
        assert_eq!(app.selected_stage, None);
        // 9 maps to no stage
        handle_key(&mut app, KeyCode::Char('9'), 100);
        assert_eq!(app.selected_stage, None);
    }

    #[test]
    fn test_digits_toggle_issue_cards_in_issues_view() {
        let mut app = app();
        app.set_active_view(View::Issues);
        handle_key(&mut app, KeyCode::Char('5'), 100);
        assert_eq!(app.selected_issue_type, Some("Bug"));
        handle_key(&mut app, KeyCode::Char('2'), 100);
        assert_eq!(app.selected_issue_type, Some("Epic"));
    }

    #[test]
    fn test_letters_toggle_diagram_nodes_in_issues_view() {
        let mut app = app();
        app.set_active_view(View::Issues);
        handle_key(&mut app, KeyCode::Char('u'), 100);
        assert_eq!(app.selected_diagram_node, Some("subtask"));
        handle_key(&mut app, KeyCode::Char('u'), 100);
        assert_eq!(app.selected_diagram_node, None);
    }

    #[test]
    fn test_diagram_keys_do_nothing_in_workflow_view() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Char('e'), 100);
        assert_eq!(app.selected_diagram_node, None);
    }

    #[test]
    fn test_esc_collapses_active_view_only() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Char('3'), 100);
        app.set_active_view(View::Issues);
        handle_key(&mut app, KeyCode::Char('b'), 100);
        handle_key(&mut app, KeyCode::Esc, 100);
        assert_eq!(app.selected_diagram_node, None);
        assert_eq!(app.selected_stage, Some("inprogress"));
    }

    #[test]
    fn test_scroll_keys_move_within_content() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Down, 100);
        handle_key(&mut app, KeyCode::Down, 100);
        assert_eq!(app.scroll_offset, 2);
        handle_key(&mut app, KeyCode::Up, 100);
        assert_eq!(app.scroll_offset, 1);
        handle_key(&mut app, KeyCode::Home, 100);
        assert_eq!(app.scroll_offset, 0);
    }
}
