//! Keyboard input handling
//!
//! Handlers are synchronous and return an optional async action for the
//! event loop to execute; nothing here performs I/O.

use super::app::App;
use super::state::{AsyncAction, Direction};
use super::widgets::VirtualList;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle a key event, mutating sync state and queueing fetches.
pub fn handle_input_sync(app: &mut App, key: KeyEvent) -> Option<AsyncAction> {
    // Ignore release events (Windows terminals send both)
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            None
        }

        // List tabs
        KeyCode::Left | KeyCode::Char('h') => app.cycle_selection(Direction::Backward),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_selection(Direction::Forward),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.select_nth(index)
        }

        // Task cursor
        KeyCode::Down | KeyCode::Char('j') => {
            app.task_view.move_down();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.task_view.move_up();
            None
        }
        KeyCode::Char('g') => {
            app.task_view.goto_top();
            None
        }
        KeyCode::Char('G') => {
            app.task_view.goto_bottom();
            None
        }

        // Display mode
        KeyCode::Tab | KeyCode::Char('d') => {
            app.toggle_display_mode();
            None
        }

        // Refresh
        KeyCode::Char('r') => Some(AsyncAction::RefreshLists),

        _ => None,
    }
}
