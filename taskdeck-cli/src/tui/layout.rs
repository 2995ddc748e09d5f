//! Top-level frame layout

use super::app::App;
use super::views::tab_bar::{draw_status_bar, draw_tab_bar};
use super::views::tasks::draw_task_list;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the whole UI: list tabs, task list, status bar.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_tab_bar(f, chunks[0], app);
    draw_task_list(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);
}
