//! Task list rendering

use crate::tui::app::App;
use crate::tui::deadline::{format_deadline, format_remaining, remaining_minutes};
use crate::tui::state::DisplayMode;
use crate::tui::widgets::VirtualList;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the tasks of the selected list, filtered by display mode.
///
/// Each row shows title, normalized deadline, remaining time, and the
/// completion label. The not-yet-fetched sentinel and an empty
/// collection both render an empty list.
pub fn draw_task_list(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.task_view.mode {
        DisplayMode::Todo => " Tasks (未完了) ",
        DisplayMode::Done => " Tasks (完了) ",
    };
    let borders = if app.config.ui.show_borders {
        Borders::ALL
    } else {
        Borders::NONE
    };
    let block = Block::default().borders(borders).title(title);

    let now = Utc::now();
    let visible = app.task_view.visible();

    let viewport = area.height.saturating_sub(2) as usize;
    let offset = app.task_view.scroll_offset(viewport);

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport.max(1))
        .map(|(idx, task)| {
            let deadline = format_deadline(task.limit);
            let remaining = format_remaining(remaining_minutes(task.limit, now));
            let label = if task.done { "完了" } else { "未完了" };
            let text = format!("{}　　期限：{}　{}　{}", task.title, deadline, remaining, label);

            let style = if idx == app.task_view.cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if task.done {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
