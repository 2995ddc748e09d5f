//! Tab bar and status bar rendering

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Draw list tabs at the top
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = app
        .lists
        .lists
        .iter()
        .enumerate()
        .map(|(i, list)| {
            let num = if i < 9 {
                format!("{}:", i + 1)
            } else {
                String::new()
            };
            Line::from(format!("{}{}", num, list.title))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Taskdeck - Lists "),
        )
        .select(app.lists.selected_index().unwrap_or(0))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    f.render_widget(tabs, area);
}

const HELP: &str =
    "←/→ Lists | j/k Tasks | [1-9] Jump | Tab Todo/Done | g/G Top/Bottom | r Refresh | q Quit";

/// Draw status bar at the bottom: latest fetch failure, or the detail
/// route of the task under the cursor plus key help
pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (message, color) = if let Some(err) = &app.error_message {
        (err.clone(), Color::Red)
    } else if let (Some(list_id), Some(task)) =
        (app.lists.selected.as_deref(), app.task_view.current())
    {
        let route = format!("/lists/{}/tasks/{}", list_id, task.id);
        (format!("{} | {}", route, HELP), Color::DarkGray)
    } else {
        (HELP.to_string(), Color::DarkGray)
    };

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}
