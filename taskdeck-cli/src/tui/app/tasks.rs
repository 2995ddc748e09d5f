//! Task fetching and display mode

use super::App;
use crate::tui::widgets::VirtualList;
use taskdeck_api::{ApiError, Task};
use tracing::debug;

impl App {
    /// Fetch tasks for the current selection and apply the result.
    ///
    /// Without a selection there is nothing to fetch; the task view keeps
    /// its sentinel/previous contents.
    pub async fn load_tasks(&mut self) {
        let Some(list_id) = self.lists.selected.clone() else {
            return;
        };
        let result = self.client.fetch_tasks(&list_id).await;
        self.apply_tasks_result(result);
    }

    /// Apply a task-fetch result to the state.
    ///
    /// Success replaces the collection wholesale and clamps the cursor to
    /// the new visible length. Failure templates the error into the
    /// status message and leaves the collection exactly as it was.
    pub fn apply_tasks_result(&mut self, result: Result<Vec<Task>, ApiError>) {
        match result {
            Ok(tasks) => {
                debug!("loaded {} tasks", tasks.len());
                self.error_message = None;
                self.task_view.tasks = Some(tasks);
                self.task_view.clamp_cursor();
            }
            Err(err) => {
                self.error_message = Some(format!("タスクの取得に失敗しました。{}", err));
            }
        }
    }

    /// Flip between pending and completed tasks.
    pub fn toggle_display_mode(&mut self) {
        self.task_view.mode = self.task_view.mode.toggle();
        self.task_view.reset_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::DisplayMode;
    use chrono::{TimeZone, Utc};
    use taskdeck_api::{ApiClient, StatusCode};
    use taskdeck_config::Config;

    fn test_app() -> App {
        App::new(ApiClient::new("http://localhost:9", "test-token"), Config::default())
    }

    fn task(id: &str, done: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            done,
            limit: Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap(),
        }
    }

    fn status_error() -> ApiError {
        ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            url: "http://localhost:9/lists/1/tasks".to_string(),
        }
    }

    #[test]
    fn test_success_replaces_collection() {
        let mut app = test_app();
        assert!(app.task_view.tasks.is_none());

        app.apply_tasks_result(Ok(vec![task("a", false)]));
        assert_eq!(app.task_view.tasks.as_ref().map(Vec::len), Some(1));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_failure_keeps_previous_tasks_and_templates_message() {
        let mut app = test_app();
        app.apply_tasks_result(Ok(vec![task("a", false), task("b", true)]));

        let expected = format!("タスクの取得に失敗しました。{}", status_error());
        app.apply_tasks_result(Err(status_error()));

        assert_eq!(app.error_message, Some(expected));
        // No crash, no partial update
        assert_eq!(app.task_view.tasks.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_failure_before_first_load_keeps_sentinel() {
        let mut app = test_app();
        app.apply_tasks_result(Err(status_error()));
        assert!(app.task_view.tasks.is_none());
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_success_clears_stale_error() {
        let mut app = test_app();
        app.apply_tasks_result(Err(status_error()));
        app.apply_tasks_result(Ok(vec![]));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_success_clamps_cursor() {
        let mut app = test_app();
        app.apply_tasks_result(Ok(vec![
            task("a", false),
            task("b", false),
            task("c", false),
        ]));
        app.task_view.cursor = 2;

        app.apply_tasks_result(Ok(vec![task("a", false)]));
        assert_eq!(app.task_view.cursor, 0);
    }

    #[test]
    fn test_toggle_display_mode_resets_cursor() {
        let mut app = test_app();
        app.apply_tasks_result(Ok(vec![task("a", false), task("b", true)]));
        app.task_view.cursor = 1;

        app.toggle_display_mode();
        assert_eq!(app.task_view.mode, DisplayMode::Done);
        assert_eq!(app.task_view.cursor, 0);

        app.toggle_display_mode();
        assert_eq!(app.task_view.mode, DisplayMode::Todo);
    }
}
