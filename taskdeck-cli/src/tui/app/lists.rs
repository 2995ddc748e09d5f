//! List collection refresh and selection

use super::App;
use crate::tui::state::{AsyncAction, Direction};
use taskdeck_api::{ApiError, TaskList};
use tracing::debug;

impl App {
    /// Fetch the list collection and apply the result.
    ///
    /// Returns the follow-up task fetch when a selection exists after the
    /// collection is replaced.
    pub async fn refresh_lists(&mut self) -> Option<AsyncAction> {
        let result = self.client.fetch_lists().await;
        self.apply_lists_result(result)
    }

    /// Apply a list-fetch result to the state.
    ///
    /// On success the collection is replaced wholesale. The selection is
    /// kept when it still names a present list and otherwise moves to the
    /// first list, so it always references a member once the collection
    /// is non-empty. On failure the collection and selection are left
    /// untouched and the error is templated into the status message.
    pub fn apply_lists_result(
        &mut self,
        result: Result<Vec<TaskList>, ApiError>,
    ) -> Option<AsyncAction> {
        match result {
            Ok(lists) => {
                debug!("loaded {} lists", lists.len());
                self.error_message = None;
                self.lists.lists = lists;

                if self.lists.selected_index().is_none() {
                    self.lists.selected = self.lists.lists.first().map(|l| l.id.clone());
                    self.task_view.reset_cursor();
                }
                self.lists
                    .selected
                    .is_some()
                    .then_some(AsyncAction::LoadTasks)
            }
            Err(err) => {
                self.error_message = Some(format!("リストの取得に失敗しました。{}", err));
                None
            }
        }
    }

    /// Select a list by id and queue its task fetch.
    ///
    /// Ids not present in the collection leave the selection unchanged.
    pub fn select_list(&mut self, id: &str) -> Option<AsyncAction> {
        if !self.lists.select(id) {
            return None;
        }
        self.task_view.reset_cursor();
        Some(AsyncAction::LoadTasks)
    }

    /// Select the list at a zero-based tab position.
    pub fn select_nth(&mut self, index: usize) -> Option<AsyncAction> {
        let id = self.lists.lists.get(index)?.id.clone();
        self.select_list(&id)
    }

    /// Move the selection one tab forward or backward, wrapping around.
    pub fn cycle_selection(&mut self, direction: Direction) -> Option<AsyncAction> {
        let target = self.lists.cycle_target(direction)?.to_string();
        self.select_list(&target)
    }
}
