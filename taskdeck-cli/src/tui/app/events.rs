//! Async action execution

use super::App;
use crate::tui::state::AsyncAction;

impl App {
    /// Execute a queued async action, optionally yielding a follow-up.
    ///
    /// A list refresh chains into a task fetch for whatever ends up
    /// selected, reproducing the two sequential fetches of the page
    /// lifecycle.
    pub async fn execute_async_action(&mut self, action: AsyncAction) -> Option<AsyncAction> {
        match action {
            AsyncAction::RefreshLists => self.refresh_lists().await,
            AsyncAction::LoadTasks => {
                self.load_tasks().await;
                None
            }
        }
    }
}
