//! TUI state types
//!
//! Grouped state structs used by the application, separated from the
//! event loop so selection and filtering logic can be tested on their
//! own.

use taskdeck_api::{Task, TaskList};

/// Which completion status is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Todo,
    Done,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Todo => DisplayMode::Done,
            DisplayMode::Done => DisplayMode::Todo,
        }
    }

    /// Whether a task with the given completion flag is visible
    pub fn shows(self, done: bool) -> bool {
        match self {
            DisplayMode::Todo => !done,
            DisplayMode::Done => done,
        }
    }
}

/// Cycle direction for list tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Async actions that can be queued from sync input handlers
#[derive(Debug, PartialEq, Eq)]
pub enum AsyncAction {
    /// Re-fetch the list collection (chains into a task fetch)
    RefreshLists,
    /// Fetch tasks for the current selection
    LoadTasks,
}

/// Stable, order-preserving filter over the task collection.
///
/// `None` is the not-yet-fetched sentinel; it renders nothing, same as an
/// empty collection, without being conflated with it.
pub fn filter_tasks(tasks: Option<&[Task]>, mode: DisplayMode) -> Vec<&Task> {
    match tasks {
        Some(tasks) => tasks.iter().filter(|t| mode.shows(t.done)).collect(),
        None => Vec::new(),
    }
}

/// List tab state: the ordered collection and the active selection
#[derive(Debug, Default)]
pub struct ListTabsState {
    /// All task lists, in the server's display order
    pub lists: Vec<TaskList>,
    /// Id of the selected list; `None` only before the first load
    pub selected: Option<String>,
}

impl ListTabsState {
    /// Index of the selected list within the collection
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.lists.iter().position(|l| l.id == selected)
    }

    /// Select `id` if it is a member of the collection.
    ///
    /// Returns false (selection unchanged) for unknown ids. Re-selecting
    /// the current id succeeds, so clicking the active tab re-fetches.
    pub fn select(&mut self, id: &str) -> bool {
        if self.lists.iter().any(|l| l.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Compute the id one step forward or backward from the selection.
    ///
    /// Wraps around at both ends. A selection that is no longer in the
    /// collection behaves as index -1: forward lands on the first list,
    /// backward on the last. Returns `None` only when the collection is
    /// empty.
    pub fn cycle_target(&self, direction: Direction) -> Option<&str> {
        if self.lists.is_empty() {
            return None;
        }
        let len = self.lists.len() as i64;
        let index = self.selected_index().map(|i| i as i64).unwrap_or(-1);
        let next = match direction {
            Direction::Forward => (index + 1).rem_euclid(len),
            Direction::Backward if index < 0 => len - 1,
            Direction::Backward => (index - 1 + len).rem_euclid(len),
        };
        Some(self.lists[next as usize].id.as_str())
    }
}

/// Task view state: the fetched collection, display mode, and cursor
#[derive(Debug, Default)]
pub struct TaskViewState {
    /// Tasks for the selected list; `None` until the first fetch succeeds
    pub tasks: Option<Vec<Task>>,
    /// Which completion status is shown
    pub mode: DisplayMode,
    /// Cursor position within the visible (filtered) tasks
    pub cursor: usize,
}

impl TaskViewState {
    /// The visible tasks under the current mode, input order preserved
    pub fn visible(&self) -> Vec<&Task> {
        filter_tasks(self.tasks.as_deref(), self.mode)
    }

    /// The task under the cursor, if any
    pub fn current(&self) -> Option<&Task> {
        self.visible().get(self.cursor).copied()
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}

// VirtualList implementation for cursor navigation
use super::widgets::VirtualList;

impl VirtualList for TaskViewState {
    fn virtual_len(&self) -> usize {
        self.visible().len()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn list(id: &str, title: &str) -> TaskList {
        TaskList {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    fn task(id: &str, done: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            done,
            limit: Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap(),
        }
    }

    fn two_lists() -> ListTabsState {
        ListTabsState {
            lists: vec![list("1", "A"), list("2", "B")],
            selected: Some("1".to_string()),
        }
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut tabs = two_lists();
        assert!(!tabs.select("nope"));
        assert_eq!(tabs.selected.as_deref(), Some("1"));
    }

    #[test]
    fn test_select_current_id_succeeds() {
        let mut tabs = two_lists();
        assert!(tabs.select("1"));
        assert_eq!(tabs.selected.as_deref(), Some("1"));
    }

    #[test]
    fn test_cycle_forward_and_wrap() {
        let mut tabs = two_lists();
        let target = tabs.cycle_target(Direction::Forward).unwrap().to_string();
        assert_eq!(target, "2");
        tabs.select(&target);

        // Forward again wraps to the first list
        let target = tabs.cycle_target(Direction::Forward).unwrap().to_string();
        assert_eq!(target, "1");
    }

    #[test]
    fn test_cycle_backward_wraps_from_first() {
        let tabs = two_lists();
        assert_eq!(tabs.cycle_target(Direction::Backward), Some("2"));
    }

    #[test]
    fn test_cycle_is_inverse() {
        // Forward then backward returns to the start from every position
        let mut tabs = ListTabsState {
            lists: vec![list("1", "A"), list("2", "B"), list("3", "C")],
            selected: None,
        };
        for start in ["1", "2", "3"] {
            tabs.select(start);
            let fwd = tabs.cycle_target(Direction::Forward).unwrap().to_string();
            tabs.select(&fwd);
            let back = tabs.cycle_target(Direction::Backward).unwrap().to_string();
            assert_eq!(back, start);
        }
    }

    #[test]
    fn test_cycle_with_missing_selection() {
        // A vanished selection behaves as index -1
        let mut tabs = two_lists();
        tabs.selected = Some("gone".to_string());
        assert_eq!(tabs.cycle_target(Direction::Forward), Some("1"));
        assert_eq!(tabs.cycle_target(Direction::Backward), Some("2"));
    }

    #[test]
    fn test_cycle_empty_collection() {
        let tabs = ListTabsState::default();
        assert_eq!(tabs.cycle_target(Direction::Forward), None);
        assert_eq!(tabs.cycle_target(Direction::Backward), None);
    }

    #[test]
    fn test_filter_preserves_order() {
        let tasks = vec![task("a", false), task("b", true), task("c", false)];
        let todo = filter_tasks(Some(&tasks), DisplayMode::Todo);
        assert_eq!(
            todo.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        let done = filter_tasks(Some(&tasks), DisplayMode::Done);
        assert_eq!(
            done.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tasks = vec![task("a", false), task("b", true), task("c", false)];
        let once: Vec<Task> = filter_tasks(Some(&tasks), DisplayMode::Todo)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_tasks(Some(&once), DisplayMode::Todo);
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_partitions_exactly() {
        let tasks = vec![
            task("a", false),
            task("b", true),
            task("c", false),
            task("d", true),
        ];
        let todo = filter_tasks(Some(&tasks), DisplayMode::Todo);
        let done = filter_tasks(Some(&tasks), DisplayMode::Done);

        assert_eq!(todo.len() + done.len(), tasks.len());
        // Disjoint
        assert!(todo.iter().all(|t| done.iter().all(|d| d.id != t.id)));
        // Union covers the original set
        for t in &tasks {
            let in_todo = todo.iter().any(|x| x.id == t.id);
            let in_done = done.iter().any(|x| x.id == t.id);
            assert!(in_todo ^ in_done);
        }
    }

    #[test]
    fn test_filter_null_sentinel_and_empty() {
        assert!(filter_tasks(None, DisplayMode::Todo).is_empty());
        assert!(filter_tasks(Some(&[]), DisplayMode::Todo).is_empty());
    }

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::Todo.toggle(), DisplayMode::Done);
        assert_eq!(DisplayMode::Done.toggle(), DisplayMode::Todo);
    }

    #[test]
    fn test_task_view_current_follows_filter() {
        let mut view = TaskViewState {
            tasks: Some(vec![task("a", true), task("b", false)]),
            mode: DisplayMode::Todo,
            cursor: 0,
        };
        assert_eq!(view.current().map(|t| t.id.as_str()), Some("b"));

        view.mode = DisplayMode::Done;
        assert_eq!(view.current().map(|t| t.id.as_str()), Some("a"));

        view.tasks = None;
        assert_eq!(view.current(), None);
    }
}
