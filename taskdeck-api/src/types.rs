//! Wire types for the task service

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A named grouping of tasks, as returned by `GET /lists`.
///
/// The order of the response is display-significant: it drives tab order
/// and arrow-key cycling in the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub title: String,
}

/// A unit of work belonging to exactly one list.
///
/// The list relationship is held by the fetch call
/// (`GET /lists/{id}/tasks`), not embedded in the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub done: bool,
    /// Absolute deadline, stored server-side with a fixed +9h offset.
    pub limit: DateTime<Utc>,
}

/// Envelope for `GET /lists/{id}/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let json = r#"[{"id":"list-1","title":"Work"},{"id":"list-2","title":"Home"}]"#;
        let lists: Vec<TaskList> = serde_json::from_str(json).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, "list-1");
        assert_eq!(lists[1].title, "Home");
    }

    #[test]
    fn test_parse_tasks_envelope() {
        let json = r#"{"tasks":[
            {"id":"t1","title":"Write report","done":false,"limit":"2026-09-01T09:00:00Z"},
            {"id":"t2","title":"Send mail","done":true,"limit":"2026-08-30T00:30:00Z"}
        ]}"#;
        let resp: TasksResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.tasks.len(), 2);
        assert!(!resp.tasks[0].done);
        assert!(resp.tasks[1].done);
        assert_eq!(resp.tasks[0].limit.to_rfc3339(), "2026-09-01T09:00:00+00:00");
    }

    #[test]
    fn test_parse_empty_tasks() {
        let resp: TasksResponse = serde_json::from_str(r#"{"tasks":[]}"#).unwrap();
        assert!(resp.tasks.is_empty());
    }
}
