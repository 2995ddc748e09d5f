//! HTTP client for the task service

use crate::types::{Task, TaskList, TasksResponse};
use crate::{ApiError, Result};
use tracing::debug;

/// Task service client
///
/// Holds the base URL and bearer token for the lifetime of the client.
/// Both read endpoints replace their collection wholesale on success;
/// there is no retry or backoff on failure.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Create a client for `base_url`, authenticating with `token`.
    ///
    /// The credential is taken here, once, rather than read from any
    /// ambient store on each request.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Fetch all task lists, in display order.
    pub async fn fetch_lists(&self) -> Result<Vec<TaskList>> {
        let url = format!("{}/lists", self.base_url);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    /// Fetch the tasks belonging to `list_id`.
    pub async fn fetch_tasks(&self, list_id: &str) -> Result<Vec<Task>> {
        let url = format!("{}/lists/{}/tasks", self.base_url, list_id);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = check_status(response)?;
        let envelope: TasksResponse = response.json().await?;
        Ok(envelope.tasks)
    }
}

/// Map a non-2xx response to `ApiError::Status`.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}
