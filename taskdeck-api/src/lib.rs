//! Taskdeck API client
//!
//! Shared wire types and the HTTP client for the remote task service.
//! The client is independent of the TUI; the credential and base URL are
//! explicit constructor arguments so the crate can be exercised without
//! any ambient configuration.
//!
//! - [`types`] - Data structures for lists and tasks
//! - [`client`] - HTTP client wrapping the two read endpoints

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{Task, TaskList, TasksResponse};

// Re-exported so downstream crates can match on statuses without
// depending on reqwest directly.
pub use reqwest::StatusCode;

/// Errors that can occur while talking to the task service
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;
