use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::{debug, info, warn};

use crate::model::task::{Task, TaskDraft};

/// Error type for backend operations. Every failure flattens to a
/// one-line message for the single UI error channel.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("title is required")]
    EmptyTitle,
    #[error("server returned {status} for {method} {path}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Blocking client for the task resource API.
///
/// Requests carry no timeout and are never retried: a failed attempt is
/// terminal until the user retries it. Non-2xx responses are failures
/// regardless of body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        // The stock client imposes a 30s timeout; requests here run
        // without one.
        let http = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .unwrap_or_else(|_| Client::new());
        ApiClient { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(method: &'static str, path: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(method, path, status = status.as_u16(), "request rejected");
            Err(ApiError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
            })
        }
    }

    /// Fetch the full task collection.
    pub fn list(&self) -> Result<Vec<Task>, ApiError> {
        let path = "/tasks";
        debug!(path, "GET");
        let response = self.http.get(self.url(path)).send()?;
        let response = Self::check("GET", path, response)?;
        Ok(response.json()?)
    }

    /// Fetch a single task by id.
    pub fn get(&self, id: u64) -> Result<Task, ApiError> {
        let path = format!("/tasks/{id}");
        debug!(%path, "GET");
        let response = self.http.get(self.url(&path)).send()?;
        let response = Self::check("GET", &path, response)?;
        Ok(response.json()?)
    }

    /// Create a task; returns it with its server-assigned id.
    /// Rejects an empty or whitespace-only title before any request.
    pub fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        if draft.title.trim().is_empty() {
            return Err(ApiError::EmptyTitle);
        }
        let path = "/tasks/";
        debug!(path, title = %draft.title, "POST");
        let response = self.http.post(self.url(path)).json(draft).send()?;
        let response = Self::check("POST", path, response)?;
        let task: Task = response.json()?;
        info!(id = task.id, "created task");
        Ok(task)
    }

    /// Replace a task's fields. Success is status-only: the backend may
    /// answer with the task or a bare message, neither is consulted.
    pub fn update(&self, id: u64, draft: &TaskDraft) -> Result<(), ApiError> {
        let path = format!("/tasks/{id}");
        debug!(%path, "PUT");
        let response = self.http.put(self.url(&path)).json(draft).send()?;
        Self::check("PUT", &path, response)?;
        info!(id, "updated task");
        Ok(())
    }

    /// Delete a task by id. Status-only, like update.
    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("/tasks/{id}");
        debug!(%path, "DELETE");
        let response = self.http.delete(self.url(&path)).send()?;
        Self::check("DELETE", &path, response)?;
        info!(id, "deleted task");
        Ok(())
    }
}
