//! Stateless request builder and response parser for the remote todo store.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no state between calls.
//! Each of the four logical operations is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]; the caller executes the round-trip in between. Updates
//! are full-replace: the whole item goes on the wire, addressed by its id
//! path segment.

use crate::error::RemoteError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId};

/// Stateless client for one remote todo collection.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET up to `limit` items, in server-defined order.
    pub fn build_list_todos(&self, limit: u32) -> HttpRequest {
        HttpRequest::bare(
            HttpMethod::Get,
            format!("{}/todos?_limit={limit}", self.base_url),
        )
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, RemoteError> {
        let body = serde_json::to_string(input).map_err(RemoteError::payload)?;
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/todos", self.base_url),
            body,
        ))
    }

    /// PUT the entire item (full-replace, not partial-patch), addressed by
    /// the id it already carries.
    pub fn build_update_todo(&self, item: &Todo) -> Result<HttpRequest, RemoteError> {
        let body = serde_json::to_string(item).map_err(RemoteError::payload)?;
        Ok(HttpRequest::json(
            HttpMethod::Put,
            format!("{}/todos/{}", self.base_url, item.id),
            body,
        ))
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, format!("{}/todos/{id}", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, RemoteError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(RemoteError::payload)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, RemoteError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(RemoteError::payload)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, RemoteError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(RemoteError::payload)
    }

    /// The delete endpoint returns no usable body; success is the status.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), RemoteError> {
        check_success(&response)
    }
}

fn check_success(response: &HttpResponse) -> Result<(), RemoteError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(RemoteError::status(response.status, &response.body))
    }
}
