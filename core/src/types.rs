//! Domain DTOs for the remote todo store.
//!
//! # Design
//! Field names follow the store's wire format (camelCase, so `user_id`
//! serializes as `userId`), letting the same types serve as domain model and
//! JSON schema. The mock-server crate defines its own copies; integration
//! tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store when an item is created. The
/// client never invents one.
pub type TodoId = u64;

/// A single todo item as the remote store represents it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub user_id: u64,
}

/// Request payload for creating a new todo: everything but the id, which the
/// server assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    pub user_id: u64,
    #[serde(default)]
    pub completed: bool,
}

// Updates are full-replace (the whole `Todo` goes on the wire), so there is
// no partial-update payload type.
