//! Local todo state, kept in sync with the remote store.
//!
//! # Design
//! `TodoStore` owns the ordered collection and the transient state around
//! it (add-input draft, loading flag, at most one edit session). Mutations
//! follow Idle → Pending → {Committed | Failed} as a two-call shape:
//!
//! 1. An issue method (`fetch_all`, `add`, `remove`, `toggle`,
//!    `commit_edit`) returns a [`PendingOp`] carrying the request. The
//!    collection is not touched yet; a request in flight is invisible.
//! 2. The host executes the request and calls [`TodoStore::resolve`] with
//!    the outcome. Success commits the server's representation (the
//!    response payload, never the local guess); failure changes nothing.
//!
//! Every commit swaps in a whole new collection derived from the snapshot
//! captured when the operation was issued, not from whatever other
//! operations committed in the meantime.
//!
//! There is no mutual exclusion between in-flight operations. Because each
//! commit is a wholesale swap derived from its own issue-time snapshot, two
//! requests racing on the same id settle in resolution order: the last
//! response to resolve determines the final local state regardless of issue
//! order. A toggle resolving after a delete re-materializes the item, since
//! the toggle's snapshot still holds it.

use crate::client::TodoClient;
use crate::error::RemoteError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId};

/// Number of items requested on a full refresh.
const FETCH_LIMIT: u32 = 6;

/// Owner id stamped on every item created by this client.
const DEFAULT_USER_ID: u64 = 1;

/// Which store mutation a pending request belongs to. Ids are captured at
/// issue time because delete responses carry no usable body and update
/// responses are reconciled by id, not by position.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OpKind {
    Fetch,
    Create,
    Toggle { id: TodoId },
    Delete { id: TodoId },
    EditCommit { id: TodoId },
}

/// A mutation that has been issued but not yet resolved.
///
/// The host executes `request` and hands the outcome to
/// [`TodoStore::resolve`]. Pending operations may be resolved in any order,
/// including an order different from the one they were issued in.
#[derive(Debug, Clone)]
pub struct PendingOp {
    pub request: HttpRequest,
    kind: OpKind,
    /// The collection as it was at issue time. A commit derives the next
    /// collection from this snapshot, so the last operation to resolve
    /// wins wholesale.
    snapshot: Vec<Todo>,
}

/// The single in-progress edit. At most one exists at a time; starting a new
/// edit replaces any previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    item: Todo,
    draft: String,
}

impl EditSession {
    /// Snapshot of the item as it was when editing began.
    pub fn item(&self) -> &Todo {
        &self.item
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }
}

/// Owns the local view of the remote collection.
#[derive(Debug)]
pub struct TodoStore {
    client: TodoClient,
    todos: Vec<Todo>,
    input: String,
    loading: bool,
    edit: Option<EditSession>,
}

impl TodoStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            todos: Vec::new(),
            input: String::new(),
            loading: false,
            edit: None,
        }
    }

    /// The current collection snapshot, in fetch/creation order. Replaced
    /// wholesale on every committed mutation.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// True while a `fetch_all` is pending. Does not block other mutations.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The add-input draft. Cleared only when a create commits.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Issue a full refresh of the collection.
    pub fn fetch_all(&mut self) -> PendingOp {
        self.loading = true;
        PendingOp {
            request: self.client.build_list_todos(FETCH_LIMIT),
            kind: OpKind::Fetch,
            snapshot: Vec::new(),
        }
    }

    /// Issue a create for the current input draft. Returns `None` without
    /// touching anything if the draft is empty after trimming.
    pub fn add(&mut self) -> Option<PendingOp> {
        let title = self.input.trim();
        if title.is_empty() {
            return None;
        }
        let draft = CreateTodo {
            title: title.to_string(),
            user_id: DEFAULT_USER_ID,
            completed: false,
        };
        let request = self.client.build_create_todo(&draft).ok()?;
        Some(PendingOp {
            request,
            kind: OpKind::Create,
            snapshot: self.todos.clone(),
        })
    }

    /// Issue a delete. The item stays listed until the delete resolves.
    pub fn remove(&mut self, id: TodoId) -> PendingOp {
        PendingOp {
            request: self.client.build_delete_todo(id),
            kind: OpKind::Delete { id },
            snapshot: self.todos.clone(),
        }
    }

    /// Issue a completed-flag flip for `id`, sending the entire mutated item
    /// (full-replace). A stale id is a no-op.
    pub fn toggle(&mut self, id: TodoId) -> Option<PendingOp> {
        let current = self.todos.iter().find(|t| t.id == id)?;
        let mut flipped = current.clone();
        flipped.completed = !flipped.completed;
        let request = self.client.build_update_todo(&flipped).ok()?;
        Some(PendingOp {
            request,
            kind: OpKind::Toggle { id },
            snapshot: self.todos.clone(),
        })
    }

    /// Open an edit session on `id`, seeding the draft from the current
    /// title. A stale id is a no-op.
    pub fn begin_edit(&mut self, id: TodoId) {
        if let Some(item) = self.todos.iter().find(|t| t.id == id) {
            self.edit = Some(EditSession {
                draft: item.title.clone(),
                item: item.clone(),
            });
        }
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.edit {
            edit.draft = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Issue an update carrying the edit session's item with only the title
    /// overridden. `None` if no session is open or the draft trims empty.
    /// The session stays open until the update commits.
    pub fn commit_edit(&mut self) -> Option<PendingOp> {
        let edit = self.edit.as_ref()?;
        let title = edit.draft.trim();
        if title.is_empty() {
            return None;
        }
        let mut updated = edit.item.clone();
        updated.title = title.to_string();
        let request = self.client.build_update_todo(&updated).ok()?;
        Some(PendingOp {
            request,
            kind: OpKind::EditCommit { id: updated.id },
            snapshot: self.todos.clone(),
        })
    }

    /// Reconcile the outcome of a previously issued operation.
    ///
    /// On success the server's payload is committed into the collection; on
    /// failure the store is left exactly as it was (except the loading flag,
    /// which a fetch always clears). The returned error is informational —
    /// ignoring it is the expected mode of use, and nothing in the store
    /// records it.
    pub fn resolve(
        &mut self,
        op: PendingOp,
        outcome: Result<HttpResponse, RemoteError>,
    ) -> Result<(), RemoteError> {
        match op.kind {
            OpKind::Fetch => {
                // Cleared before the outcome is inspected, so no failure
                // path can leave the flag stuck.
                self.loading = false;
                let items = self.client.parse_list_todos(outcome?)?;
                self.todos = items;
            }
            OpKind::Create => {
                let created = self.client.parse_create_todo(outcome?)?;
                let mut next = op.snapshot;
                next.push(created);
                self.todos = next;
                self.input.clear();
            }
            OpKind::Toggle { id } => {
                let echoed = self.client.parse_update_todo(outcome?)?;
                self.todos = replace_by_id(op.snapshot, id, echoed);
            }
            OpKind::EditCommit { id } => {
                let echoed = self.client.parse_update_todo(outcome?)?;
                self.todos = replace_by_id(op.snapshot, id, echoed);
                self.edit = None;
            }
            OpKind::Delete { id } => {
                self.client.parse_delete_todo(outcome?)?;
                self.todos = op.snapshot.into_iter().filter(|t| t.id != id).collect();
            }
        }
        Ok(())
    }
}

/// Derive the committed collection from an issue-time snapshot: the server's
/// representation of one item swapped in, every other item carried over in
/// position.
fn replace_by_id(snapshot: Vec<Todo>, id: TodoId, item: Todo) -> Vec<Todo> {
    snapshot
        .into_iter()
        .map(|t| if t.id == id { item.clone() } else { t })
        .collect()
}
