//! Client-side synchronization core for the todo service.
//!
//! # Overview
//! Two layers, in dependency order:
//! - [`TodoClient`] binds the four logical operations (list, create, full
//!   update, delete) to a fixed collection resource, building `HttpRequest`
//!   values and parsing `HttpResponse` values without touching the network
//!   (host-does-IO pattern).
//! - [`TodoStore`] owns the local view of the collection plus the transient
//!   state around it (add-input draft, loading flag, edit session). Each
//!   mutation is issued as a [`PendingOp`]; the host executes the request
//!   and hands the outcome back to [`TodoStore::resolve`], which commits the
//!   server's representation into local state — or, on failure, changes
//!   nothing at all.
//!
//! # Design
//! - Local state is only ever mutated from a resolved server response, never
//!   optimistically. A request in flight is invisible until it commits.
//! - Failures are silent by contract: `resolve` returns a `Result` so the
//!   discard is the caller's explicit choice, but nothing records the error.
//! - The crate is fully deterministic and I/O-free; unit tests feed canned
//!   responses, integration tests execute real HTTP in the host.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::RemoteError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{EditSession, PendingOp, TodoStore};
pub use types::{CreateTodo, Todo, TodoId};
