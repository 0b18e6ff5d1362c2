//! In-memory stand-in for the remote todo collection resource.
//!
//! Mimics the conventions of the real service: sequential integer ids
//! starting at 1, insertion-ordered listing with an optional `_limit` query
//! parameter, camelCase JSON, and full-replace PUT semantics.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub user_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    pub user_id: u64,
    #[serde(default)]
    pub completed: bool,
}

/// Full-replace PUT body. An `id` field in the body is accepted but ignored;
/// the path segment is authoritative.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTodo {
    pub title: String,
    pub user_id: u64,
    pub completed: bool,
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(rename = "_limit")]
    limit: Option<usize>,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(replace_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let limit = params.limit.unwrap_or(store.todos.len());
    Json(store.todos.iter().take(limit).cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        completed: input.completed,
        user_id: input.user_id,
    };
    store.todos.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn replace_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ReplaceTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.completed = input.completed;
    todo.user_id = input.user_id;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != id);
    if store.todos.len() < before {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
