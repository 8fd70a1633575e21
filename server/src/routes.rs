use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, DefaultBodyLimit, Path, State},
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{CreateTodo, DeleteConfirmation, TodoItem};
use crate::store::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

/// `content` has no length limit, so the default 2 MiB body cap is lifted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{todo_id}", delete(delete_todo))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Json(input) = payload?;
    let todo = TodoItem::new(input.content);
    state.store.insert(&todo).await?;
    tracing::debug!(id = %todo.id, "todo created");
    Ok(Json(todo))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

async fn delete_todo(
    State(state): State<AppState>,
    todo_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let Path(id) = todo_id?;
    if state.store.delete(id).await? == 0 {
        tracing::debug!(%id, "delete matched nothing");
        return Err(ApiError::NotFound);
    }
    tracing::debug!(%id, "todo deleted");
    Ok(Json(DeleteConfirmation::deleted()))
}
