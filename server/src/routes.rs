use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::model::{CreateTodoBody, Health, Todo, UpdateTodoBody};
use crate::store::TodoStore;

pub type SharedStore = Arc<dyn TodoStore>;

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = store
        .list()
        .await
        .map_err(AppError::storage("Failed to fetch todos"))?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    // An unreadable body carries no title.
    let Json(body) = body.map_err(|_| AppError::Validation("Title is required".to_string()))?;
    let input = body.validate()?;
    let todo = store
        .create(input)
        .await
        .map_err(AppError::storage("Failed to create todo"))?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Path(id) = id.map_err(invalid_id)?;
    let Json(body) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let patch = body.validate()?;
    if patch.is_empty() {
        tracing::debug!(id, "update without fields only refreshes updated_at");
    }
    let todo = store
        .update(id, patch)
        .await
        .map_err(AppError::storage("Failed to update todo"))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(invalid_id)?;
    let deleted = store
        .delete(id)
        .await
        .map_err(AppError::storage("Failed to delete todo"))?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    tracing::debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

fn invalid_id(_: PathRejection) -> AppError {
    AppError::Validation("Todo id must be an integer".to_string())
}
