//! Todo routes.
//!
//! The todo list is shared and unauthenticated, exactly as in the original
//! service; no owner scoping applies here.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use finbook_db::{TodoRepository, entities::todos, repositories::todo::TodoChanges};
use finbook_shared::AppError;

/// Creates the todo routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo text.
    pub text: Option<String>,
    /// Completion flag; defaults to false.
    #[serde(default)]
    pub completed: bool,
}

/// Request body for a partial todo update.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// New text.
    pub text: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

/// Response for a todo item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo ID.
    pub id: Uuid,
    /// Todo text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<todos::Model> for TodoResponse {
    fn from(model: todos::Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            completed: model.completed,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /todos - List all todos, oldest first.
async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = TodoRepository::new((*state.db).clone()).list().await?;
    Ok(Json(todos.into_iter().map(Into::into).collect()))
}

/// POST /todos - Add a todo.
async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let text = payload.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::MissingFields(vec!["text"]));
    }

    let todo = TodoRepository::new((*state.db).clone())
        .create(&text, payload.completed)
        .await?;

    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// PUT /todos/{id} - Merge the supplied fields over a todo.
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let repo = TodoRepository::new((*state.db).clone());

    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    let updated = repo
        .update(
            existing,
            TodoChanges {
                text: payload.text,
                completed: payload.completed,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /todos/{id} - Remove a todo.
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = TodoRepository::new((*state.db).clone());

    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    repo.delete(existing).await?;

    Ok(Json(json!({ "message": "Todo deleted" })))
}
