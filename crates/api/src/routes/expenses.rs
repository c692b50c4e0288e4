//! Expense ledger routes.
//!
//! All operations are scoped to the authenticated owner; single-record
//! lookups filter on (id, owner) together so cross-owner probes read as
//! plain not-found.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use finbook_core::expense::validate_expense;
use finbook_db::{
    ExpenseRepository, entities::expenses,
    repositories::expense::{CreateExpenseInput, ExpenseUpdate},
};
use finbook_shared::AppError;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", put(update_expense).delete(delete_expense))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Description.
    pub description: Option<String>,
    /// Amount.
    pub amount: Option<Decimal>,
    /// Category display label.
    pub category: Option<String>,
    /// Expense date; defaults to the request time.
    pub date: Option<DateTime<Utc>>,
}

/// Request body for a partial expense update.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    /// New description.
    pub description: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New category display label.
    pub category: Option<String>,
    /// New date.
    pub date: Option<DateTime<Utc>>,
}

/// Response for an expense record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: Uuid,
    /// Owning user ID.
    pub user: Uuid,
    /// Description.
    pub description: String,
    /// Amount.
    pub amount: Decimal,
    /// Expense date.
    pub date: DateTime<Utc>,
    /// Category display label.
    pub category: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<expenses::Model> for ExpenseResponse {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            description: model.description,
            amount: model.amount,
            date: model.date.with_timezone(&Utc),
            category: model.category,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /expenses - List the owner's expenses, most recent first.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = ExpenseRepository::new((*state.db).clone())
        .list_for_user(auth.user_id())
        .await?;

    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}

/// POST /expenses - Create an expense for the owner.
async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    let mut missing = Vec::new();
    if payload.description.as_deref().unwrap_or_default().is_empty() {
        missing.push("description");
    }
    if payload.amount.is_none() {
        missing.push("amount");
    }
    if payload.category.as_deref().unwrap_or_default().is_empty() {
        missing.push("category");
    }
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let draft = validate_expense(
        &payload.description.unwrap_or_default(),
        payload.amount.unwrap_or_default(),
        &payload.category.unwrap_or_default(),
    )
    .map_err(|e| AppError::Validation(e.to_string()))?;

    let expense = ExpenseRepository::new((*state.db).clone())
        .create(CreateExpenseInput {
            user_id: auth.user_id(),
            description: draft.description,
            amount: draft.amount,
            date: payload.date.unwrap_or_else(Utc::now),
            category: draft.category,
        })
        .await?;

    info!(user_id = %auth.user_id(), expense_id = %expense.id, "Expense created");

    Ok((StatusCode::CREATED, Json(expense.into())))
}

/// PUT /expenses/{id} - Merge the supplied fields over an owned expense.
///
/// The merged record is re-validated before it is saved, so a partial
/// update cannot sneak an invalid value past creation-time rules.
async fn update_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());

    let existing = repo
        .find_owned(id, auth.user_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

    let description = payload
        .description
        .unwrap_or_else(|| existing.description.clone());
    let amount = payload.amount.unwrap_or(existing.amount);
    let category = payload
        .category
        .unwrap_or_else(|| existing.category.clone());
    let date = payload
        .date
        .unwrap_or_else(|| existing.date.with_timezone(&Utc));

    let draft = validate_expense(&description, amount, &category)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = repo
        .update(
            existing,
            ExpenseUpdate {
                description: draft.description,
                amount: draft.amount,
                date,
                category: draft.category,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /expenses/{id} - Remove an owned expense.
async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());

    let existing = repo
        .find_owned(id, auth.user_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

    repo.delete(existing).await?;

    info!(user_id = %auth.user_id(), expense_id = %id, "Expense deleted");

    Ok(Json(json!({ "message": "Expense deleted" })))
}
