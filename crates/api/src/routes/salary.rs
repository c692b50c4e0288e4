//! Salary routes for the per-month singleton record.
//!
//! "Current" is always resolved by querying for the latest record on or
//! after the first instant of the current calendar month, computed from
//! server-local time.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use finbook_core::period::month_start;
use finbook_db::{SalaryRepository, entities::salaries};
use finbook_shared::AppError;

/// Creates the salary routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/salary",
        get(get_salary).post(set_salary).put(update_salary),
    )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for setting or updating the salary.
#[derive(Debug, Deserialize)]
pub struct SalaryRequest {
    /// Monthly amount.
    pub amount: Option<Decimal>,
}

/// Response for a salary record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResponse {
    /// Salary record ID.
    pub id: Uuid,
    /// Owning user ID.
    pub user: Uuid,
    /// Monthly amount.
    pub amount: Decimal,
    /// First instant of the covered calendar month.
    pub month: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<salaries::Model> for SalaryResponse {
    fn from(model: salaries::Model) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            amount: model.amount,
            month: model.month.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Response for the current-salary lookup.
///
/// "No salary set" is not an error; callers get a zero-amount placeholder.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SalaryView {
    /// A stored salary record.
    Full(SalaryResponse),
    /// The zero placeholder when nothing is set this month.
    Placeholder {
        /// Always zero.
        amount: Decimal,
    },
}

/// First instant of the current calendar month, anchored to server time.
fn current_month_start() -> DateTime<Utc> {
    month_start(Local::now()).with_timezone(&Utc)
}

fn validated_amount(payload: SalaryRequest) -> Result<Decimal, ApiError> {
    let Some(amount) = payload.amount else {
        return Err(ApiError::MissingFields(vec!["amount"]));
    };
    if amount < Decimal::ZERO {
        return Err(AppError::Validation("amount must be at least 0".to_string()).into());
    }
    Ok(amount)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /salary - The owner's salary for the current month, or `{amount: 0}`.
async fn get_salary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SalaryView>, ApiError> {
    let salary = SalaryRepository::new((*state.db).clone())
        .find_current(auth.user_id(), current_month_start())
        .await?;

    Ok(Json(salary.map_or(
        SalaryView::Placeholder {
            amount: Decimal::ZERO,
        },
        |s| SalaryView::Full(s.into()),
    )))
}

/// POST /salary - Set the salary for the current month, once.
async fn set_salary(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<SalaryRequest>,
) -> Result<(StatusCode, Json<SalaryResponse>), ApiError> {
    let amount = validated_amount(payload)?;
    let boundary = current_month_start();
    let repo = SalaryRepository::new((*state.db).clone());

    // Check-then-insert; concurrent duplicates can slip through, a known
    // limitation carried over from the original service.
    if repo
        .find_current(auth.user_id(), boundary)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Salary already set for this month".to_string()).into());
    }

    let salary = repo.create(auth.user_id(), amount, boundary).await?;
    info!(user_id = %auth.user_id(), %amount, "Salary set for current month");

    Ok((StatusCode::CREATED, Json(salary.into())))
}

/// PUT /salary - Update the current month's salary amount in place.
async fn update_salary(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<SalaryRequest>,
) -> Result<Json<SalaryResponse>, ApiError> {
    let amount = validated_amount(payload)?;
    let repo = SalaryRepository::new((*state.db).clone());

    let existing = repo
        .find_current(auth.user_id(), current_month_start())
        .await?
        .ok_or_else(|| AppError::NotFound("No salary found for current month".to_string()))?;

    let salary = repo.update_amount(existing, amount).await?;
    info!(user_id = %auth.user_id(), %amount, "Salary updated");

    Ok(Json(salary.into()))
}
