//! Derived summary route.
//!
//! Serves the aggregation view: the owner's expense list and current salary
//! reduced through the pure summary computation, recomputed per request.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{Local, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use finbook_core::period::month_start;
use finbook_core::summary::{self, ExpenseRecord, Summary, TimeWindow};
use finbook_db::{ExpenseRepository, SalaryRepository};
use finbook_shared::{AppError, Category};

/// Creates the summary route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}

/// Query parameters for the summary.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Time window over expense dates; defaults to `all`.
    #[serde(default)]
    pub window: TimeWindow,
}

/// GET /summary - Totals, savings, and category breakdown for the owner.
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Summary>, ApiError> {
    let expenses = ExpenseRepository::new((*state.db).clone())
        .list_for_user(auth.user_id())
        .await?;

    let salary = SalaryRepository::new((*state.db).clone())
        .find_current(auth.user_id(), month_start(Local::now()).with_timezone(&Utc))
        .await?;

    let records = expenses
        .iter()
        .map(|e| {
            // Stored labels come from the shared set; anything else is a
            // corrupt row, not a user error.
            let category = e
                .category
                .parse::<Category>()
                .map_err(|err| AppError::Internal(err.to_string()))?;
            Ok(ExpenseRecord {
                date: e.date.with_timezone(&Utc),
                amount: e.amount,
                category,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let total_income = salary.map_or(Decimal::ZERO, |s| s.amount);

    Ok(Json(summary::compute(
        &records,
        total_income,
        query.window,
        Utc::now(),
    )))
}
