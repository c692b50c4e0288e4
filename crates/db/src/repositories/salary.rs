//! Salary repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::salaries;

/// Salary repository for the per-month singleton records.
#[derive(Debug, Clone)]
pub struct SalaryRepository {
    db: DatabaseConnection,
}

impl SalaryRepository {
    /// Creates a new salary repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user's latest salary on or after the month boundary.
    ///
    /// Callers pass the first instant of the current calendar month; `None`
    /// means no salary has been set this month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_current(
        &self,
        user_id: Uuid,
        month_start: DateTime<Utc>,
    ) -> Result<Option<salaries::Model>, DbErr> {
        salaries::Entity::find()
            .filter(salaries::Column::UserId.eq(user_id))
            .filter(salaries::Column::Month.gte(month_start))
            .order_by_desc(salaries::Column::Month)
            .one(&self.db)
            .await
    }

    /// Creates a salary record stamped with the month boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: Uuid,
        amount: Decimal,
        month: DateTime<Utc>,
    ) -> Result<salaries::Model, DbErr> {
        let now = Utc::now().into();
        let salary = salaries::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            amount: Set(amount),
            month: Set(month.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        salary.insert(&self.db).await
    }

    /// Mutates the amount of an existing salary record in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update_amount(
        &self,
        existing: salaries::Model,
        amount: Decimal,
    ) -> Result<salaries::Model, DbErr> {
        let mut salary: salaries::ActiveModel = existing.into();
        salary.amount = Set(amount);
        salary.updated_at = Set(Utc::now().into());

        salary.update(&self.db).await
    }
}
