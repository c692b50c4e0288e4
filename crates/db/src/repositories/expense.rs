//! Expense repository for ledger database operations.
//!
//! Every lookup that can mutate or reveal a single record filters on
//! (id, `user_id`) together, so a record owned by someone else is
//! indistinguishable from one that does not exist.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::expenses;
use finbook_shared::Category;

/// Input for creating an expense. Fields are pre-validated.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Owning user.
    pub user_id: Uuid,
    /// Trimmed description.
    pub description: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Expense date.
    pub date: DateTime<Utc>,
    /// Category.
    pub category: Category,
}

/// The full merged field set to persist on update.
///
/// Partial-merge semantics live in the caller: it overlays the supplied
/// fields on the existing record, re-validates, and hands the result here.
#[derive(Debug, Clone)]
pub struct ExpenseUpdate {
    /// Trimmed description.
    pub description: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Expense date.
    pub date: DateTime<Utc>,
    /// Category.
    pub category: Category,
}

/// Expense repository for owner-scoped CRUD.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all expenses for a user, most recent date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<expenses::Model>, DbErr> {
        expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_desc(expenses::Column::Date)
            .all(&self.db)
            .await
    }

    /// Finds an expense by ID, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<expenses::Model>, DbErr> {
        expenses::Entity::find()
            .filter(expenses::Column::Id.eq(id))
            .filter(expenses::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// Creates a new expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateExpenseInput) -> Result<expenses::Model, DbErr> {
        let now = Utc::now().into();
        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(input.user_id),
            description: Set(input.description),
            amount: Set(input.amount),
            date: Set(input.date.into()),
            category: Set(input.category.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        expense.insert(&self.db).await
    }

    /// Persists the merged field set over an existing expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        existing: expenses::Model,
        update: ExpenseUpdate,
    ) -> Result<expenses::Model, DbErr> {
        let mut expense: expenses::ActiveModel = existing.into();
        expense.description = Set(update.description);
        expense.amount = Set(update.amount);
        expense.date = Set(update.date.into());
        expense.category = Set(update.category.as_str().to_string());
        expense.updated_at = Set(Utc::now().into());

        expense.update(&self.db).await
    }

    /// Deletes an expense record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, expense: expenses::Model) -> Result<(), DbErr> {
        expense.delete(&self.db).await.map(|_| ())
    }
}
