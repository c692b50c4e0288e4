//! Todo repository for the shared todo list.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::todos;

/// Fields to merge over an existing todo; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    /// New text, if supplied.
    pub text: Option<String>,
    /// New completion flag, if supplied.
    pub completed: Option<bool>,
}

/// Todo repository for CRUD over the shared list.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    db: DatabaseConnection,
}

impl TodoRepository {
    /// Creates a new todo repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all todos, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<todos::Model>, DbErr> {
        todos::Entity::find()
            .order_by_asc(todos::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Finds a todo by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<todos::Model>, DbErr> {
        todos::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new todo.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, text: &str, completed: bool) -> Result<todos::Model, DbErr> {
        let now = Utc::now().into();
        let todo = todos::ActiveModel {
            id: Set(Uuid::new_v4()),
            text: Set(text.to_string()),
            completed: Set(completed),
            created_at: Set(now),
            updated_at: Set(now),
        };

        todo.insert(&self.db).await
    }

    /// Merges the supplied changes over an existing todo.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        existing: todos::Model,
        changes: TodoChanges,
    ) -> Result<todos::Model, DbErr> {
        let mut todo: todos::ActiveModel = existing.into();
        if let Some(text) = changes.text {
            todo.text = Set(text);
        }
        if let Some(completed) = changes.completed {
            todo.completed = Set(completed);
        }
        todo.updated_at = Set(Utc::now().into());

        todo.update(&self.db).await
    }

    /// Deletes a todo.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, todo: todos::Model) -> Result<(), DbErr> {
        todo.delete(&self.db).await.map(|_| ())
    }
}
