//! `SeaORM` Entity for the todos table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A todo item on the shared list. Todos carry no owner.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    /// Todo ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Todo text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
