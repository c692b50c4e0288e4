//! `SeaORM` entity definitions.

pub mod expenses;
pub mod salaries;
pub mod todos;
pub mod users;
