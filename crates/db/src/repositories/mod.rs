//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Each repository takes its connection at construction time so tests can
//! inject a substitute.

pub mod expense;
pub mod salary;
pub mod todo;
pub mod user;

pub use expense::{CreateExpenseInput, ExpenseRepository, ExpenseUpdate};
pub use salary::SalaryRepository;
pub use todo::{TodoChanges, TodoRepository};
pub use user::UserRepository;
