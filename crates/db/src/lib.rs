//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - Connection helpers, including the process-level reconnect loop

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{ExpenseRepository, SalaryRepository, TodoRepository, UserRepository};

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::warn;

use finbook_shared::config::DatabaseConfig;

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(&config.url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    Database::connect(options).await
}

/// Connects to the database, retrying forever with a fixed delay.
///
/// Connectivity failures are a process-level concern: the server keeps
/// retrying rather than exiting, and requests issued while disconnected fail
/// with internal errors instead of queuing.
pub async fn connect_with_retry(config: &DatabaseConfig, delay: Duration) -> DatabaseConnection {
    loop {
        match connect(config).await {
            Ok(db) => return db,
            Err(e) => {
                warn!(error = %e, retry_in_secs = delay.as_secs(), "Database connection failed");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
