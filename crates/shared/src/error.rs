//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every domain failure maps onto one of these variants; the API layer
/// translates them to HTTP status codes at the request boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad credentials or token.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Record absent, or not owned by the requester.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate email or duplicate month-salary.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    ///
    /// Conflicts map to 400 rather than 409: the original service reported
    /// duplicate emails and duplicate month-salaries as plain bad requests.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Conflict(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the user-facing message, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Database(m)
            | Self::Internal(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 400);
        assert_eq!(AppError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_message_strips_prefix() {
        let err = AppError::Unauthorized("Invalid credentials".into());
        assert_eq!(err.message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Authentication failed: Invalid credentials");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("Expense not found".into()).to_string(),
            "Not found: Expense not found"
        );
        assert_eq!(
            AppError::Conflict("User already exists".into()).to_string(),
            "Conflict: User already exists"
        );
    }
}
