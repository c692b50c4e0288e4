//! The error-to-HTTP translation boundary.
//!
//! Every handler returns `Result<_, ApiError>`; domain errors are converted
//! here, exactly once, into a status code and a `{"message": ...}` JSON
//! body. Internal failures are logged with their detail and surfaced with a
//! generic message; debug builds attach the detail to the body as well.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

use finbook_shared::AppError;

/// Error type returned by route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error carrying its own status mapping.
    App(AppError),
    /// Required request fields were absent or empty, reported back by name.
    MissingFields(Vec<&'static str>),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::App(AppError::Database(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::App(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!(error = %err, "Request failed");
                    let body = if cfg!(debug_assertions) {
                        json!({ "message": "Internal server error", "error": err.message() })
                    } else {
                        json!({ "message": "Internal server error" })
                    };
                    return (status, Json(body)).into_response();
                }

                (status, Json(json!({ "message": err.message() }))).into_response()
            }
            Self::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "All fields are required",
                    "missing": fields
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("dup".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (
                AppError::Database("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::App(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_missing_fields_is_bad_request() {
        let response = ApiError::MissingFields(vec!["email", "name"]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
