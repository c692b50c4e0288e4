//! Authentication routes for register, login, and profile lookup.

use axum::{Json, Router, extract::State, http::StatusCode, routing::{get, post}};
use chrono::Utc;
use tracing::{error, info};

use crate::{AppState, error::ApiError, middleware::AuthUser};
use finbook_core::auth::{hash_password, verify_password};
use finbook_db::UserRepository;
use finbook_shared::{
    AppError,
    auth::{AuthResponse, LoginRequest, ProfileView, RegisterRequest, UserView},
};

/// Creates the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Creates the auth routes that require a valid token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/profile", get(profile))
}

/// The one failure for both unknown email and wrong password, so responses
/// never reveal whether an account exists.
fn invalid_credentials() -> ApiError {
    AppError::Unauthorized("Invalid credentials".to_string()).into()
}

/// POST /auth/register - Create an account and return a session token.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    let name = payload.name.unwrap_or_default();

    let mut missing = Vec::new();
    if email.is_empty() {
        missing.push("email");
    }
    if password.is_empty() {
        missing.push("password");
    }
    if name.is_empty() {
        missing.push("name");
    }
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let user_repo = UserRepository::new((*state.db).clone());

    // Check-then-insert; the unique constraint on email backstops the race.
    if user_repo.email_exists(&email).await? {
        return Err(AppError::Conflict("User already exists".to_string()).into());
    }

    let password_hash = hash_password(&password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        AppError::Internal(e.to_string())
    })?;

    let user = user_repo.create(&email, &password_hash, &name).await?;
    info!(user_id = %user.id, email = %user.email, "New user registered");

    let token = state
        .jwt_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserView {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        }),
    ))
}

/// POST /auth/login - Verify credentials and return a fresh token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user_repo = UserRepository::new((*state.db).clone());

    let Some(user) = user_repo.find_by_email(&payload.email).await? else {
        info!(email = %payload.email, "Login attempt for unknown email");
        return Err(invalid_credentials());
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return Err(invalid_credentials());
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return Err(AppError::Internal(e.to_string()).into());
        }
    }

    let token = state
        .jwt_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserView {
            id: user.id,
            email: user.email,
            name: user.name,
        },
    }))
}

/// GET /auth/profile - Return the authenticated user's record, redacted.
async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileView>, ApiError> {
    let user = UserRepository::new((*state.db).clone())
        .find_by_id(auth.user_id())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileView {
        id: user.id,
        email: user.email,
        name: user.name,
        created_at: user.created_at.with_timezone(&Utc),
        updated_at: user.updated_at.with_timezone(&Utc),
    }))
}
