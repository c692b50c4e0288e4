//! Authentication types for session tokens and the auth wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a session token.
///
/// The owner identity in `sub` is the only claim downstream operations
/// consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }
}

/// Registration request payload.
///
/// All fields are optional at the wire level so that absent fields can be
/// reported back by name instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// User email.
    pub email: Option<String>,
    /// User password.
    pub password: Option<String>,
    /// User display name.
    pub name: Option<String>,
}

/// Login request payload.
///
/// Missing fields default to empty strings and fall through to the single
/// invalid-credentials failure path.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// User email.
    #[serde(default)]
    pub email: String,
    /// User password.
    #[serde(default)]
    pub password: String,
}

/// Response payload for successful register/login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Session token.
    pub token: String,
    /// Redacted user view.
    pub user: UserView,
}

/// Redacted user view returned by auth endpoints.
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
    /// User display name.
    pub name: String,
}

/// Full profile view returned by the profile endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
    /// User display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_view_never_exposes_a_hash() {
        let view = UserView {
            id: Uuid::new_v4(),
            email: "a@b.c".to_string(),
            name: "A".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("email"));
        assert!(object.contains_key("name"));
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_none());
        assert!(req.password.is_none());
        assert!(req.name.is_none());
    }

    #[test]
    fn test_login_request_defaults_missing_fields_to_empty() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(req.email, "a@b.c");
        assert_eq!(req.password, "");
    }
}
