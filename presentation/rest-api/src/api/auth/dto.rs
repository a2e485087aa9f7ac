use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::user::services::AuthSession;

use crate::api::user::dto::UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RegisterRequest {
    pub email: String,
    /// At least 8 characters
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AuthResponse {
    /// Send as `Authorization: Bearer <token>`
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
            user: session.user.into(),
        }
    }
}
