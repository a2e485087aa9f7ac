use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::user::model::User;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_uuid(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            roles: user.roles.iter().map(ToString::to_string).collect(),
            created_at: user.created_at,
        }
    }
}

/// Omitted or blank names are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
