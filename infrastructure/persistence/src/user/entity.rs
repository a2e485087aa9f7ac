use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::identity::Role;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::value_objects::Email;

use crate::error::corrupt_row;

pub(crate) const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, roles, enabled, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let roles = self
            .roles
            .iter()
            .map(|r| r.parse::<Role>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt_row("users", &e))?;

        Ok(User::from_repository(
            UserId::new(self.id),
            Email::from_repository(self.email),
            self.password_hash,
            self.first_name,
            self.last_name,
            roles,
            self.enabled,
            self.created_at,
            self.updated_at,
        ))
    }
}
