use chrono::{DateTime, Utc};

use super::errors::UserError;
use super::value_objects::Email;
use crate::domain::shared::identity::{Identity, Role};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let first_name = Self::required_name(&props.first_name, UserError::FirstNameEmpty)?;
        let last_name = Self::required_name(&props.last_name, UserError::LastNameEmpty)?;

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            email: props.email,
            password_hash: props.password_hash,
            first_name,
            last_name,
            roles: props.roles,
            enabled: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: UserId,
        email: Email,
        password_hash: String,
        first_name: String,
        last_name: String,
        roles: Vec<Role>,
        enabled: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            first_name,
            last_name,
            roles,
            enabled,
            created_at,
            updated_at,
        }
    }

    /// Applies the provided name changes. Blank values are ignored.
    pub fn rename(&mut self, first_name: Option<String>, last_name: Option<String>) {
        let mut changed = false;
        if let Some(name) = first_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            self.first_name = name;
            changed = true;
        }
        if let Some(name) = last_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            self.last_name = name;
            changed = true;
        }
        if changed {
            self.updated_at = Utc::now();
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.roles.clone())
    }

    fn required_name(value: &str, error: UserError) -> Result<String, UserError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(error);
        }
        Ok(trimmed.to_string())
    }
}
