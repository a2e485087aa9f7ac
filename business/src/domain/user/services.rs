use chrono::{DateTime, Utc};

use super::errors::UserError;
use super::model::User;

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UserError>;
    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError>;
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<AccessToken, UserError>;
}

/// Result of a successful register or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl AuthSession {
    pub fn new(access_token: AccessToken, user: User) -> Self {
        Self {
            token: access_token.token,
            expires_at: access_token.expires_at,
            user,
        }
    }
}
