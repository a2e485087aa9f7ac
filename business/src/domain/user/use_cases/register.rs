use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::services::AuthSession;

pub struct RegisterUserParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<AuthSession, UserError>;
}
