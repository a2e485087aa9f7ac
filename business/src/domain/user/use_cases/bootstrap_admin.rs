use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct BootstrapAdminParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait BootstrapAdminUseCase: Send + Sync {
    /// Returns `true` when a new admin account was created.
    async fn execute(&self, params: BootstrapAdminParams) -> Result<bool, UserError>;
}
