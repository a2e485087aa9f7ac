use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetProfileParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<User, UserError>;
}
