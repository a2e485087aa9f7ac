use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct UpdateProfileParams {
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileParams) -> Result<User, UserError>;
}
