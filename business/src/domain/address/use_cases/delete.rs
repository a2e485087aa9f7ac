use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::address::errors::AddressError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteAddressParams {
    pub user_id: UserId,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteAddressUseCase: Send + Sync {
    async fn execute(&self, params: DeleteAddressParams) -> Result<(), AddressError>;
}
