use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::shared::value_objects::UserId;

pub struct GetDefaultAddressParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetDefaultAddressUseCase: Send + Sync {
    async fn execute(&self, params: GetDefaultAddressParams) -> Result<Address, AddressError>;
}
