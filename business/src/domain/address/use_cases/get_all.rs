use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllAddressesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllAddressesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllAddressesParams) -> Result<Vec<Address>, AddressError>;
}
