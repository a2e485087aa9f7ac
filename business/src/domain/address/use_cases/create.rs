use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::shared::value_objects::UserId;

pub struct CreateAddressParams {
    pub user_id: UserId,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

#[async_trait]
pub trait CreateAddressUseCase: Send + Sync {
    async fn execute(&self, params: CreateAddressParams) -> Result<Address, AddressError>;
}
