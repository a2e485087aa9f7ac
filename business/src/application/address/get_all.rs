use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::get_all::{GetAllAddressesParams, GetAllAddressesUseCase};
use crate::domain::logger::Logger;

pub struct GetAllAddressesUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllAddressesUseCase for GetAllAddressesUseCaseImpl {
    async fn execute(&self, params: GetAllAddressesParams) -> Result<Vec<Address>, AddressError> {
        self.logger
            .debug(&format!("Fetching addresses of user {}", params.user_id));

        let addresses = self.repository.get_all(&params.user_id).await?;
        Ok(addresses)
    }
}
