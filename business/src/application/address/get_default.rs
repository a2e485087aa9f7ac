use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::get_default::{
    GetDefaultAddressParams, GetDefaultAddressUseCase,
};
use crate::domain::logger::Logger;

pub struct GetDefaultAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDefaultAddressUseCase for GetDefaultAddressUseCaseImpl {
    async fn execute(&self, params: GetDefaultAddressParams) -> Result<Address, AddressError> {
        self.logger
            .debug(&format!("Fetching default address of user {}", params.user_id));

        self.repository
            .find_default(&params.user_id)
            .await?
            .ok_or(AddressError::DefaultNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{address, mock_logger, MockAddressRepo};

    #[tokio::test]
    async fn should_return_default_address() {
        let user_id = UserId::generate();
        let stored = address(user_id, true);
        let stored_id = stored.id;

        let mut mock_repo = MockAddressRepo::new();
        mock_repo
            .expect_find_default()
            .returning(move |_| Ok(Some(stored.clone())));

        let use_case = GetDefaultAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetDefaultAddressParams { user_id })
            .await
            .unwrap();

        assert_eq!(found.id, stored_id);
    }

    #[tokio::test]
    async fn should_fail_when_user_has_no_default() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_find_default().returning(|_| Ok(None));

        let use_case = GetDefaultAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetDefaultAddressParams {
                user_id: UserId::generate(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AddressError::DefaultNotFound));
    }
}
