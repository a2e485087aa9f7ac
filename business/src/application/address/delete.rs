use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::delete::{DeleteAddressParams, DeleteAddressUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteAddressUseCase for DeleteAddressUseCaseImpl {
    async fn execute(&self, params: DeleteAddressParams) -> Result<(), AddressError> {
        self.logger.info(&format!(
            "Deleting address {} of user {}",
            params.id, params.user_id
        ));

        // No other address is promoted when the default goes away.
        self.repository
            .delete(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AddressError::NotFound,
                other => AddressError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{mock_logger, MockAddressRepo};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_owned_address() {
        let user_id = UserId::generate();
        let id = Uuid::new_v4();

        let mut mock_repo = MockAddressRepo::new();
        mock_repo
            .expect_delete()
            .withf(move |address_id, owner| *address_id == id && *owner == user_id)
            .times(1)
            .returning(|_, _| Ok(()));
        mock_repo.expect_save().never();

        let use_case = DeleteAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case
            .execute(DeleteAddressParams { user_id, id })
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn should_report_not_found_for_foreign_address() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = DeleteAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteAddressParams {
                user_id: UserId::generate(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AddressError::NotFound));
    }
}
