use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::{Address, NewAddressProps};
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::create::{CreateAddressParams, CreateAddressUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateAddressUseCase for CreateAddressUseCaseImpl {
    async fn execute(&self, params: CreateAddressParams) -> Result<Address, AddressError> {
        let mut address = Address::new(NewAddressProps {
            user_id: params.user_id,
            street: params.street,
            city: params.city,
            state: params.state,
            zip_code: params.zip_code,
            country: params.country,
            is_default: params.is_default,
        })?;

        // A user's first address is always the default.
        if !address.is_default && self.repository.count_by_user(&params.user_id).await? == 0 {
            address.is_default = true;
        }

        if address.is_default {
            let reset = self.repository.clear_default(&params.user_id).await?;
            if reset > 0 {
                self.logger.debug(&format!(
                    "Reset {} default address(es) for user {}",
                    reset, params.user_id
                ));
            }
        }

        // A concurrent default change can still win the one-default index.
        self.repository.save(&address).await.map_err(|e| match e {
            RepositoryError::Duplicated => AddressError::DefaultConflict,
            other => AddressError::Repository(other),
        })?;

        self.logger.info(&format!(
            "Address {} created for user {} (default: {})",
            address.id, params.user_id, address.is_default
        ));
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{mock_logger, MockAddressRepo};
    use mockall::Sequence;

    fn params(user_id: UserId, is_default: bool) -> CreateAddressParams {
        CreateAddressParams {
            user_id,
            street: "742 Evergreen Terrace".to_string(),
            city: "Springfield".to_string(),
            state: Some("OR".to_string()),
            zip_code: "97403".to_string(),
            country: "us".to_string(),
            is_default,
        }
    }

    #[tokio::test]
    async fn should_promote_first_address_to_default() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_count_by_user().returning(|_| Ok(0));
        mock_repo.expect_clear_default().times(1).returning(|_| Ok(0));
        mock_repo
            .expect_save()
            .withf(|address| address.is_default)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let address = use_case
            .execute(params(UserId::generate(), false))
            .await
            .unwrap();

        assert!(address.is_default);
        assert_eq!(address.country, "US");
    }

    #[tokio::test]
    async fn should_leave_existing_default_when_not_requested() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_count_by_user().returning(|_| Ok(1));
        mock_repo.expect_clear_default().never();
        mock_repo
            .expect_save()
            .withf(|address| !address.is_default)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let address = use_case
            .execute(params(UserId::generate(), false))
            .await
            .unwrap();

        assert!(!address.is_default);
    }

    #[tokio::test]
    async fn should_reset_prior_default_before_saving_new_one() {
        let user_id = UserId::generate();
        let mut seq = Sequence::new();
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_count_by_user().never();
        mock_repo
            .expect_clear_default()
            .withf(move |id| *id == user_id)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        mock_repo
            .expect_save()
            .withf(|address| address.is_default)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let address = use_case.execute(params(user_id, true)).await.unwrap();

        assert!(address.is_default);
    }

    #[tokio::test]
    async fn should_report_conflict_when_another_default_wins() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_clear_default().returning(|_| Ok(1));
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(UserId::generate(), true)).await;

        assert!(matches!(result.unwrap_err(), AddressError::DefaultConflict));
    }

    #[tokio::test]
    async fn should_keep_other_save_failures_as_repository_errors() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_count_by_user().returning(|_| Ok(2));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(UserId::generate(), false)).await;

        assert!(matches!(
            result.unwrap_err(),
            AddressError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_validate_before_touching_store() {
        let mut mock_repo = MockAddressRepo::new();
        mock_repo.expect_count_by_user().never();
        mock_repo.expect_save().never();

        let use_case = CreateAddressUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut invalid = params(UserId::generate(), true);
        invalid.zip_code = "!".to_string();

        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), AddressError::InvalidZipCode));
    }
}
