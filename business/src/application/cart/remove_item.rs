use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError> {
        let mut cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        if cart.remove_item(params.product_id) {
            self.repository.save(&cart).await?;
            self.logger.info(&format!(
                "Removed product {} from cart of user {}",
                params.product_id, params.user_id
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{cart_with, mock_logger, product, MockCartRepo};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_remove_line_and_save() {
        let user_id = UserId::generate();
        let book = product("Book", "10.00", 5);
        let book_id = book.id;
        let stored = cart_with(user_id, &[(&book, 1)]);

        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(stored.clone())));
        mock_repo
            .expect_save()
            .withf(|cart| cart.items.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                user_id,
                product_id: book_id,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_be_noop_for_absent_product() {
        let user_id = UserId::generate();
        let stored = cart_with(user_id, &[(&product("Book", "10.00", 5), 1)]);

        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(stored.clone())));
        mock_repo.expect_save().never();

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                user_id,
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::generate(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
