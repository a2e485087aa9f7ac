use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .debug(&format!("Fetching cart for user: {}", params.user_id));

        let cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(params.user_id));

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{cart_with, mock_logger, product, MockCartRepo};
    use num_traits::Zero;

    #[tokio::test]
    async fn should_return_empty_cart_when_none_stored() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user_id = UserId::generate();
        let cart = use_case.execute(GetCartParams { user_id }).await.unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.user_id, user_id);
        assert!(cart.total_price.is_zero());
    }

    #[tokio::test]
    async fn should_return_stored_cart() {
        let user_id = UserId::generate();
        let stored = cart_with(user_id, &[(&product("Book", "39.99", 10), 2)]);

        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(GetCartParams { user_id }).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }
}
