use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        if params.quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Adding {} x {} to cart of user {}",
            params.quantity, params.product_id, params.user_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.active {
            return Err(CartError::ProductUnavailable);
        }
        // Advisory only: stock is reserved at checkout, not here.
        if !product.has_stock_for(params.quantity) {
            self.logger.warn(&format!(
                "Insufficient stock for {}: requested {}, available {}",
                product.name, params.quantity, product.stock_quantity
            ));
            return Err(CartError::InsufficientStock(product.name));
        }

        let mut cart = self
            .cart_repository
            .find_by_user_id(&params.user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(params.user_id));

        cart.add_item(&product, params.quantity)?;
        self.cart_repository.save(&cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{cart_with, dec, mock_logger, product, MockCartRepo, MockProductRepo};
    use uuid::Uuid;

    fn use_case(cart_repo: MockCartRepo, product_repo: MockProductRepo) -> AddCartItemUseCaseImpl {
        AddCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_create_cart_lazily_on_first_add() {
        let book = product("Programming Book", "39.99", 100);
        let book_id = book.id;
        let user_id = UserId::generate();

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(book.clone()));
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user_id().returning(|_| Ok(None));
        cart_repo
            .expect_save()
            .withf(move |cart| cart.user_id == user_id && cart.items.len() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let cart = use_case(cart_repo, product_repo)
            .execute(AddCartItemParams {
                user_id,
                product_id: book_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.items[0].product_name, "Programming Book");
        assert_eq!(cart.total_price, dec("79.98"));
    }

    #[tokio::test]
    async fn should_increment_existing_line_instead_of_duplicating() {
        let book = product("Programming Book", "10.00", 100);
        let book_id = book.id;
        let user_id = UserId::generate();
        let stored = cart_with(user_id, &[(&book, 2)]);

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(book.clone()));
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(stored.clone())));
        cart_repo.expect_save().returning(|_| Ok(()));

        let cart = use_case(cart_repo, product_repo)
            .execute(AddCartItemParams {
                user_id,
                product_id: book_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 4);
        assert_eq!(cart.total_price, dec("40.00"));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity_before_lookup() {
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_by_id().never();

        let result = use_case(MockCartRepo::new(), product_repo)
            .execute(AddCartItemParams {
                user_id: UserId::generate(),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_fail_when_product_missing() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(MockCartRepo::new(), product_repo)
            .execute(AddCartItemParams {
                user_id: UserId::generate(),
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_fail_when_product_inactive() {
        let mut hidden = product("Retired Phone", "99.00", 10);
        hidden.active = false;
        let id = hidden.id;

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(hidden.clone()));
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_save().never();

        let result = use_case(cart_repo, product_repo)
            .execute(AddCartItemParams {
                user_id: UserId::generate(),
                product_id: id,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductUnavailable));
    }

    #[tokio::test]
    async fn should_fail_when_stock_insufficient() {
        let scarce = product("Smartphone", "699.99", 1);
        let id = scarce.id;

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(scarce.clone()));
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_save().never();

        let result = use_case(cart_repo, product_repo)
            .execute(AddCartItemParams {
                user_id: UserId::generate(),
                product_id: id,
                quantity: 2,
            })
            .await;

        match result.unwrap_err() {
            CartError::InsufficientStock(name) => assert_eq!(name, "Smartphone"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
