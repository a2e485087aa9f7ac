use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {} for user {}",
            params.product_id, params.quantity, params.user_id
        ));

        let mut cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        cart.set_quantity(params.product_id, params.quantity)?;
        self.repository.save(&cart).await?;

        Ok(cart)
    }
}
