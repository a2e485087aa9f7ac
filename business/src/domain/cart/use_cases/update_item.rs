use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartItemParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError>;
}
