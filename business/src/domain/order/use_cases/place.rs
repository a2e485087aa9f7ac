use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct PlaceOrderParams {
    pub user_id: UserId,
    pub shipping_address_id: Uuid,
    pub shipping_cost: Option<BigDecimal>,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError>;
}
