use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::identity::Identity;

pub struct UpdateOrderStatusParams {
    pub identity: Identity,
    pub id: Uuid,
    pub status: OrderStatus,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
