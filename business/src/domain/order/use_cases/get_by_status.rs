use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::identity::Identity;

pub struct GetOrdersByStatusParams {
    pub identity: Identity,
    pub status: OrderStatus,
}

#[async_trait]
pub trait GetOrdersByStatusUseCase: Send + Sync {
    async fn execute(&self, params: GetOrdersByStatusParams) -> Result<Vec<Order>, OrderError>;
}
