use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

pub const DEFAULT_ORDERS_PAGE_SIZE: u32 = 10;

pub struct GetUserOrdersParams {
    pub user_id: UserId,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetUserOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<Page<Order>, OrderError>;
}
