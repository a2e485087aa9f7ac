use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_status::{
    GetOrdersByStatusParams, GetOrdersByStatusUseCase,
};

pub struct GetOrdersByStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersByStatusUseCase for GetOrdersByStatusUseCaseImpl {
    async fn execute(&self, params: GetOrdersByStatusParams) -> Result<Vec<Order>, OrderError> {
        if !params.identity.is_admin() {
            return Err(OrderError::AccessDenied);
        }

        self.logger
            .debug(&format!("Fetching orders with status {}", params.status));

        let orders = self.repository.find_by_status(params.status).await?;
        Ok(orders)
    }
}
