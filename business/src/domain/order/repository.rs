use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

use super::model::Order;
use super::value_objects::OrderStatus;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    /// The user's orders, newest first.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<Page<Order>, RepositoryError>;
    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepositoryError>;
}
