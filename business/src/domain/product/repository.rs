use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::Product;
use super::value_objects::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Active products matching the filter, newest first.
    async fn search(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Atomically removes `quantity` units only if at least that many are in stock.
    /// Returns `false` when the stock was insufficient and nothing changed.
    async fn decrement_stock(&self, id: Uuid, quantity: i32) -> Result<bool, RepositoryError>;
    async fn increment_stock(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError>;
}
